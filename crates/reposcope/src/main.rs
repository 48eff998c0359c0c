mod args;
mod context;
mod help;
mod input;
mod logger;
mod pager;

use std::{
    io::{self, Read},
    path::Path,
    time::Duration,
};

use anyhow::{Context as _, Result};
use clap::Parser;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use reposcope_lineinfo::{ColorPairs, LineInfoRegistry, StylePalette};

use crate::args::{Cli, Commands};
use crate::context::Context;
use crate::pager::Pager;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.no_log {
        match logger::init() {
            Ok(path) => log::info!("Logging to {}", path.display()),
            Err(err) => eprintln!("Warning: {:#}", err),
        }
    }

    let mut ctx = Context::load(cli.config.as_deref())?;
    for err in &ctx.config_errors {
        eprintln!("Warning: {}", err);
    }

    match cli.command {
        Commands::Keys { keymap, json } => print_keys(&ctx, keymap.as_deref(), json),
        Commands::Classify { file } => {
            let text = read_input(&file)?;
            init_colors(&mut ctx.lines)?;
            print!("{}", classify_text(&ctx.lines, &text));
            Ok(())
        }
        Commands::View { file } => {
            let text = read_input(&file)?;
            let palette = init_colors(&mut ctx.lines)?;
            let title = file.display().to_string();
            let pager = Pager::new(title, &text, &ctx.bindings, &ctx.lines)?;
            run_pager(pager, &ctx, &palette)
        }
    }
}

fn print_keys(ctx: &Context, keymap: Option<&str>, json: bool) -> Result<()> {
    let legends = help::legends(&ctx.bindings, keymap)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&legends)?);
        return Ok(());
    }

    for legend in legends.iter().filter(|legend| !legend.is_empty()) {
        println!("{}", legend.to_text());
    }
    Ok(())
}

/// Read `path`, or standard input for `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn init_colors(lines: &mut LineInfoRegistry) -> Result<StylePalette> {
    let mut palette = StylePalette::new();
    let mut pairs = ColorPairs::new();
    pairs
        .init_colors(lines, &mut palette)
        .context("Failed to initialize colors")?;
    Ok(palette)
}

/// One row per input line: line number, category and color pair
fn classify_text(lines: &LineInfoRegistry, text: &str) -> String {
    let mut out = String::new();

    for (number, line) in text.lines().enumerate() {
        let Some(info) = lines.info(lines.classify(line)) else {
            continue;
        };
        let pair = info
            .color_pair()
            .map(|id| id.get().to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("{:>6} {:<20} {:>3}  {}\n", number + 1, info.name(), pair, line));
    }

    out
}

fn run_pager(pager: Pager, ctx: &Context, palette: &StylePalette) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = pager_loop(&mut terminal, pager, ctx, palette);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn pager_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut pager: Pager,
    ctx: &Context,
    palette: &StylePalette,
) -> Result<()> {
    while pager.is_running() {
        terminal.draw(|frame| {
            let area = frame.area();
            // title and status rows
            pager.set_height(area.height.saturating_sub(2) as usize);
            pager.render(frame, area, &ctx.lines, palette);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match input::key_from_event(&key) {
                Some(key) => pager.handle_key(key, &ctx.bindings),
                None => log::debug!("Ignoring key event {:?}", key),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_text_reports_category_and_pair() {
        let mut lines = LineInfoRegistry::new();
        init_colors(&mut lines).unwrap();

        let out = classify_text(&lines, "commit abc\n+added\nplain");
        let rows: Vec<Vec<&str>> = out
            .lines()
            .map(|row| row.split_whitespace().take(2).collect())
            .collect();

        assert_eq!(
            rows,
            vec![vec!["1", "commit"], vec!["2", "diff-add"], vec!["3", "default"]]
        );
    }
}
