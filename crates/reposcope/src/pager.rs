//! Pager view
//!
//! Keys are resolved through the `pager` keymap. Lines are painted with the
//! style of their category.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use reposcope_keymap::{Action, Bindings, Key, KeymapId, Request, key_name};
use reposcope_lineinfo::{LineId, LineInfoRegistry, LineType, StylePalette};

/// Name of the keymap used for key lookups
pub const PAGER_KEYMAP: &str = "pager";

/// Pager state
#[derive(Debug, Clone)]
pub struct Pager {
    title: String,
    lines: Vec<String>,
    classes: Vec<LineId>,
    keymap: KeymapId,
    cursor: usize,
    offset: usize,
    height: usize,
    status: String,
    running: bool,
}

impl Pager {
    pub fn new(
        title: impl Into<String>,
        text: &str,
        bindings: &Bindings,
        lines: &LineInfoRegistry,
    ) -> anyhow::Result<Self> {
        let keymap = bindings.keymaps().require(PAGER_KEYMAP)?;
        let text_lines: Vec<String> = text.lines().map(str::to_string).collect();
        let classes = text_lines.iter().map(|line| lines.classify(line)).collect();

        Ok(Self {
            title: title.into(),
            lines: text_lines,
            classes,
            keymap,
            cursor: 0,
            offset: 0,
            height: 1,
            status: String::new(),
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Set the number of visible text rows
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.scroll_to_cursor();
    }

    /// Resolve and handle one key press
    pub fn handle_key(&mut self, key: Key, bindings: &Bindings) {
        let action = bindings.resolve(self.keymap, key);
        log::debug!("Key {} resolved to {}", key, action);

        match action {
            Action::Request(request) => self.handle_request(request),
            Action::RunRequest(_) => {
                self.status = match bindings.run_request_for(action) {
                    Some(run) => format!("Run-request: {}", run.command_line()),
                    None => format!("Unknown run-request on {}", key_name(key)),
                };
            }
            Action::Key(key) => self.status = format!("Unknown key {}", key_name(key)),
            Action::None => {}
        }
    }

    fn handle_request(&mut self, request: Request) {
        let last = self.lines.len().saturating_sub(1);
        self.status.clear();

        match request {
            Request::ViewClose | Request::Quit => self.running = false,
            Request::MoveDown | Request::Next | Request::Enter => self.move_cursor(1),
            Request::MoveUp | Request::Previous => self.move_cursor(-1),
            Request::MovePageDown => self.move_cursor(self.page()),
            Request::MovePageUp => self.move_cursor(-self.page()),
            Request::MoveFirstLine => self.cursor = 0,
            Request::MoveLastLine => self.cursor = last,
            Request::ScrollLineDown => self.scroll(1),
            Request::ScrollLineUp => self.scroll(-1),
            Request::ScrollPageDown => self.scroll(self.page()),
            Request::ScrollPageUp => self.scroll(-self.page()),
            Request::ScreenRedraw | Request::Refresh => {}
            other => self.status = format!("{} is not supported in the pager", other),
        }

        self.scroll_to_cursor();
    }

    fn page(&self) -> isize {
        isize::try_from(self.height).unwrap_or(isize::MAX)
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.lines.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn scroll(&mut self, delta: isize) {
        let max_offset = self.lines.len().saturating_sub(self.height);
        self.offset = self.offset.saturating_add_signed(delta).min(max_offset);
        // keep the cursor on screen
        self.cursor = self
            .cursor
            .clamp(self.offset, self.offset + self.height.saturating_sub(1))
            .min(self.lines.len().saturating_sub(1));
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
    }

    /// Render the pager into `area`
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        lines: &LineInfoRegistry,
        palette: &StylePalette,
    ) {
        let [title_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let style_of = |line_type: LineType| {
            lines
                .info(line_type.into())
                .map(|info| palette.style(info))
                .unwrap_or_default()
        };

        let title = format!(
            " {} - line {} of {} ",
            self.title,
            self.cursor + 1,
            self.lines.len()
        );
        frame.render_widget(
            Paragraph::new(title).style(style_of(LineType::TitleFocus)),
            title_area,
        );

        let cursor_style = style_of(LineType::Cursor);
        let body: Vec<Line> = self
            .lines
            .iter()
            .zip(&self.classes)
            .enumerate()
            .skip(self.offset)
            .take(body_area.height as usize)
            .map(|(index, (text, class))| {
                let style = if index == self.cursor {
                    cursor_style
                } else {
                    lines
                        .info(*class)
                        .map(|info| palette.style(info))
                        .unwrap_or_default()
                };
                Line::from(Span::styled(text.clone(), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(body), body_area);

        frame.render_widget(
            Paragraph::new(self.status.clone()).style(style_of(LineType::Status)),
            status_area,
        );
    }
}
