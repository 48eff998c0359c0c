//! Applying a configuration to keybindings and line colors
//!
//! The built-in run-requests go in first so that key bindings and
//! run-requests from the file override them. Hidden keymaps and colors
//! follow. A bad entry is logged and skipped; the rest of the configuration
//! still applies.

use reposcope_keymap::{Action, Bindings, KeymapError, RunRequestFlags, key_value};
use reposcope_lineinfo::{Attr, Color, LineInfoError, LineInfoRegistry};

use crate::app_config::{AppConfig, BindEntry, ColorEntry, RunEntry};
use crate::error::ConfigError;

/// Apply `config`, returning the entries that could not be applied
pub fn apply(
    config: &AppConfig,
    bindings: &mut Bindings,
    lines: &mut LineInfoRegistry,
) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let mut report = |result: Result<(), ConfigError>| {
        if let Err(err) = result {
            log::warn!("{}", err);
            errors.push(err);
        }
    };

    if config.builtin_run_requests {
        report(
            bindings
                .register_builtins()
                .map_err(|source| ConfigError::Keymap {
                    entry: "builtin run-requests".to_string(),
                    source,
                }),
        );
    }

    for (index, entry) in config.bind.iter().enumerate() {
        report(apply_bind(bindings, entry).map_err(|source| ConfigError::Keymap {
            entry: format!("bind #{}", index + 1),
            source,
        }));
    }

    for (index, entry) in config.run.iter().enumerate() {
        report(apply_run(bindings, entry, index + 1));
    }

    for (index, name) in config.hidden_keymaps.iter().enumerate() {
        report(hide_keymap(bindings, name).map_err(|source| ConfigError::Keymap {
            entry: format!("hidden keymap #{}", index + 1),
            source,
        }));
    }

    for (index, entry) in config.color.iter().enumerate() {
        report(apply_color(lines, entry, index + 1));
    }

    log::info!(
        "Applied config: {} bindings, {} run-requests, {} colors, {} errors",
        config.bind.len(),
        config.run.len(),
        config.color.len(),
        errors.len()
    );
    errors
}

fn apply_bind(bindings: &mut Bindings, entry: &BindEntry) -> Result<(), KeymapError> {
    let keymap = bindings.keymaps().require(&entry.keymap)?;
    let key = key_value(&entry.key)?;
    let action = Action::from_name(&entry.action)?;

    bindings.keymaps_mut().bind(keymap, key, action)
}

fn hide_keymap(bindings: &mut Bindings, name: &str) -> Result<(), KeymapError> {
    let id = bindings.keymaps().require(name)?;
    if let Some(keymap) = bindings.keymaps_mut().get_mut(id) {
        keymap.hidden = true;
    }
    Ok(())
}

fn apply_run(bindings: &mut Bindings, entry: &RunEntry, index: usize) -> Result<(), ConfigError> {
    let name = || format!("run #{}", index);

    if entry.command.is_empty() {
        return Err(ConfigError::EmptyCommand { entry: name() });
    }

    let keymap_error = |source: KeymapError| ConfigError::Keymap {
        entry: name(),
        source,
    };
    let keymap = bindings.keymaps().require(&entry.keymap).map_err(keymap_error)?;
    let key = key_value(&entry.key).map_err(keymap_error)?;

    let added = bindings
        .add_run_request(keymap, key, entry.command.as_slice(), run_flags(entry))
        .map_err(keymap_error)?;
    if added.is_none() {
        log::info!("{}: key '{}' is already bound, not overriding", name(), entry.key);
    }
    Ok(())
}

fn run_flags(entry: &RunEntry) -> RunRequestFlags {
    let mut flags = RunRequestFlags::DEFAULT;
    flags.set(RunRequestFlags::FORCE, entry.force);
    flags.set(RunRequestFlags::SILENT, entry.silent);
    flags.set(RunRequestFlags::CONFIRM, entry.confirm);
    flags.set(RunRequestFlags::EXIT, entry.exit);
    flags.set(RunRequestFlags::INTERNAL, entry.internal);
    flags
}

fn apply_color(
    lines: &mut LineInfoRegistry,
    entry: &ColorEntry,
    index: usize,
) -> Result<(), ConfigError> {
    let name = || format!("color #{}", index);
    let line_error = |source: LineInfoError| ConfigError::LineInfo {
        entry: name(),
        source,
    };

    let fg = Color::from_name(&entry.fg).map_err(line_error)?;
    let bg = Color::from_name(&entry.bg).map_err(line_error)?;
    let attr = Attr::from_attr_names(entry.attributes.as_slice()).map_err(line_error)?;

    let id = match (&entry.name, &entry.line) {
        (Some(line_name), _) => lines.lookup(line_name).map_err(line_error)?,
        (None, Some(prefix)) => lines.add_custom_line(prefix).map_err(line_error)?,
        (None, None) => return Err(ConfigError::MissingColorTarget { entry: name() }),
    };

    let info = lines.info_mut(id).ok_or_else(|| {
        line_error(LineInfoError::UnknownLineName {
            name: format!("{:?}", id),
        })
    })?;
    info.set_colors(fg, bg, attr);
    Ok(())
}
