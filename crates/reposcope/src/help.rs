//! Key legend
//!
//! Pre-computes the help listing for each keymap: bound requests grouped like
//! the default binding table, followed by the keymap's run-requests.

use anyhow::Result;
use reposcope_keymap::{Action, Bindings, KeymapId, Request, RequestGroup, key_name};
use serde::Serialize;
use strum::IntoEnumIterator;

/// A single binding row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendRow {
    /// Comma separated key names (e.g. "PageDown, '^D', Space")
    pub keys: String,
    /// Request name or command line
    pub action: String,
    pub description: String,
}

/// Rows of one request group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendSection {
    pub group: String,
    pub rows: Vec<LegendRow>,
}

/// Legend of one keymap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeymapLegend {
    pub keymap: String,
    pub sections: Vec<LegendSection>,
    pub run_requests: Vec<LegendRow>,
}

impl KeymapLegend {
    pub fn build(bindings: &Bindings, id: KeymapId) -> Result<Self> {
        let keymaps = bindings.keymaps();
        let name = keymaps.get(id).map(|k| k.name().to_string()).unwrap_or_default();

        let mut sections = Vec::new();
        for group in RequestGroup::iter() {
            let mut rows = Vec::new();
            for request in Request::iter().filter(|r| r.group() == group) {
                let keys = keymaps.describe_bindings(id, Action::Request(request), true)?;
                if keys.is_empty() {
                    continue;
                }
                rows.push(LegendRow {
                    keys,
                    action: request.name().to_string(),
                    description: request.description().to_string(),
                });
            }

            if !rows.is_empty() {
                sections.push(LegendSection {
                    group: group.to_string(),
                    rows,
                });
            }
        }

        let run_requests = bindings
            .run_requests()
            .bound_to(id)
            // Skip run-requests whose key was rebound since
            .filter(|(rid, req)| keymaps.resolve(id, req.key) == Action::RunRequest(*rid))
            .map(|(_, req)| LegendRow {
                keys: key_name(req.key).into_owned(),
                action: req.command_line(),
                description: run_request_description(req.confirm, req.exit),
            })
            .collect();

        Ok(Self {
            keymap: name,
            sections,
            run_requests,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.run_requests.is_empty()
    }

    /// Plain text rendering
    pub fn to_text(&self) -> String {
        let mut out = format!("[{}]\n", self.keymap);

        for section in &self.sections {
            out.push_str(&format!("  {}\n", section.group));
            for row in &section.rows {
                out.push_str(&format!("    {:<24} {:<24} {}\n", row.keys, row.action, row.description));
            }
        }

        if !self.run_requests.is_empty() {
            out.push_str("  External commands\n");
            for row in &self.run_requests {
                out.push_str(&format!("    {:<24} {:<24} {}\n", row.keys, row.action, row.description));
            }
        }

        out
    }
}

/// Legends of every visible keymap, or only the one named
pub fn legends(bindings: &Bindings, only: Option<&str>) -> Result<Vec<KeymapLegend>> {
    let keymaps = bindings.keymaps();

    let ids: Vec<KeymapId> = match only {
        Some(name) => vec![keymaps.require(name)?],
        None => {
            // lookup order is newest first; list in registration order
            let mut ids: Vec<KeymapId> = keymaps
                .iter()
                .filter(|(_, keymap)| !keymap.hidden)
                .map(|(id, _)| id)
                .collect();
            ids.reverse();
            ids
        }
    };

    ids.into_iter()
        .map(|id| KeymapLegend::build(bindings, id))
        .collect()
}

fn run_request_description(confirm: bool, exit: bool) -> String {
    match (confirm, exit) {
        (true, true) => "Run after confirmation, then quit".to_string(),
        (true, false) => "Run after confirmation".to_string(),
        (false, true) => "Run, then quit".to_string(),
        (false, false) => "Run".to_string(),
    }
}
