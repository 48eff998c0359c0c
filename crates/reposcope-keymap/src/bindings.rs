//! Keymaps and run-requests bundled into one context
//!
//! Run-requests are stored separately from keymaps, but registering one also
//! binds its key, so both tables are mutated together here.

use crate::error::KeymapError;
use crate::key::Key;
use crate::keymap::{KeymapId, KeymapRegistry};
use crate::request::Action;
use crate::run_request::{RunRequest, RunRequestFlags, RunRequestId, RunRequests};

/// Keymaps registered for the standard views, in registration order
pub const VIEW_KEYMAPS: &[&str] = &[
    "main", "diff", "log", "tree", "blob", "blame", "branch", "pager", "help", "status", "stage",
    "stash",
];

/// Keymap registry and run-request list
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    keymaps: KeymapRegistry,
    run_requests: RunRequests,
}

impl Bindings {
    /// Only the generic keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// The generic keymap plus one keymap per standard view
    pub fn with_views() -> Result<Self, KeymapError> {
        let mut bindings = Self::new();
        for name in VIEW_KEYMAPS {
            bindings.keymaps.register(*name)?;
        }
        Ok(bindings)
    }

    pub fn keymaps(&self) -> &KeymapRegistry {
        &self.keymaps
    }

    pub fn keymaps_mut(&mut self) -> &mut KeymapRegistry {
        &mut self.keymaps
    }

    pub fn run_requests(&self) -> &RunRequests {
        &self.run_requests
    }

    /// Resolve a key in a keymap, see [`KeymapRegistry::resolve`]
    pub fn resolve(&self, keymap: KeymapId, key: Key) -> Action {
        self.keymaps.resolve(keymap, key)
    }

    /// Register an external command and bind it to `key` in `keymap`.
    ///
    /// Without [`RunRequestFlags::FORCE`] a key that already resolves to an
    /// action is left alone and `Ok(None)` is returned.
    pub fn add_run_request<S: AsRef<str>>(
        &mut self,
        keymap: KeymapId,
        key: Key,
        argv: &[S],
        flags: RunRequestFlags,
    ) -> Result<Option<RunRequestId>, KeymapError> {
        if !flags.contains(RunRequestFlags::FORCE)
            && self.keymaps.resolve(keymap, key) != Action::Key(key)
        {
            log::debug!("Key {} is already bound, skipping run-request", key);
            return Ok(None);
        }

        let mut args = Vec::new();
        args.try_reserve_exact(argv.len())
            .map_err(|_| KeymapError::OutOfMemory)?;
        args.extend(argv.iter().map(|arg| arg.as_ref().to_string()));

        self.run_requests
            .try_reserve()
            .map_err(|_| KeymapError::OutOfMemory)?;
        let Some(id) = self
            .run_requests
            .push(RunRequest::new(keymap, key, args, flags))
        else {
            return Err(KeymapError::OutOfMemory);
        };

        if let Err(err) = self.keymaps.bind(keymap, key, Action::RunRequest(id)) {
            self.run_requests.pop();
            return Err(err);
        }

        log::debug!("Added run-request {} on key {}", id.position(), key);
        Ok(Some(id))
    }

    /// The run-request behind an action
    pub fn run_request_for(&self, action: Action) -> Option<&RunRequest> {
        self.run_requests.get(action)
    }

    /// Register the built-in git commands.
    ///
    /// Keymaps that are not registered are skipped.
    pub fn register_builtins(&mut self) -> Result<(), KeymapError> {
        let builtins: [(&str, Key, &[&str], RunRequestFlags); 5] = [
            (
                "main",
                Key::char('C'),
                &["git", "cherry-pick", "%(commit)"],
                RunRequestFlags::CONFIRM,
            ),
            (
                "status",
                Key::char('C'),
                &["git", "commit"],
                RunRequestFlags::DEFAULT,
            ),
            (
                "branch",
                Key::char('C'),
                &["git", "checkout", "%(branch)"],
                RunRequestFlags::CONFIRM,
            ),
            (
                "generic",
                Key::char('G'),
                &["git", "gc"],
                RunRequestFlags::CONFIRM,
            ),
            (
                "stash",
                Key::char('P'),
                &["git", "stash", "pop", "%(stash)"],
                RunRequestFlags::CONFIRM,
            ),
        ];

        for (name, key, argv, flags) in builtins {
            let Some(keymap) = self.keymaps.lookup(name) else {
                log::warn!("No '{}' keymap for built-in run-request '{}'", name, argv.join(" "));
                continue;
            };
            self.add_run_request(keymap, key, argv, flags)?;
        }

        Ok(())
    }
}
