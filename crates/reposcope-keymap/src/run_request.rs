//! Run-requests: external commands bound to keys
//!
//! Run-requests are numbered from 1 in registration order. Their action codes
//! extend the request space: the n-th run-request has code `Request::COUNT + n`.

use std::num::NonZeroUsize;

use bitflags::bitflags;
use serde::Serialize;
use strum::EnumCount;

use crate::key::Key;
use crate::keymap::KeymapId;
use crate::request::{Action, Request};

bitflags! {
    /// Options controlling how a run-request is executed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RunRequestFlags: u8 {
        /// Bind even if the key already resolves to something
        const FORCE = 1 << 0;
        /// Run without showing output
        const SILENT = 1 << 1;
        /// Ask before running
        const CONFIRM = 1 << 2;
        /// Quit after running
        const EXIT = 1 << 3;
        /// The command is an internal prompt command
        const INTERNAL = 1 << 4;
    }
}

impl RunRequestFlags {
    pub const DEFAULT: Self = Self::empty();
}

/// Position of a run-request, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RunRequestId(NonZeroUsize);

impl RunRequestId {
    /// `None` for position 0
    pub fn new(position: usize) -> Option<Self> {
        NonZeroUsize::new(position).map(Self)
    }

    pub fn position(self) -> usize {
        self.0.get()
    }

    /// Action code, placed after every built-in request
    pub fn code(self) -> usize {
        Request::COUNT + self.position()
    }

    fn index(self) -> usize {
        self.position() - 1
    }
}

/// An external command bound to a key in a keymap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    pub keymap: KeymapId,
    pub key: Key,
    pub argv: Vec<String>,
    pub silent: bool,
    pub confirm: bool,
    pub exit: bool,
    pub internal: bool,
}

impl RunRequest {
    pub(crate) fn new(keymap: KeymapId, key: Key, argv: Vec<String>, flags: RunRequestFlags) -> Self {
        Self {
            keymap,
            key,
            argv,
            silent: flags.contains(RunRequestFlags::SILENT),
            confirm: flags.contains(RunRequestFlags::CONFIRM),
            exit: flags.contains(RunRequestFlags::EXIT),
            internal: flags.contains(RunRequestFlags::INTERNAL),
        }
    }

    /// The command as typed in a prompt, with flag markers in front
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        if self.exit {
            line.push('<');
        }
        if self.silent {
            line.push('@');
        }
        if self.confirm {
            line.push('?');
        }
        if self.internal {
            line.push(':');
        } else {
            line.push('!');
        }
        line.push_str(&self.argv.join(" "));
        line
    }
}

/// Append-only list of run-requests
#[derive(Debug, Clone, Default)]
pub struct RunRequests {
    requests: Vec<RunRequest>,
}

impl RunRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The run-request behind an action, if the action is one that exists
    pub fn get(&self, action: Action) -> Option<&RunRequest> {
        match action {
            Action::RunRequest(id) => self.get_by_id(id),
            _ => None,
        }
    }

    pub fn get_by_id(&self, id: RunRequestId) -> Option<&RunRequest> {
        self.requests.get(id.index())
    }

    /// Run-requests with their ids, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (RunRequestId, &RunRequest)> {
        self.requests
            .iter()
            .enumerate()
            .filter_map(|(index, request)| RunRequestId::new(index + 1).map(|id| (id, request)))
    }

    /// Run-requests registered in one keymap
    pub fn bound_to(&self, keymap: KeymapId) -> impl Iterator<Item = (RunRequestId, &RunRequest)> {
        self.iter().filter(move |(_, request)| request.keymap == keymap)
    }

    pub(crate) fn try_reserve(&mut self) -> Result<(), std::collections::TryReserveError> {
        self.requests.try_reserve(1)
    }

    pub(crate) fn push(&mut self, request: RunRequest) -> Option<RunRequestId> {
        self.requests.push(request);
        RunRequestId::new(self.requests.len())
    }

    pub(crate) fn pop(&mut self) -> Option<RunRequest> {
        self.requests.pop()
    }
}
