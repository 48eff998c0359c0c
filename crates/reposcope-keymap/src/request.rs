//! Request identifiers
//!
//! Requests are the built-in semantic actions a key can trigger. Keymaps bind
//! keys to an [`Action`], which is either a built-in request, a run-request
//! (an external command), the "no action" sentinel, or a literal key.
//!
//! Requests are named in kebab-case (`RequestName::ViewMain` -> `"view-main"`),
//! and names are matched case-insensitively with `-`, `_` and `.` interchangeable.

use std::fmt;

use reposcope_symbols::enum_equals;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::error::KeymapError;
use crate::key::{Key, key_name};
use crate::run_request::RunRequestId;

/// Built-in requests
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Request {
    // === View switching ===
    ViewMain,
    ViewDiff,
    ViewLog,
    ViewTree,
    ViewBlob,
    ViewBlame,
    ViewBranch,
    ViewStatus,
    ViewStage,
    ViewPager,
    ViewHelp,
    ViewStash,

    // === View manipulation ===
    Enter,
    Next,
    Previous,
    Parent,
    ViewNext,
    Refresh,
    Maximize,
    ViewClose,
    Quit,
    Back,

    // === View specific ===
    StatusUpdate,
    StatusRevert,
    StatusMerge,
    StageUpdateLine,
    StageNext,
    StageSplitChunk,
    DiffContextDown,
    DiffContextUp,

    // === Cursor navigation ===
    MoveUp,
    MoveDown,
    MovePageDown,
    MovePageUp,
    MoveFirstLine,
    MoveLastLine,

    // === Scrolling ===
    ScrollFirstCol,
    ScrollLeft,
    ScrollRight,
    ScrollLineUp,
    ScrollLineDown,
    ScrollPageUp,
    ScrollPageDown,

    // === Searching ===
    Search,
    SearchBack,
    FindNext,
    FindPrev,

    // === Misc ===
    Prompt,
    Options,
    ScreenRedraw,
    StopLoading,
    ShowVersion,
    ToggleLineno,
    ToggleDate,
    ToggleAuthor,
    ToggleRevGraph,
    ToggleGraphic,
    ToggleFilename,
    ToggleRefs,
    ToggleSortOrder,
    ToggleSortField,
    ToggleIgnoreSpace,
    ToggleId,
    ToggleFiles,
    ToggleTitleOverflow,
    Edit,
}

/// Grouping used by key legends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum RequestGroup {
    #[strum(to_string = "View switching")]
    ViewSwitching,
    #[strum(to_string = "View manipulation")]
    ViewManipulation,
    #[strum(to_string = "View specific")]
    ViewSpecific,
    #[strum(to_string = "Cursor navigation")]
    CursorNavigation,
    Scrolling,
    Searching,
    Misc,
}

impl Request {
    /// Look up a request by name (`"view-main"`, `"VIEW_MAIN"`, `"View.Main"`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|request| enum_equals(request.as_ref(), name))
    }

    /// Canonical kebab-case name
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    /// Get the group this request is listed under in key legends
    pub fn group(&self) -> RequestGroup {
        use Request::*;

        match self {
            ViewMain | ViewDiff | ViewLog | ViewTree | ViewBlob | ViewBlame | ViewBranch
            | ViewStatus | ViewStage | ViewPager | ViewHelp | ViewStash => {
                RequestGroup::ViewSwitching
            }

            Enter | Next | Previous | Parent | ViewNext | Refresh | Maximize | ViewClose
            | Quit | Back => RequestGroup::ViewManipulation,

            StatusUpdate | StatusRevert | StatusMerge | StageUpdateLine | StageNext
            | StageSplitChunk | DiffContextDown | DiffContextUp => RequestGroup::ViewSpecific,

            MoveUp | MoveDown | MovePageDown | MovePageUp | MoveFirstLine | MoveLastLine => {
                RequestGroup::CursorNavigation
            }

            ScrollFirstCol | ScrollLeft | ScrollRight | ScrollLineUp | ScrollLineDown
            | ScrollPageUp | ScrollPageDown => RequestGroup::Scrolling,

            Search | SearchBack | FindNext | FindPrev => RequestGroup::Searching,

            _ => RequestGroup::Misc,
        }
    }

    /// Get the help text for this request
    pub fn description(&self) -> &'static str {
        match self {
            // View switching
            Self::ViewMain => "Show main view",
            Self::ViewDiff => "Show diff view",
            Self::ViewLog => "Show log view",
            Self::ViewTree => "Show tree view",
            Self::ViewBlob => "Show blob view",
            Self::ViewBlame => "Show blame view",
            Self::ViewBranch => "Show branch view",
            Self::ViewStatus => "Show status view",
            Self::ViewStage => "Show stage view",
            Self::ViewPager => "Show pager view",
            Self::ViewHelp => "Show help page",
            Self::ViewStash => "Show stash view",

            // View manipulation
            Self::Enter => "Enter current line and scroll",
            Self::Next => "Move to next",
            Self::Previous => "Move to previous",
            Self::Parent => "Move to parent",
            Self::ViewNext => "Move focus to next view",
            Self::Refresh => "Reload and refresh view",
            Self::Maximize => "Maximize the current view",
            Self::ViewClose => "Close the current view",
            Self::Quit => "Close all views and quit",
            Self::Back => "Go back to the previous view state",

            // View specific
            Self::StatusUpdate => "Update file status",
            Self::StatusRevert => "Revert file changes",
            Self::StatusMerge => "Merge file using external tool",
            Self::StageUpdateLine => "Update single line",
            Self::StageNext => "Find next chunk to stage",
            Self::StageSplitChunk => "Split current diff chunk",
            Self::DiffContextDown => "Decrease the diff context",
            Self::DiffContextUp => "Increase the diff context",

            // Cursor navigation
            Self::MoveUp => "Move cursor one line up",
            Self::MoveDown => "Move cursor one line down",
            Self::MovePageDown => "Move cursor one page down",
            Self::MovePageUp => "Move cursor one page up",
            Self::MoveFirstLine => "Move cursor to first line",
            Self::MoveLastLine => "Move cursor to last line",

            // Scrolling
            Self::ScrollFirstCol => "Scroll to the first line columns",
            Self::ScrollLeft => "Scroll two columns left",
            Self::ScrollRight => "Scroll two columns right",
            Self::ScrollLineUp => "Scroll one line up",
            Self::ScrollLineDown => "Scroll one line down",
            Self::ScrollPageUp => "Scroll one page up",
            Self::ScrollPageDown => "Scroll one page down",

            // Searching
            Self::Search => "Search the view",
            Self::SearchBack => "Search backwards in the view",
            Self::FindNext => "Find next search match",
            Self::FindPrev => "Find previous search match",

            // Misc
            Self::Prompt => "Bring up the prompt",
            Self::Options => "Open the options menu",
            Self::ScreenRedraw => "Redraw the screen",
            Self::StopLoading => "Stop all loading views",
            Self::ShowVersion => "Show version information",
            Self::ToggleLineno => "Toggle line numbers",
            Self::ToggleDate => "Toggle date display",
            Self::ToggleAuthor => "Toggle author display",
            Self::ToggleRevGraph => "Toggle revision graph visualization",
            Self::ToggleGraphic => "Toggle (line) graphics mode",
            Self::ToggleFilename => "Toggle file name display",
            Self::ToggleRefs => "Toggle reference display (tags/branches)",
            Self::ToggleSortOrder => "Toggle ascending/descending sort order",
            Self::ToggleSortField => "Toggle field to sort by",
            Self::ToggleIgnoreSpace => "Toggle ignoring whitespace in diffs",
            Self::ToggleId => "Toggle commit ID display",
            Self::ToggleFiles => "Toggle file filtering",
            Self::ToggleTitleOverflow => "Toggle highlighting of commit title overflow",
            Self::Edit => "Open in editor",
        }
    }
}

/// What a key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The "no action" sentinel; binding it unbinds a key
    None,
    /// A built-in request
    Request(Request),
    /// An external command registered as a run-request
    RunRequest(RunRequestId),
    /// No binding exists: the key itself, used for text and number entry
    Key(Key),
}

impl Action {
    /// Look up an action by name: `"none"` or any request name
    pub fn from_name(name: &str) -> Result<Self, KeymapError> {
        if enum_equals("none", name) {
            return Ok(Self::None);
        }

        Request::from_name(name)
            .map(Self::Request)
            .ok_or_else(|| KeymapError::UnknownRequest {
                name: name.to_string(),
            })
    }

    pub fn request(self) -> Option<Request> {
        match self {
            Self::Request(request) => Some(request),
            _ => None,
        }
    }
}

impl From<Request> for Action {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

impl From<RunRequestId> for Action {
    fn from(id: RunRequestId) -> Self {
        Self::RunRequest(id)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Request(request) => write!(f, "{}", request),
            Self::RunRequest(id) => write!(f, "run-request-{}", id.position()),
            Self::Key(key) => f.write_str(&key_name(*key)),
        }
    }
}
