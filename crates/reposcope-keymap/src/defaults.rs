//! Built-in default keybindings
//!
//! The last tier consulted when resolving a key. Entries can be disabled (but
//! never removed) by binding their key to `none` in the generic keymap.

use crate::key::Key;
use crate::request::{Action, Request};

/// One entry of the default binding table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBinding {
    pub key: Key,
    pub request: Request,
    disabled: bool,
}

impl DefaultBinding {
    const fn new(key: Key, request: Request) -> Self {
        Self {
            key,
            request,
            disabled: false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn disable(&mut self) {
        self.disabled = true;
    }

    /// The action this entry currently contributes; disabled entries count as `none`
    pub fn action(&self) -> Action {
        if self.disabled {
            Action::None
        } else {
            Action::Request(self.request)
        }
    }
}

/// Get the default keybinding table
pub fn default_keybindings() -> Vec<DefaultBinding> {
    use Request::*;

    let table = [
        // View switching
        (Key::char('m'), ViewMain),
        (Key::char('d'), ViewDiff),
        (Key::char('l'), ViewLog),
        (Key::char('t'), ViewTree),
        (Key::char('f'), ViewBlob),
        (Key::char('B'), ViewBlame),
        (Key::char('H'), ViewBranch),
        (Key::char('p'), ViewPager),
        (Key::char('h'), ViewHelp),
        (Key::char('S'), ViewStatus),
        (Key::char('c'), ViewStage),
        (Key::char('y'), ViewStash),
        // View manipulation
        (Key::char('q'), ViewClose),
        (Key::TAB, ViewNext),
        (Key::RETURN, Enter),
        (Key::UP, Previous),
        (Key::ctrl('P'), Previous),
        (Key::DOWN, Next),
        (Key::ctrl('N'), Next),
        (Key::char('R'), Refresh),
        (Key::f(5), Refresh),
        (Key::char('O'), Maximize),
        (Key::char(','), Parent),
        (Key::char('<'), Back),
        // View specific
        (Key::char('u'), StatusUpdate),
        (Key::char('!'), StatusRevert),
        (Key::char('M'), StatusMerge),
        (Key::char('1'), StageUpdateLine),
        (Key::char('@'), StageNext),
        (Key::char('\\'), StageSplitChunk),
        (Key::char('['), DiffContextDown),
        (Key::char(']'), DiffContextUp),
        // Cursor navigation
        (Key::char('k'), MoveUp),
        (Key::char('j'), MoveDown),
        (Key::HOME, MoveFirstLine),
        (Key::END, MoveLastLine),
        (Key::PAGE_DOWN, MovePageDown),
        (Key::ctrl('D'), MovePageDown),
        (Key::char(' '), MovePageDown),
        (Key::PAGE_UP, MovePageUp),
        (Key::ctrl('U'), MovePageUp),
        (Key::char('b'), MovePageUp),
        (Key::char('-'), MovePageUp),
        // Scrolling
        (Key::char('|'), ScrollFirstCol),
        (Key::LEFT, ScrollLeft),
        (Key::RIGHT, ScrollRight),
        (Key::INSERT, ScrollLineUp),
        (Key::ctrl('Y'), ScrollLineUp),
        (Key::DELETE, ScrollLineDown),
        (Key::ctrl('E'), ScrollLineDown),
        (Key::char('w'), ScrollPageUp),
        (Key::char('s'), ScrollPageDown),
        // Searching
        (Key::char('/'), Search),
        (Key::char('?'), SearchBack),
        (Key::char('n'), FindNext),
        (Key::char('N'), FindPrev),
        // Misc
        (Key::char('Q'), Quit),
        (Key::char('z'), StopLoading),
        (Key::char('v'), ShowVersion),
        (Key::char('r'), ScreenRedraw),
        (Key::ctrl('L'), ScreenRedraw),
        (Key::char('o'), Options),
        (Key::char('.'), ToggleLineno),
        (Key::char('D'), ToggleDate),
        (Key::char('A'), ToggleAuthor),
        (Key::char('g'), ToggleRevGraph),
        (Key::char('~'), ToggleGraphic),
        (Key::char('#'), ToggleFilename),
        (Key::char('F'), ToggleRefs),
        (Key::char('I'), ToggleSortOrder),
        (Key::char('i'), ToggleSortField),
        (Key::char('W'), ToggleIgnoreSpace),
        (Key::char('X'), ToggleId),
        (Key::char('%'), ToggleFiles),
        (Key::char('$'), ToggleTitleOverflow),
        (Key::char(':'), Prompt),
        (Key::char('e'), Edit),
    ];

    table
        .into_iter()
        .map(|(key, request)| DefaultBinding::new(key, request))
        .collect()
}
