//! Keybindings for reposcope
//!
//! Provides the key name catalogue, the request vocabulary, per-view keymaps
//! layered over a generic keymap and built-in defaults, and run-requests that
//! bind external commands to keys.
//!
//! ```
//! use reposcope_keymap::{Action, Bindings, Key, Request};
//!
//! let bindings = Bindings::with_views().unwrap();
//! let main = bindings.keymaps().lookup("main").unwrap();
//!
//! assert_eq!(bindings.resolve(main, Key::char('j')), Action::Request(Request::MoveDown));
//! assert_eq!(bindings.resolve(main, Key::char('x')), Action::Key(Key::char('x')));
//! ```

mod bindings;
mod defaults;
mod error;
mod key;
mod keymap;
mod request;
mod run_request;

pub use bindings::{Bindings, VIEW_KEYMAPS};
pub use defaults::{DefaultBinding, default_keybindings};
pub use error::KeymapError;
pub use key::{KEY_TABLE, Key, key_name, key_value};
pub use keymap::{GENERIC_KEYMAP, KEY_LEGEND_CAPACITY, Keymap, KeymapId, KeymapRegistry};
pub use request::{Action, Request, RequestGroup};
pub use run_request::{RunRequest, RunRequestFlags, RunRequestId, RunRequests};
