//! Keymap registry and keybinding resolution
//!
//! # Design
//!
//! - `Keymap`: a named table of key -> action bindings, one per view plus the
//!   generic keymap shared by every view
//! - `KeymapRegistry`: owns every keymap, the lookup order between them and the
//!   built-in default bindings
//!
//! A key is resolved by looking in the view's own keymap, then in the generic
//! keymap, then in the default bindings that have not been disabled. A key
//! bound nowhere resolves to itself (`Action::Key`), which views use for
//! text and number entry.

use reposcope_symbols::SymbolTable;
use serde::Serialize;

use crate::defaults::{DefaultBinding, default_keybindings};
use crate::error::KeymapError;
use crate::key::{Key, key_name};
use crate::request::Action;

/// Name of the keymap consulted by every lookup
pub const GENERIC_KEYMAP: &str = "generic";

/// Key legends longer than this are reported as [`KeymapError::TooManyKeybindings`]
pub const KEY_LEGEND_CAPACITY: usize = 8192;

/// Handle to a keymap owned by a [`KeymapRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeymapId(usize);

/// A named table of keybindings
#[derive(Debug, Clone)]
pub struct Keymap {
    name: String,
    bindings: SymbolTable<Key, Action>,
    /// Hidden keymaps are left out of key legends
    pub hidden: bool,
}

impl Keymap {
    fn new(name: String) -> Self {
        Self {
            name,
            bindings: SymbolTable::new(),
            hidden: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Action bound to `key` in this keymap only
    pub fn get(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Bindings in the order they were added
    pub fn bindings(&self) -> impl Iterator<Item = (Key, Action)> + '_ {
        self.bindings.iter().map(|(key, action)| (*key, *action))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Owner of all keymaps and the default binding table
#[derive(Debug, Clone)]
pub struct KeymapRegistry {
    keymaps: Vec<Keymap>,
    /// Lookup order, most recently registered first
    order: Vec<KeymapId>,
    defaults: Vec<DefaultBinding>,
}

impl Default for KeymapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// An unbound key, or a key explicitly bound to `none`, falls through to itself
fn explicit(action: Action, key: Key) -> Action {
    match action {
        Action::None => Action::Key(key),
        action => action,
    }
}

impl KeymapRegistry {
    /// Create a registry holding only the generic keymap
    pub fn new() -> Self {
        Self {
            keymaps: vec![Keymap::new(GENERIC_KEYMAP.to_string())],
            order: vec![KeymapId(0)],
            defaults: default_keybindings(),
        }
    }

    /// The generic keymap
    pub fn generic(&self) -> KeymapId {
        KeymapId(0)
    }

    pub fn is_generic(&self, id: KeymapId) -> bool {
        id == self.generic()
    }

    /// Add a keymap at the head of the lookup order.
    ///
    /// Names are not checked for duplicates: a later keymap shadows earlier
    /// ones with the same name in [`lookup`](Self::lookup).
    pub fn register(&mut self, name: impl Into<String>) -> Result<KeymapId, KeymapError> {
        let name = name.into();
        self.keymaps
            .try_reserve(1)
            .and_then(|_| self.order.try_reserve(1))
            .map_err(|_| KeymapError::OutOfMemory)?;

        let id = KeymapId(self.keymaps.len());
        log::debug!("Registering keymap '{}'", name);
        self.keymaps.push(Keymap::new(name));
        self.order.insert(0, id);
        Ok(id)
    }

    /// Find a keymap by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<KeymapId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.keymaps[id.0].name.eq_ignore_ascii_case(name))
    }

    /// Like [`lookup`](Self::lookup), reporting a missing keymap as an error
    pub fn require(&self, name: &str) -> Result<KeymapId, KeymapError> {
        self.lookup(name).ok_or_else(|| KeymapError::UnknownKeymap {
            name: name.to_string(),
        })
    }

    pub fn get(&self, id: KeymapId) -> Option<&Keymap> {
        self.keymaps.get(id.0)
    }

    pub fn get_mut(&mut self, id: KeymapId) -> Option<&mut Keymap> {
        self.keymaps.get_mut(id.0)
    }

    /// Keymaps in lookup order
    pub fn iter(&self) -> impl Iterator<Item = (KeymapId, &Keymap)> {
        self.order.iter().map(|id| (*id, &self.keymaps[id.0]))
    }

    /// The built-in default bindings, including disabled ones
    pub fn defaults(&self) -> &[DefaultBinding] {
        &self.defaults
    }

    /// Bind `key` to `action` in a keymap.
    ///
    /// An existing binding for `key` is overwritten, otherwise a new one is
    /// appended. Binding `Action::None` in the generic keymap also disables the
    /// default bindings for `key`.
    pub fn bind(&mut self, id: KeymapId, key: Key, action: Action) -> Result<(), KeymapError> {
        let generic = self.is_generic(id);
        let keymap = self
            .keymaps
            .get_mut(id.0)
            .ok_or_else(|| KeymapError::UnknownKeymap {
                name: format!("#{}", id.0),
            })?;

        keymap.bindings.insert(key, action)?;
        log::debug!("Bound {} to {} in keymap '{}'", key, action, keymap.name);

        if action == Action::None && generic {
            for default in self.defaults.iter_mut().filter(|d| d.key == key) {
                log::debug!("Disabled default binding {} -> {}", key, default.request);
                default.disable();
            }
        }

        Ok(())
    }

    /// Resolve `key` in keymap `id`: view keymap, then generic keymap, then
    /// enabled defaults, and finally the key itself.
    pub fn resolve(&self, id: KeymapId, key: Key) -> Action {
        if let Some(action) = self.get(id).and_then(|keymap| keymap.get(key)) {
            return explicit(action, key);
        }

        if let Some(action) = self.keymaps[0].get(key) {
            return explicit(action, key);
        }

        self.defaults
            .iter()
            .find(|d| !d.is_disabled() && d.key == key)
            .map(|d| Action::Request(d.request))
            .unwrap_or(Action::Key(key))
    }

    /// Comma separated names of the keys bound to `action`.
    ///
    /// With `all == false` only the first key found is listed, searching the
    /// keymap, then the generic keymap, then the default bindings. With
    /// `all == true` every binding in the keymap is listed; default bindings
    /// are only included when listing the generic keymap itself.
    pub fn describe_bindings(
        &self,
        id: KeymapId,
        action: Action,
        all: bool,
    ) -> Result<String, KeymapError> {
        let mut legend = KeyLegend::default();

        if let Some(keymap) = self.get(id) {
            legend.extend(keymap.bindings.keys_for(&action).copied(), all)?;
        }
        if !legend.is_empty() && !all {
            return Ok(legend.into_string());
        }

        if !self.is_generic(id) {
            // Only the generic keymap lists the default bindings when asked for all keys.
            if all {
                return Ok(legend.into_string());
            }

            legend.extend(self.keymaps[0].bindings.keys_for(&action).copied(), all)?;
            if !legend.is_empty() {
                return Ok(legend.into_string());
            }
        }

        let defaults = self
            .defaults
            .iter()
            .filter(|d| d.action() == action)
            .map(|d| d.key);
        legend.extend(defaults, all)?;

        Ok(legend.into_string())
    }
}

/// Bounded, comma separated list of key names
#[derive(Debug, Default)]
struct KeyLegend {
    buf: String,
}

impl KeyLegend {
    fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn push(&mut self, key: Key) -> Result<(), KeymapError> {
        let sep = if self.buf.is_empty() { "" } else { ", " };
        let name = key_name(key);

        if self.buf.len() + sep.len() + name.len() >= KEY_LEGEND_CAPACITY {
            return Err(KeymapError::TooManyKeybindings);
        }

        self.buf.push_str(sep);
        self.buf.push_str(&name);
        Ok(())
    }

    /// Append keys; only the first one unless `all` is set
    fn extend(&mut self, keys: impl IntoIterator<Item = Key>, all: bool) -> Result<(), KeymapError> {
        for key in keys {
            self.push(key)?;
            if !all {
                break;
            }
        }
        Ok(())
    }

    fn into_string(self) -> String {
        self.buf
    }
}
