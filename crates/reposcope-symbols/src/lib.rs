//! Shared building blocks for the reposcope engines
//!
//! This crate provides:
//! - `SymbolTable`: a small, order-preserving key/value table with
//!   "update in place, else append" insertion
//! - enum-style name matching, where case is ignored and `-`, `_` and `.`
//!   are interchangeable (`Signed-off-by` == `SIGNED_OFF_BY`)

pub mod enum_name;
pub mod table;

pub use enum_name::{enum_equals, enum_name, enum_starts_with};
pub use table::{SymbolError, SymbolTable};
