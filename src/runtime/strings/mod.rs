//! Interned runtime strings.
//!
//! Symbols are not a separate heap kind: they are strings whose payload starts
//! with a tag byte, flagged at interning time. See [`crate::runtime::symbol`].
pub mod js_string;
pub mod string_table;

pub use js_string::{JsString, StringFlags};
pub use string_table::StringTable;
