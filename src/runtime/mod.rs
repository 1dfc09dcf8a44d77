//! Runtime core: values, interned strings, symbols and the builtins that
//! expose them.
//!
//! # Symbols as strings
//! A symbol is an interned string whose first byte is a tag (see
//! [`symbol::codec`]). The string table flags tagged payloads when it first
//! sees them, and interning makes symbol identity the same thing as string
//! instance identity:
//! - `Symbol.for(d)` interns `0x80 d`, so equal descriptions share one instance.
//! - `Symbol(d)` interns `0x81 d 0xFF <hex id>` with a fresh id from the
//!   realm's generator, so no two calls ever share an instance.
//! - `0xFF`-tagged strings are engine-internal keys and are rejected by every
//!   script-facing operation.
use crate::runtime::{
    error::RuntimeError,
    strings::{JsString, StringTable},
    symbol::id_generator::SymbolIdGenerator,
    value::Value,
};

pub mod builtin_function;
pub mod builtins;
pub mod coerce;
pub mod error;
pub mod object;
pub mod realm;
pub mod strings;
pub mod symbol;
pub mod value;

pub use realm::Realm;

/// State the builtins run against.
pub trait RuntimeContext {
    fn strings(&mut self) -> &mut StringTable;

    fn symbol_ids(&mut self) -> &mut SymbolIdGenerator;

    /// Hidden key of the internal slot holding a wrapper object's primitive.
    fn internal_value_key(&self) -> &JsString;
}

pub type BuiltinFn =
    fn(ctx: &mut dyn RuntimeContext, this: &Value, args: &[Value]) -> Result<Value, RuntimeError>;
