//! ECMAScript symbols encoded as tagged interned strings.
//!
//! | first byte | variant | payload |
//! |---|---|---|
//! | `0x80` | global | description |
//! | `0x81` | local | description, `0xFF`, lowercase hex id |
//! | `0xFF` | hidden | engine-defined |
//! | other | plain string | |
pub mod classify;
pub mod codec;
pub mod describe;
pub mod id_generator;
pub mod ops;
pub mod registry;
pub mod report;

pub use classify::as_plain_symbol;
pub use codec::{Category, Decoded, SymbolTag, decode, encode};
pub use describe::{Descriptive, descriptive_bytes};
pub use id_generator::{LocalId, SymbolIdGenerator};
pub use ops::{construct, key_for, to_primitive, to_string_or_value_of};
pub use report::SymbolReport;

#[cfg(test)]
mod classify_test;
#[cfg(test)]
mod describe_test;
