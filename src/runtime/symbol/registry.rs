use crate::runtime::error::{RuntimeError, SYMBOL_NOT_REGISTRABLE};

use super::codec::{Decoded, decode};

/// Registry key of a tagged string, the `Symbol.keyFor` half of `Symbol.for`.
///
/// Global symbols yield their description and local symbols yield `None`.
/// Hidden keys, plain strings and the empty string are type errors; only the
/// leading byte is inspected.
pub fn key_for(tagged: &[u8]) -> Result<Option<&[u8]>, RuntimeError> {
    match decode(tagged) {
        Decoded::Global { description } => Ok(Some(description)),
        Decoded::Local { .. } => Ok(None),
        Decoded::Hidden { .. } => Err(RuntimeError::new(&SYMBOL_NOT_REGISTRABLE, &["a hidden key"])),
        Decoded::PlainString => Err(RuntimeError::new(&SYMBOL_NOT_REGISTRABLE, &["string"])),
    }
}
