use std::fmt;

use super::codec::decode;

const PREFIX: &[u8] = b"Symbol(";
const SUFFIX: &[u8] = b")";

/// Renders `Symbol(<description>)` for a global or local payload.
///
/// Description bytes are copied as-is, without escaping. Hidden keys and
/// plain strings have no descriptive form.
pub fn descriptive_bytes(tagged: &[u8]) -> Option<Vec<u8>> {
    let description = decode(tagged).description()?;

    let mut out = Vec::with_capacity(PREFIX.len() + description.len() + SUFFIX.len());
    out.extend_from_slice(PREFIX);
    out.extend_from_slice(description);
    out.extend_from_slice(SUFFIX);
    Some(out)
}

/// `Display` adapter over [`descriptive_bytes`] for logs and the CLI.
///
/// Invalid UTF-8 is replaced; payloads without a descriptive form print as
/// their lossy text.
pub struct Descriptive<'a>(pub &'a [u8]);

impl fmt::Display for Descriptive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match descriptive_bytes(self.0) {
            Some(bytes) => f.write_str(&String::from_utf8_lossy(&bytes)),
            None => f.write_str(&String::from_utf8_lossy(self.0)),
        }
    }
}
