use std::fmt;

use crate::runtime::symbol::id_generator::LocalId;

/// Leading byte of a `Symbol.for()` registry symbol.
pub const GLOBAL_TAG: u8 = 0x80;
/// Leading byte of a `Symbol()` symbol.
pub const LOCAL_TAG: u8 = 0x81;
/// Leading byte of an engine-internal key. Also separates the description
/// of a local symbol from its discriminator.
pub const HIDDEN_TAG: u8 = 0xFF;

const LOCAL_SEPARATOR: u8 = HIDDEN_TAG;
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The variant selected by the first byte of a string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTag {
    Global,
    Local,
    Hidden,
    Plain,
}

impl SymbolTag {
    /// Classifies a payload by its leading byte. Empty payloads are plain.
    #[inline]
    pub fn of(bytes: &[u8]) -> Self {
        match bytes.first() {
            Some(&GLOBAL_TAG) => SymbolTag::Global,
            Some(&LOCAL_TAG) => SymbolTag::Local,
            Some(&HIDDEN_TAG) => SymbolTag::Hidden,
            _ => SymbolTag::Plain,
        }
    }

    pub fn is_symbol(self) -> bool {
        !matches!(self, SymbolTag::Plain)
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolTag::Global => "global",
            SymbolTag::Local => "local",
            SymbolTag::Hidden => "hidden",
            SymbolTag::Plain => "string",
        }
    }
}

/// Which kind of symbol [`encode`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Registry symbol; identity is the description itself.
    Global,
    /// Unique symbol carrying the discriminator handed out for it.
    Local(LocalId),
}

/// A tagged payload split into its parts. Borrowed from the input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<'a> {
    Global {
        description: &'a [u8],
    },
    Local {
        description: &'a [u8],
        /// Lowercase hex digits following the separator.
        discriminator: &'a [u8],
    },
    Hidden {
        payload: &'a [u8],
    },
    PlainString,
}

impl<'a> Decoded<'a> {
    pub fn tag(&self) -> SymbolTag {
        match self {
            Decoded::Global { .. } => SymbolTag::Global,
            Decoded::Local { .. } => SymbolTag::Local,
            Decoded::Hidden { .. } => SymbolTag::Hidden,
            Decoded::PlainString => SymbolTag::Plain,
        }
    }

    /// Description of a user-visible symbol, `None` for hidden keys and strings.
    pub fn description(&self) -> Option<&'a [u8]> {
        match self {
            Decoded::Global { description } | Decoded::Local { description, .. } => {
                Some(description)
            }
            Decoded::Hidden { .. } | Decoded::PlainString => None,
        }
    }

    /// Parses the discriminator of a local symbol back into its id.
    pub fn local_id(&self) -> Option<LocalId> {
        match self {
            Decoded::Local { discriminator, .. } => parse_hex(discriminator).map(LocalId::from_raw),
            _ => None,
        }
    }
}

/// Builds the tagged byte layout for a symbol.
///
/// An absent description encodes exactly like an empty one. The buffer is
/// sized up front: `1 + len` for globals, plus the separator and the hex
/// digits of the discriminator for locals.
pub fn encode(description: Option<&[u8]>, category: Category) -> Vec<u8> {
    let description = description.unwrap_or_default();

    match category {
        Category::Global => {
            let mut out = Vec::with_capacity(1 + description.len());
            out.push(GLOBAL_TAG);
            out.extend_from_slice(description);
            out
        }
        Category::Local(id) => {
            let raw = id.get();
            let digits = hex_digit_count(raw);
            let size = 1 + description.len() + 1 + digits;
            let mut out = Vec::with_capacity(size);
            out.push(LOCAL_TAG);
            out.extend_from_slice(description);
            out.push(LOCAL_SEPARATOR);
            push_hex(&mut out, raw, digits);
            debug_assert_eq!(out.len(), size);
            out
        }
    }
}

/// Splits a payload into its symbol variant. Never fails: anything without a
/// recognised tag is a plain string.
pub fn decode(bytes: &[u8]) -> Decoded<'_> {
    match SymbolTag::of(bytes) {
        SymbolTag::Global => Decoded::Global {
            description: &bytes[1..],
        },
        SymbolTag::Local => {
            let body = &bytes[1..];
            // hex digits never contain the separator, so the last one wins
            match body.iter().rposition(|&b| b == LOCAL_SEPARATOR) {
                Some(split) => Decoded::Local {
                    description: &body[..split],
                    discriminator: &body[split + 1..],
                },
                None => Decoded::Local {
                    description: body,
                    discriminator: &[],
                },
            }
        }
        SymbolTag::Hidden => Decoded::Hidden {
            payload: &bytes[1..],
        },
        SymbolTag::Plain => Decoded::PlainString,
    }
}

/// Number of lowercase hex digits needed to print `value` (at least one).
pub fn hex_digit_count(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (u64::BITS - value.leading_zeros()).div_ceil(4) as usize
    }
}

fn push_hex(out: &mut Vec<u8>, value: u64, digits: usize) {
    for shift in (0..digits).rev() {
        let nibble = (value >> (shift * 4)) & 0xF;
        out.push(HEX_DIGITS[nibble as usize]);
    }
}

fn parse_hex(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() || digits.len() > 16 {
        return None;
    }
    let mut value: u64 = 0;
    for &d in digits {
        let nibble = match d {
            b'0'..=b'9' => d - b'0',
            b'a'..=b'f' => d - b'a' + 10,
            _ => return None,
        };
        value = (value << 4) | u64::from(nibble);
    }
    Some(value)
}

/// Renders raw payload bytes as space separated hex pairs.
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
