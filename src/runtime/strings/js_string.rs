use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

use bitflags::bitflags;

use crate::runtime::symbol::codec::SymbolTag;

bitflags! {
    /// Per-string markers fixed when the string is first interned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StringFlags: u8 {
        /// The payload is a tagged symbol (global, local or hidden).
        const SYMBOL = 1 << 0;
        /// The payload is an engine-internal key, never visible to scripts.
        const HIDDEN = 1 << 1;
    }
}

impl StringFlags {
    /// Flags for a freshly interned payload.
    pub(crate) fn for_payload(bytes: &[u8]) -> Self {
        match SymbolTag::of(bytes) {
            SymbolTag::Global | SymbolTag::Local => StringFlags::SYMBOL,
            SymbolTag::Hidden => StringFlags::SYMBOL | StringFlags::HIDDEN,
            SymbolTag::Plain => StringFlags::empty(),
        }
    }
}

pub(crate) struct HString {
    pub(super) bytes: Box<[u8]>,
    pub(super) flags: StringFlags,
}

/// Handle to an interned, immutable byte string.
///
/// Handles are reference counted. Equality and hashing use instance identity:
/// the string table hands out one instance per distinct payload, so two
/// handles are equal exactly when their bytes are.
#[derive(Clone)]
pub struct JsString(pub(super) Rc<HString>);

impl JsString {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.bytes.is_empty()
    }

    #[inline]
    pub fn flags(&self) -> StringFlags {
        self.0.flags
    }

    /// Whether the string was flagged as a symbol (hidden keys included).
    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.0.flags.contains(StringFlags::SYMBOL)
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.0.flags.contains(StringFlags::HIDDEN)
    }

    pub fn tag(&self) -> SymbolTag {
        SymbolTag::of(self.as_bytes())
    }

    #[inline]
    pub fn ptr_eq(&self, other: &JsString) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this instance.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl PartialEq for JsString {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for JsString {}

impl Hash for JsString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsString(\"{}\")", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
