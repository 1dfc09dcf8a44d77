use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash, Hasher, RandomState},
    rc::{Rc, Weak},
};

use tracing::trace;

use super::js_string::{HString, JsString, StringFlags};

/// Interning table for runtime strings.
///
/// Every distinct payload maps to exactly one live [`JsString`] instance, so
/// comparing handles is comparing contents. The table only holds weak
/// references: an entry dies with its last handle and the bucket slot is
/// reclaimed on the next lookup in that bucket or on [`StringTable::purge`].
///
/// Symbol markers ([`StringFlags`]) are computed once, when a payload is
/// first inserted.
///
/// # Example
///
/// ```
/// use tagsym::runtime::strings::StringTable;
///
/// let mut table = StringTable::new();
/// let a = table.intern_str("hello");
/// let b = table.intern(b"hello");
/// let c = table.intern_str("world");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.as_bytes(), b"hello");
/// ```
#[derive(Debug)]
pub struct StringTable {
    hasher: RandomState,
    buckets: HashMap<u64, Vec<Weak<HString>>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: HashMap::default(),
        }
    }

    /// Creates a table with room for `capacity` distinct hashes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the live instance for `bytes`, inserting it if needed.
    pub fn intern(&mut self, bytes: &[u8]) -> JsString {
        let hash = self.hash_bytes(bytes);
        let candidates = self.buckets.entry(hash).or_default();

        let mut found = None;
        candidates.retain(|weak| match weak.upgrade() {
            Some(live) => {
                if found.is_none() && *live.bytes == *bytes {
                    found = Some(live);
                }
                true
            }
            None => false,
        });
        if let Some(live) = found {
            return JsString(live);
        }

        let flags = StringFlags::for_payload(bytes);
        let entry = Rc::new(HString {
            bytes: bytes.into(),
            flags,
        });
        candidates.push(Rc::downgrade(&entry));
        trace!(len = bytes.len(), ?flags, "interned new string");
        JsString(entry)
    }

    #[inline]
    pub fn intern_str(&mut self, s: &str) -> JsString {
        self.intern(s.as_bytes())
    }

    /// Finds the live instance for `bytes` without inserting.
    pub fn lookup(&self, bytes: &[u8]) -> Option<JsString> {
        let hash = self.hash_bytes(bytes);
        self.buckets
            .get(&hash)?
            .iter()
            .filter_map(Weak::upgrade)
            .find(|live| *live.bytes == *bytes)
            .map(JsString)
    }

    /// Number of strings that still have at least one handle.
    pub fn live_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Drops table slots whose strings are gone. Returns how many were removed.
    pub fn purge(&mut self) -> usize {
        let mut removed = 0;
        self.buckets.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|weak| weak.strong_count() > 0);
            removed += before - bucket.len();
            !bucket.is_empty()
        });
        if removed > 0 {
            trace!(removed, "purged dead strings");
        }
        removed
    }

    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut h = self.hasher.build_hasher();

        bytes.hash(&mut h);
        h.finish()
    }
}
