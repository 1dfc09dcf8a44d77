use std::fmt;

/// Discriminator handed out to a single local symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalId(u64);

impl LocalId {
    #[inline]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Per-realm source of local symbol discriminators.
///
/// Starts at zero and pre-increments, so the first id handed out is `1`.
/// Ids are never reused and the counter never resets. The 64-bit space is
/// not reachable in practice and exhaustion is not handled.
#[derive(Debug, Default, Clone)]
pub struct SymbolIdGenerator {
    last: u64,
}

impl SymbolIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value.
    pub fn next_id(&mut self) -> LocalId {
        debug_assert!(self.last < u64::MAX, "local symbol id space exhausted");
        self.last += 1;
        LocalId(self.last)
    }

    /// The most recently issued id, `None` before the first construction.
    pub fn last_issued(&self) -> Option<LocalId> {
        (self.last != 0).then_some(LocalId(self.last))
    }

    #[cfg(test)]
    pub(crate) fn starting_after(last: u64) -> Self {
        Self { last }
    }
}
