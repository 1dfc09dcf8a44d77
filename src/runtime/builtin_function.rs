use std::fmt;

use crate::runtime::BuiltinFn;

/// Whether a builtin was invoked as `f(...)` or `new f(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Call,
    Construct,
}

#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: BuiltinFn,
    /// Body run for `new f(...)`; `None` makes `new` a TypeError.
    pub construct: Option<BuiltinFn>,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFunction({})", self.name)
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
