use crate::runtime::value::Value;

/// Argument `index`, or `undefined` when the caller passed fewer.
pub(super) fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Undefined)
}

/// Whether the caller passed argument `index` at all, which `String()`
/// distinguishes from an explicit `undefined`.
pub(super) fn has_arg(args: &[Value], index: usize) -> bool {
    index < args.len()
}
