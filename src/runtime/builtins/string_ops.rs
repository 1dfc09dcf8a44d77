use crate::runtime::{
    RuntimeContext,
    coerce::to_string_bytes,
    error::RuntimeError,
    symbol::descriptive_bytes,
    value::Value,
};

use super::helpers::{arg, has_arg};

/// `String(value)`.
///
/// A plain symbol formats as `Symbol(description)` without going through
/// ToString. Symbol wrapper objects get no such treatment and fail in
/// ToString like any other symbol.
pub(super) fn builtin_string(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    if !has_arg(args, 0) {
        return Ok(Value::String(ctx.strings().intern(b"")));
    }

    let value = arg(args, 0);
    let bytes = match value.as_symbol().and_then(|s| descriptive_bytes(s.as_bytes())) {
        Some(text) => text,
        None => to_string_bytes(ctx, &value)?,
    };
    Ok(Value::String(ctx.strings().intern(&bytes)))
}

/// Body of `new String(value)`.
///
/// Unlike the plain call, every argument goes through ToString, so a symbol
/// throws here whether or not it is boxed.
pub(super) fn builtin_string_construct(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    let bytes = if has_arg(args, 0) {
        to_string_bytes(ctx, &arg(args, 0))?
    } else {
        Vec::new()
    };
    Ok(Value::String(ctx.strings().intern(&bytes)))
}
