use crate::runtime::{
    RuntimeContext,
    error::RuntimeError,
    symbol::{construct, key_for, to_primitive, to_string_or_value_of},
    value::Value,
};

use super::helpers::arg;

pub(super) fn builtin_symbol(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    construct(ctx, &arg(args, 0), false).map(Value::String)
}

pub(super) fn builtin_symbol_for(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    construct(ctx, &arg(args, 0), true).map(Value::String)
}

pub(super) fn builtin_symbol_key_for(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    key_for(ctx, &arg(args, 0))
}

pub(super) fn builtin_symbol_to_string(
    ctx: &mut dyn RuntimeContext,
    this: &Value,
    _args: &[Value],
) -> Result<Value, RuntimeError> {
    to_string_or_value_of(ctx, this, true)
}

pub(super) fn builtin_symbol_value_of(
    ctx: &mut dyn RuntimeContext,
    this: &Value,
    _args: &[Value],
) -> Result<Value, RuntimeError> {
    to_string_or_value_of(ctx, this, false)
}

pub(super) fn builtin_symbol_to_primitive(
    ctx: &mut dyn RuntimeContext,
    this: &Value,
    _args: &[Value],
) -> Result<Value, RuntimeError> {
    to_primitive(ctx, this).map(Value::String)
}
