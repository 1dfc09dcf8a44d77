//! Symbol entry points called by builtin dispatch.
use tracing::debug;

use crate::runtime::{
    RuntimeContext,
    coerce::to_string_bytes,
    error::{NOT_A_SYMBOL, RuntimeError, SYMBOL_NOT_REGISTRABLE},
    strings::JsString,
    value::Value,
};

use super::{
    classify::as_plain_symbol,
    codec::{Category, encode},
    describe::{Descriptive, descriptive_bytes},
    registry,
};

/// Creates a symbol: global for `Symbol.for`, local for `Symbol`.
///
/// `Symbol(undefined)` has no description, while `Symbol.for(undefined)`
/// registers the description `"undefined"`. Any other description is
/// string-coerced first; that step may run user code which may itself create
/// symbols, so the local id is taken only afterwards.
pub fn construct(
    ctx: &mut dyn RuntimeContext,
    description: &Value,
    is_global: bool,
) -> Result<JsString, RuntimeError> {
    let description = if description.is_undefined() && !is_global {
        None
    } else {
        Some(to_string_bytes(ctx, description)?)
    };

    let category = if is_global {
        Category::Global
    } else {
        Category::Local(ctx.symbol_ids().next_id())
    };

    let tagged = encode(description.as_deref(), category);
    let symbol = ctx.strings().intern(&tagged);

    match category {
        Category::Global => debug!(symbol = %Descriptive(&tagged), "global symbol"),
        Category::Local(id) => debug!(symbol = %Descriptive(&tagged), %id, "local symbol"),
    }
    Ok(symbol)
}

/// `Symbol.prototype.toString` (`wants_string_form`) and
/// `Symbol.prototype.valueOf`.
pub fn to_string_or_value_of(
    ctx: &mut dyn RuntimeContext,
    receiver: &Value,
    wants_string_form: bool,
) -> Result<Value, RuntimeError> {
    let method = if wants_string_form {
        "Symbol.prototype.toString"
    } else {
        "Symbol.prototype.valueOf"
    };
    let symbol = require_symbol(ctx, receiver, method)?;

    if !wants_string_form {
        return Ok(Value::String(symbol));
    }
    match descriptive_bytes(symbol.as_bytes()) {
        Some(text) => Ok(Value::String(ctx.strings().intern(&text))),
        None => Err(not_a_symbol(method, receiver)),
    }
}

/// `Symbol.keyFor`: the description of a global symbol, `undefined` for a
/// local one.
pub fn key_for(ctx: &mut dyn RuntimeContext, value: &Value) -> Result<Value, RuntimeError> {
    let Value::String(tagged) = value else {
        return Err(RuntimeError::new(&SYMBOL_NOT_REGISTRABLE, &[value.type_name()]));
    };

    match registry::key_for(tagged.as_bytes())? {
        Some(description) => Ok(Value::String(ctx.strings().intern(description))),
        None => Ok(Value::Undefined),
    }
}

/// `Symbol.prototype[@@toPrimitive]`: the plain symbol behind `receiver`.
pub fn to_primitive(ctx: &mut dyn RuntimeContext, receiver: &Value) -> Result<JsString, RuntimeError> {
    require_symbol(ctx, receiver, "Symbol.prototype[@@toPrimitive]")
}

fn require_symbol(
    ctx: &mut dyn RuntimeContext,
    receiver: &Value,
    method: &str,
) -> Result<JsString, RuntimeError> {
    as_plain_symbol(&*ctx, receiver).ok_or_else(|| not_a_symbol(method, receiver))
}

fn not_a_symbol(method: &str, receiver: &Value) -> RuntimeError {
    RuntimeError::new(&NOT_A_SYMBOL, &[method, receiver.type_name()])
}
