//! ECMAScript abstract conversions used by the builtins.
//!
//! These may run native `toString` hooks, which can re-enter the runtime.
use crate::runtime::{
    RuntimeContext,
    error::{NO_PRIMITIVE_VALUE, NOT_OBJECT_COERCIBLE, RuntimeError, SYMBOL_TO_STRING},
    object::{JsObject, ObjectClass, ObjectRef},
    value::{Value, number_to_string},
};

/// ToPrimitive with a string hint.
///
/// Wrapper objects unwrap to their internal value. Other objects run their
/// `toString` hook, or render as `[object Class]` without one.
pub fn to_primitive(ctx: &mut dyn RuntimeContext, value: &Value) -> Result<Value, RuntimeError> {
    let Value::Object(obj) = value else {
        return Ok(value.clone());
    };

    if obj.class().wraps_primitive()
        && let Some(inner) = obj.get_internal_slot(ctx.internal_value_key())
    {
        return Ok(inner);
    }

    match obj.to_string_hook() {
        Some(hook) => match hook(ctx)? {
            Value::Object(_) => Err(RuntimeError::new(
                &NO_PRIMITIVE_VALUE,
                &[obj.class().name()],
            )),
            primitive => Ok(primitive),
        },
        None => {
            let text = format!("[object {}]", obj.class().name());
            Ok(Value::String(ctx.strings().intern_str(&text)))
        }
    }
}

/// ToString, producing raw string bytes.
///
/// Symbols, plain or boxed, cannot be converted and raise a TypeError.
pub fn to_string_bytes(ctx: &mut dyn RuntimeContext, value: &Value) -> Result<Vec<u8>, RuntimeError> {
    let primitive = to_primitive(ctx, value)?;
    match &primitive {
        Value::Undefined => Ok(b"undefined".to_vec()),
        Value::Null => Ok(b"null".to_vec()),
        Value::Boolean(b) => Ok(b.to_string().into_bytes()),
        Value::Number(n) => Ok(number_to_string(*n).into_bytes()),
        Value::String(s) if s.is_symbol() => Err(RuntimeError::new(&SYMBOL_TO_STRING, &[])),
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        // to_primitive never yields an object
        Value::Object(obj) => Err(RuntimeError::new(
            &NO_PRIMITIVE_VALUE,
            &[obj.class().name()],
        )),
    }
}

/// ToObject. Primitives are boxed into wrapper objects; objects pass through
/// unchanged, so boxing twice yields the same object.
pub fn to_object(ctx: &mut dyn RuntimeContext, value: &Value) -> Result<ObjectRef, RuntimeError> {
    let class = match value {
        Value::Undefined | Value::Null => {
            return Err(RuntimeError::new(&NOT_OBJECT_COERCIBLE, &[value.type_name()]));
        }
        Value::Object(obj) => return Ok(obj.clone()),
        Value::Boolean(_) => ObjectClass::Boolean,
        Value::Number(_) => ObjectClass::Number,
        Value::String(s) if s.is_hidden() => {
            return Err(RuntimeError::new(&NOT_OBJECT_COERCIBLE, &["a hidden key"]));
        }
        Value::String(s) if s.is_symbol() => ObjectClass::Symbol,
        Value::String(_) => ObjectClass::String,
    };

    let wrapper = JsObject::new(class);
    wrapper.set_internal_slot(ctx.internal_value_key().clone(), value.clone());
    Ok(ObjectRef::new(wrapper))
}
