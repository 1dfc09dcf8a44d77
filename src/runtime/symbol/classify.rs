use crate::runtime::{
    RuntimeContext, object::ObjectClass, strings::JsString, value::Value,
};

/// Resolves `value` to the tagged string of a script-visible symbol.
///
/// Accepts a plain symbol or a `Symbol` wrapper object, which is unwrapped
/// through its internal value slot. Everything else, hidden keys included,
/// yields `None`; callers turn that into a TypeError.
pub fn as_plain_symbol(ctx: &dyn RuntimeContext, value: &Value) -> Option<JsString> {
    let unwrapped;
    let value = match value {
        Value::Object(obj) if obj.class() == ObjectClass::Symbol => {
            unwrapped = obj.get_internal_slot(ctx.internal_value_key())?;
            &unwrapped
        }
        Value::Object(_) => return None,
        other => other,
    };

    value.as_symbol().cloned()
}
