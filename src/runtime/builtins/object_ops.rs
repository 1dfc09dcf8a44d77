use crate::runtime::{
    RuntimeContext,
    coerce::to_object,
    error::RuntimeError,
    object::{JsObject, ObjectClass, ObjectRef},
    value::Value,
};

use super::helpers::arg;

/// `Object(value)`: boxes primitives, passes objects through, and creates an
/// empty object for `undefined` and `null`.
pub(super) fn builtin_object(
    ctx: &mut dyn RuntimeContext,
    _this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    match arg(args, 0) {
        Value::Undefined | Value::Null => {
            Ok(Value::Object(ObjectRef::new(JsObject::new(ObjectClass::Object))))
        }
        value => to_object(ctx, &value).map(Value::Object),
    }
}
