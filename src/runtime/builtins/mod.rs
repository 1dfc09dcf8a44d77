use crate::runtime::{
    RuntimeContext,
    builtin_function::{BuiltinFunction, CallKind},
    coerce::to_object,
    error::{NOT_A_CONSTRUCTOR, RuntimeError},
    value::Value,
};

mod helpers;
mod object_ops;
mod string_ops;
mod symbol_ops;

use object_ops::builtin_object;
use string_ops::{builtin_string, builtin_string_construct};
use symbol_ops::{
    builtin_symbol, builtin_symbol_for, builtin_symbol_key_for, builtin_symbol_to_primitive,
    builtin_symbol_to_string, builtin_symbol_value_of,
};

/// All built-in functions, looked up by name.
pub static BUILTINS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "Symbol",
        func: builtin_symbol,
        construct: None,
    },
    BuiltinFunction {
        name: "Symbol.for",
        func: builtin_symbol_for,
        construct: None,
    },
    BuiltinFunction {
        name: "Symbol.keyFor",
        func: builtin_symbol_key_for,
        construct: None,
    },
    BuiltinFunction {
        name: "Symbol.prototype.toString",
        func: builtin_symbol_to_string,
        construct: None,
    },
    BuiltinFunction {
        name: "Symbol.prototype.valueOf",
        func: builtin_symbol_value_of,
        construct: None,
    },
    BuiltinFunction {
        name: "Symbol.prototype[@@toPrimitive]",
        func: builtin_symbol_to_primitive,
        construct: None,
    },
    BuiltinFunction {
        name: "String",
        func: builtin_string,
        construct: Some(builtin_string_construct),
    },
    BuiltinFunction {
        name: "Object",
        func: builtin_object,
        construct: Some(builtin_object),
    },
];

pub fn get_builtin(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Invokes `builtin`, enforcing constructor rules.
///
/// `new` runs the builtin's construct body, or is a TypeError when it has
/// none (`new Symbol()`). A construct body that produces a primitive has the
/// result boxed, so `new String(x)` yields a wrapper object.
pub fn call_builtin(
    ctx: &mut dyn RuntimeContext,
    builtin: &BuiltinFunction,
    kind: CallKind,
    this: &Value,
    args: &[Value],
) -> Result<Value, RuntimeError> {
    match kind {
        CallKind::Call => (builtin.func)(ctx, this, args),
        CallKind::Construct => {
            let Some(construct) = builtin.construct else {
                return Err(RuntimeError::new(&NOT_A_CONSTRUCTOR, &[builtin.name]));
            };
            match construct(ctx, this, args)? {
                obj @ Value::Object(_) => Ok(obj),
                primitive => Ok(Value::Object(to_object(ctx, &primitive)?)),
            }
        }
    }
}

#[cfg(test)]
mod helpers_test;
#[cfg(test)]
mod object_ops_test;
#[cfg(test)]
mod string_ops_test;
#[cfg(test)]
mod symbol_ops_test;
