use std::fmt;

use crate::runtime::{
    object::ObjectRef,
    strings::JsString,
    symbol::{codec::SymbolTag, describe::Descriptive},
};

/// Runtime value passed to and returned from builtins.
///
/// Symbols have no variant of their own: they are [`Value::String`]s whose
/// payload is tagged and flagged by the string table. Derived equality is
/// ECMAScript strict equality: strings and objects compare by instance, so two
/// symbols are equal exactly when they are the same interned string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    /// IEEE-754 double.
    Number(f64),
    /// Interned string, possibly a tagged symbol.
    String(JsString),
    Object(ObjectRef),
}

impl Value {
    /// Result of the `typeof` operator.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(s) if s.is_symbol() => "symbol",
            Value::String(_) => "string",
            Value::Object(_) => "object",
        }
    }

    /// Label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Object(obj) => obj.class().name(),
            other => other.type_of(),
        }
    }

    /// ECMAScript ToBoolean. Every symbol is truthy, even with an empty
    /// description.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !(n.is_nan() || *n == 0.0),
            Value::String(s) => s.is_symbol() || !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// The string handle of a script-visible symbol value.
    pub fn as_symbol(&self) -> Option<&JsString> {
        match self {
            Value::String(s) if s.is_symbol() && !s.is_hidden() => Some(s),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Number(v) => write!(f, "{}", number_to_string(*v)),
            Value::String(s) => match s.tag() {
                SymbolTag::Global | SymbolTag::Local if s.is_symbol() => {
                    write!(f, "{}", Descriptive(s.as_bytes()))
                }
                SymbolTag::Hidden if s.is_hidden() => write!(f, "<hidden>"),
                _ => write!(f, "\"{}\"", s),
            },
            Value::Object(obj) => write!(f, "[object {}]", obj.class().name()),
        }
    }
}

/// ECMAScript Number::toString for the cases the runtime produces.
///
/// Exponent notation for very large or very small magnitudes is not
/// reproduced; those fall back to Rust's shortest round-trip rendering.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
