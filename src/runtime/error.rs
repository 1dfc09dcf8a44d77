//! Runtime error codes raised by the symbol builtins.
use std::fmt;

/// ECMAScript error constructor an error surfaces as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeError,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TypeError",
        }
    }
}

/// Error code with message template and optional hint.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub kind: ErrorKind,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}

pub const NOT_A_SYMBOL: ErrorCode = ErrorCode {
    code: "E1100",
    title: "NOT A SYMBOL",
    kind: ErrorKind::TypeError,
    message: "{} requires a symbol receiver (got {}).",
    hint: None,
};

pub const SYMBOL_NOT_REGISTRABLE: ErrorCode = ErrorCode {
    code: "E1101",
    title: "SYMBOL NOT REGISTRABLE",
    kind: ErrorKind::TypeError,
    message: "Symbol.keyFor expects a symbol (got {}).",
    hint: Some("Only values created by Symbol() or Symbol.for() are accepted."),
};

pub const SYMBOL_TO_STRING: ErrorCode = ErrorCode {
    code: "E1102",
    title: "SYMBOL CONVERSION",
    kind: ErrorKind::TypeError,
    message: "Cannot convert a Symbol value to a string.",
    hint: Some("Use String(symbol) or symbol.toString() instead."),
};

pub const NOT_A_CONSTRUCTOR: ErrorCode = ErrorCode {
    code: "E1103",
    title: "NOT A CONSTRUCTOR",
    kind: ErrorKind::TypeError,
    message: "{} is not a constructor.",
    hint: None,
};

pub const NOT_OBJECT_COERCIBLE: ErrorCode = ErrorCode {
    code: "E1104",
    title: "NOT OBJECT COERCIBLE",
    kind: ErrorKind::TypeError,
    message: "Cannot convert {} to object.",
    hint: None,
};

pub const NO_PRIMITIVE_VALUE: ErrorCode = ErrorCode {
    code: "E1105",
    title: "NO PRIMITIVE VALUE",
    kind: ErrorKind::TypeError,
    message: "Cannot convert {} object to a primitive value.",
    hint: Some("A toString hook must return a primitive."),
};

/// Replaces `{}` placeholders in order.
pub fn format_message(template: &str, values: &[&str]) -> String {
    let mut result = template.to_string();
    for value in values {
        result = result.replacen("{}", value, 1);
    }
    result
}

/// An error thrown out of a builtin.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    code: &'static ErrorCode,
    message: String,
}

impl RuntimeError {
    pub fn new(code: &'static ErrorCode, values: &[&str]) -> Self {
        Self {
            code,
            message: format_message(code.message, values),
        }
    }

    pub fn code(&self) -> &'static ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.code.hint
    }
}

impl PartialEq for RuntimeError {
    fn eq(&self, other: &Self) -> bool {
        self.code.code == other.code.code && self.message == other.message
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            self.code.kind.name(),
            self.code.code,
            self.message
        )?;
        if let Some(hint) = self.code.hint {
            write!(f, "\n\nHint:\n  {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for RuntimeError {}
