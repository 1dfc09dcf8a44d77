use crate::runtime::{
    RuntimeContext,
    builtin_function::{BuiltinFunction, CallKind},
    builtins::call_builtin,
    error::RuntimeError,
    strings::{JsString, StringTable},
    symbol::id_generator::SymbolIdGenerator,
    value::Value,
};

const INTERNAL_VALUE_KEY: &[u8] = b"\xffValue";

/// One independent runtime instance.
///
/// Owns its string table and its local symbol counter, so symbols from
/// different realms never share discriminators or instances.
pub struct Realm {
    strings: StringTable,
    symbol_ids: SymbolIdGenerator,
    internal_value_key: JsString,
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl Realm {
    pub fn new() -> Self {
        let mut strings = StringTable::new();
        let internal_value_key = strings.intern(INTERNAL_VALUE_KEY);
        Self {
            strings,
            symbol_ids: SymbolIdGenerator::new(),
            internal_value_key,
        }
    }

    /// Interns `s` as a plain string value.
    pub fn string(&mut self, s: &str) -> Value {
        Value::String(self.strings.intern_str(s))
    }

    /// Calls a builtin as a plain function.
    pub fn call(
        &mut self,
        builtin: &BuiltinFunction,
        this: &Value,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        call_builtin(self, builtin, CallKind::Call, this, args)
    }

    /// Calls a builtin with `new`.
    pub fn construct(
        &mut self,
        builtin: &BuiltinFunction,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        call_builtin(self, builtin, CallKind::Construct, &Value::Undefined, args)
    }
}

impl RuntimeContext for Realm {
    fn strings(&mut self) -> &mut StringTable {
        &mut self.strings
    }

    fn symbol_ids(&mut self) -> &mut SymbolIdGenerator {
        &mut self.symbol_ids
    }

    fn internal_value_key(&self) -> &JsString {
        &self.internal_value_key
    }
}
