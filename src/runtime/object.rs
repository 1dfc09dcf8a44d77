use std::{cell::RefCell, collections::HashMap, fmt, ops::Deref, rc::Rc};

use crate::runtime::{RuntimeContext, error::RuntimeError, strings::JsString, value::Value};

/// Native code run when an object is coerced to a string.
///
/// Stands in for a user-defined `toString`; it may re-enter the runtime,
/// including constructing new symbols.
pub type ToStringHook = Rc<dyn Fn(&mut dyn RuntimeContext) -> Result<Value, RuntimeError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Object,
    Boolean,
    Number,
    String,
    Symbol,
    ArrayBuffer,
}

impl ObjectClass {
    pub fn name(self) -> &'static str {
        match self {
            ObjectClass::Object => "Object",
            ObjectClass::Boolean => "Boolean",
            ObjectClass::Number => "Number",
            ObjectClass::String => "String",
            ObjectClass::Symbol => "Symbol",
            ObjectClass::ArrayBuffer => "ArrayBuffer",
        }
    }

    /// Classes whose instances box a primitive in the internal value slot.
    pub fn wraps_primitive(self) -> bool {
        !matches!(self, ObjectClass::Object | ObjectClass::ArrayBuffer)
    }
}

/// Heap object with a class and internal slots.
///
/// Internal slots are keyed by hidden symbol strings, so they can never be
/// reached through script-visible property keys.
pub struct JsObject {
    class: ObjectClass,
    internal_slots: RefCell<HashMap<JsString, Value>>,
    to_string_hook: Option<ToStringHook>,
}

impl JsObject {
    pub fn new(class: ObjectClass) -> Self {
        Self {
            class,
            internal_slots: RefCell::new(HashMap::new()),
            to_string_hook: None,
        }
    }

    pub fn with_to_string(mut self, hook: ToStringHook) -> Self {
        self.to_string_hook = Some(hook);
        self
    }

    pub fn class(&self) -> ObjectClass {
        self.class
    }

    pub fn get_internal_slot(&self, key: &JsString) -> Option<Value> {
        self.internal_slots.borrow().get(key).cloned()
    }

    pub fn set_internal_slot(&self, key: JsString, value: Value) {
        debug_assert!(key.is_hidden(), "internal slot keys must be hidden strings");
        self.internal_slots.borrow_mut().insert(key, value);
    }

    pub fn to_string_hook(&self) -> Option<ToStringHook> {
        self.to_string_hook.clone()
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsObject")
            .field("class", &self.class)
            .field("internal_slots", &self.internal_slots.borrow().len())
            .field("to_string_hook", &self.to_string_hook.is_some())
            .finish()
    }
}

/// Shared reference to a [`JsObject`]. Compares by identity.
#[derive(Debug, Clone)]
pub struct ObjectRef(Rc<JsObject>);

impl ObjectRef {
    pub fn new(object: JsObject) -> Self {
        Self(Rc::new(object))
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ObjectRef {
    type Target = JsObject;

    fn deref(&self) -> &JsObject {
        &self.0
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
