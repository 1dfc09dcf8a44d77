use crate::runtime::{
    Realm, RuntimeContext,
    error::NOT_OBJECT_COERCIBLE,
    coerce::to_object,
    object::ObjectClass,
    symbol::as_plain_symbol,
    value::Value,
};

use super::get_builtin;
use super::object_ops::builtin_object;

#[test]
fn object_of_symbol_boxes_it() {
    let mut realm = Realm::new();
    let sym = realm.call(get_builtin("Symbol").unwrap(), &Value::Undefined, &[]).unwrap();
    let boxed = builtin_object(&mut realm, &Value::Undefined, &[sym.clone()]).unwrap();

    let Value::Object(obj) = &boxed else {
        panic!("expected object, got {boxed}");
    };
    assert_eq!(obj.class(), ObjectClass::Symbol);
    assert_ne!(boxed, sym);
    assert_eq!(boxed.type_of(), "object");
    assert_eq!(as_plain_symbol(&realm, &boxed).map(Value::String), Some(sym));
}

#[test]
fn boxing_twice_is_idempotent() {
    let mut realm = Realm::new();
    let sym = realm.call(get_builtin("Symbol").unwrap(), &Value::Undefined, &[]).unwrap();
    let once = builtin_object(&mut realm, &Value::Undefined, &[sym]).unwrap();
    let twice = builtin_object(&mut realm, &Value::Undefined, &[once.clone()]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn undefined_creates_empty_object() {
    let mut realm = Realm::new();
    let obj = builtin_object(&mut realm, &Value::Undefined, &[]).unwrap();
    assert_eq!(obj.to_string(), "[object Object]");
}

#[test]
fn to_object_rejects_undefined_and_hidden_keys() {
    let mut realm = Realm::new();
    let err = to_object(&mut realm, &Value::Null).unwrap_err();
    assert_eq!(err.code().code, NOT_OBJECT_COERCIBLE.code);

    let hidden = Value::String(realm.internal_value_key().clone());
    assert!(to_object(&mut realm, &hidden).is_err());
}
