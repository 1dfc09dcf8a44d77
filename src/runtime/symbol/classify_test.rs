use super::classify::as_plain_symbol;
use super::ops::construct;
use crate::runtime::{
    Realm, RuntimeContext,
    coerce::to_object,
    object::{JsObject, ObjectClass, ObjectRef},
    value::Value,
};

#[test]
fn plain_symbols_classify_to_themselves() {
    let mut realm = Realm::new();
    let local = construct(&mut realm, &Value::Undefined, false).unwrap();
    let key = realm.string("k");
    let global = construct(&mut realm, &key, true).unwrap();

    let found = as_plain_symbol(&realm, &Value::String(local.clone())).unwrap();
    assert!(found.ptr_eq(&local));
    let found = as_plain_symbol(&realm, &Value::String(global.clone())).unwrap();
    assert!(found.ptr_eq(&global));
}

#[test]
fn wrapper_object_classifies_to_boxed_symbol() {
    let mut realm = Realm::new();
    let desc = realm.string("boxed");
    let local = construct(&mut realm, &desc, false).unwrap();
    let wrapper = to_object(&mut realm, &Value::String(local.clone())).unwrap();

    assert_eq!(wrapper.class(), ObjectClass::Symbol);
    let found = as_plain_symbol(&realm, &Value::Object(wrapper)).unwrap();
    assert!(found.ptr_eq(&local));
}

#[test]
fn wrapper_without_internal_value_fails() {
    let realm = Realm::new();
    let empty = ObjectRef::new(JsObject::new(ObjectClass::Symbol));
    assert_eq!(as_plain_symbol(&realm, &Value::Object(empty)), None);
}

#[test]
fn wrapper_of_a_plain_string_fails() {
    let mut realm = Realm::new();
    let fake = JsObject::new(ObjectClass::Symbol);
    let key = realm.internal_value_key().clone();
    fake.set_internal_slot(key, realm.string("not a symbol"));
    assert_eq!(as_plain_symbol(&realm, &Value::Object(ObjectRef::new(fake))), None);
}

#[test]
fn non_symbols_fail() {
    let mut realm = Realm::new();
    let hidden = realm.internal_value_key().clone();
    let plain_object = ObjectRef::new(JsObject::new(ObjectClass::Object));
    let string = realm.string("foo");

    assert_eq!(as_plain_symbol(&realm, &string), None);
    assert_eq!(as_plain_symbol(&realm, &Value::Number(1.0)), None);
    assert_eq!(as_plain_symbol(&realm, &Value::Undefined), None);
    assert_eq!(as_plain_symbol(&realm, &Value::Object(plain_object)), None);
    assert_eq!(as_plain_symbol(&realm, &Value::String(hidden)), None);
}

#[test]
fn boxed_string_object_is_not_a_symbol() {
    let mut realm = Realm::new();
    let string = realm.string("foo");
    let boxed = to_object(&mut realm, &string).unwrap();
    assert_eq!(boxed.class(), ObjectClass::String);
    assert_eq!(as_plain_symbol(&realm, &Value::Object(boxed)), None);
}
