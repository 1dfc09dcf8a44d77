use crate::runtime::{
    Realm,
    coerce::to_object,
    error::{ErrorKind, SYMBOL_TO_STRING},
    object::ObjectClass,
    value::Value,
};

use super::get_builtin;
use super::string_ops::builtin_string;

#[test]
fn plain_symbols_format_without_to_string() {
    let mut realm = Realm::new();
    let desc = realm.string("foo");
    let sym = realm.call(get_builtin("Symbol").unwrap(), &Value::Undefined, &[desc]).unwrap();

    let text = builtin_string(&mut realm, &Value::Undefined, &[sym]).unwrap();
    assert_eq!(text, realm.string("Symbol(foo)"));
}

#[test]
fn symbol_wrappers_fail_to_string() {
    let mut realm = Realm::new();
    let sym = realm.call(get_builtin("Symbol").unwrap(), &Value::Undefined, &[]).unwrap();
    let wrapper = to_object(&mut realm, &sym).unwrap();

    let err = builtin_string(&mut realm, &Value::Undefined, &[Value::Object(wrapper)]).unwrap_err();
    assert_eq!(err.code().code, SYMBOL_TO_STRING.code);
}

#[test]
fn other_values_are_string_coerced() {
    let mut realm = Realm::new();
    let cases = [
        (Value::Undefined, "undefined"),
        (Value::Null, "null"),
        (Value::Boolean(false), "false"),
        (Value::Number(123.0), "123"),
        (Value::Number(f64::INFINITY), "Infinity"),
    ];
    for (value, expected) in cases {
        let text = builtin_string(&mut realm, &Value::Undefined, &[value]).unwrap();
        assert_eq!(text, realm.string(expected));
    }

    let empty = builtin_string(&mut realm, &Value::Undefined, &[]).unwrap();
    assert_eq!(empty, realm.string(""));
}

#[test]
fn new_string_produces_a_wrapper() {
    let mut realm = Realm::new();
    let desc = realm.string("abc");
    let boxed = realm.construct(get_builtin("String").unwrap(), &[desc.clone()]).unwrap();

    let Value::Object(obj) = &boxed else {
        panic!("expected wrapper object, got {boxed}");
    };
    assert_eq!(obj.class(), ObjectClass::String);
    let text = builtin_string(&mut realm, &Value::Undefined, &[boxed.clone()]).unwrap();
    assert_eq!(text, desc);
}

#[test]
fn new_string_of_a_symbol_is_a_type_error() {
    let mut realm = Realm::new();
    let desc = realm.string("foo");
    let sym = realm.call(get_builtin("Symbol").unwrap(), &Value::Undefined, &[desc]).unwrap();

    let err = realm.construct(get_builtin("String").unwrap(), &[sym]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeError);
    assert_eq!(err.code().code, SYMBOL_TO_STRING.code);
}

#[test]
fn new_string_without_arguments_boxes_the_empty_string() {
    let mut realm = Realm::new();
    let boxed = realm.construct(get_builtin("String").unwrap(), &[]).unwrap();

    let text = builtin_string(&mut realm, &Value::Undefined, &[boxed]).unwrap();
    assert_eq!(text, realm.string(""));
}
