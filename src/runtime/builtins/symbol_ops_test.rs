use crate::runtime::{
    Realm,
    builtin_function::CallKind,
    error::{ErrorKind, NOT_A_CONSTRUCTOR},
    value::Value,
};

use super::{call_builtin, get_builtin};
use super::symbol_ops::{
    builtin_symbol, builtin_symbol_for, builtin_symbol_key_for, builtin_symbol_to_primitive,
    builtin_symbol_to_string, builtin_symbol_value_of,
};

#[test]
fn symbol_without_arguments_is_anonymous() {
    let mut realm = Realm::new();
    let sym = builtin_symbol(&mut realm, &Value::Undefined, &[]).unwrap();
    let text = builtin_symbol_to_string(&mut realm, &sym, &[]).unwrap();
    assert_eq!(text, realm.string("Symbol()"));
    assert_eq!(sym.type_of(), "symbol");
}

#[test]
fn symbol_for_without_arguments_registers_undefined() {
    let mut realm = Realm::new();
    let missing = builtin_symbol_for(&mut realm, &Value::Undefined, &[]).unwrap();
    let explicit = builtin_symbol_for(&mut realm, &Value::Undefined, &[Value::Undefined]).unwrap();
    assert_eq!(missing, explicit);

    let key = builtin_symbol_key_for(&mut realm, &Value::Undefined, &[missing]).unwrap();
    assert_eq!(key, realm.string("undefined"));
}

#[test]
fn key_for_without_arguments_is_a_type_error() {
    let mut realm = Realm::new();
    let err = builtin_symbol_key_for(&mut realm, &Value::Undefined, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeError);
}

#[test]
fn prototype_methods_use_the_receiver() {
    let mut realm = Realm::new();
    let desc = realm.string("r");
    let sym = builtin_symbol(&mut realm, &Value::Undefined, &[desc]).unwrap();

    assert_eq!(builtin_symbol_value_of(&mut realm, &sym, &[]).unwrap(), sym);
    assert_eq!(builtin_symbol_to_primitive(&mut realm, &sym, &[]).unwrap(), sym);
    assert!(builtin_symbol_value_of(&mut realm, &Value::Undefined, &[sym.clone()]).is_err());
}

#[test]
fn new_symbol_is_rejected() {
    let mut realm = Realm::new();
    let symbol = get_builtin("Symbol").unwrap();
    let err = realm.construct(symbol, &[]).unwrap_err();
    assert_eq!(err.code().code, NOT_A_CONSTRUCTOR.code);
    assert_eq!(err.message(), "Symbol is not a constructor.");

    let desc = realm.string("123");
    let err = call_builtin(&mut realm, symbol, CallKind::Construct, &Value::Undefined, &[desc]);
    assert!(err.is_err());
}

#[test]
fn builtin_table_lookups_agree() {
    let by_name = get_builtin("Symbol.keyFor").unwrap();
    assert_eq!(by_name.name, "Symbol.keyFor");
    assert!(by_name.construct.is_none());
    assert!(get_builtin("Symbol.iterator").is_none());
}
