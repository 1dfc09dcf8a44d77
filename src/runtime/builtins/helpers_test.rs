use crate::runtime::value::Value;

use super::helpers::{arg, has_arg};

#[test]
fn missing_arguments_read_as_undefined() {
    let args = [Value::Number(1.0)];
    assert_eq!(arg(&args, 0), Value::Number(1.0));
    assert_eq!(arg(&args, 1), Value::Undefined);
    assert_eq!(arg(&[], 0), Value::Undefined);
}

#[test]
fn explicit_undefined_counts_as_passed() {
    let args = [Value::Undefined];
    assert!(has_arg(&args, 0));
    assert!(!has_arg(&args, 1));
}
