use crate::runtime::{interpreter::Interpreter, value::Value};

use super::conversion_ops::{native_number, native_string};

#[test]
fn number_parses_numeric_strings() {
    let mut interpreter = Interpreter::default();
    let arg = interpreter.alloc(Value::string(" 2.5 "));
    let result = native_number(&mut interpreter, &[arg]).unwrap();
    assert_eq!(interpreter.get(result).as_number(), Some(2.5));
}

#[test]
fn number_of_undefined_is_nan() {
    let mut interpreter = Interpreter::default();
    let result = native_number(&mut interpreter, &[]).unwrap();
    assert!(matches!(interpreter.get(result), Value::NaN));
}

#[test]
fn string_renders_numbers() {
    let mut interpreter = Interpreter::default();
    let arg = interpreter.alloc(Value::Numeric(1e21));
    let result = native_string(&mut interpreter, &[arg]).unwrap();
    assert_eq!(interpreter.get(result).as_str(), Some("1e+21"));
}
