use crate::runtime::{
    interpreter::{Interpreter, SharedOutput},
    value::Value,
};

use super::io_ops::native_print;

#[test]
fn print_joins_arguments_with_spaces() {
    let output = SharedOutput::new();
    let mut interpreter = Interpreter::default().with_output(output.clone());
    let a = interpreter.alloc(Value::string("x"));
    let b = interpreter.alloc(Value::Numeric(3.0));
    let c = interpreter.alloc(Value::Boolean(true));

    let result = native_print(&mut interpreter, &[a, b, c]).unwrap();
    assert!(matches!(interpreter.get(result), Value::Undefined));
    assert_eq!(output.contents(), "x 3 true\n");
}
