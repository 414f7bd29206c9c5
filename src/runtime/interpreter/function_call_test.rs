use crate::runtime::{
    config::RuntimeConfig,
    error::RuntimeError,
    gc::GcHandle,
    interpreter::{Interpreter, SharedOutput},
    value::Value,
};
use crate::syntax::parser::parse;

use super::test_support::{eval, eval_err, eval_in, output_of};

#[test]
fn calls_return_completion_value() {
    assert_eq!(eval("function add(a, b) { a + b } add(2, 3);"), "5");
    assert_eq!(eval("var f = function() {}; f();"), "undefined");
}

#[test]
fn missing_arguments_are_undefined_and_extras_dropped() {
    assert_eq!(eval("function f(a, b) { typeof(b); } f(1);"), "undefined");
    assert_eq!(eval("function f(a) { a; } f(1, 2, 3);"), "1");
}

#[test]
fn recursion_through_named_function() {
    assert_eq!(
        eval("function fact(n) { if (n <= 1) 1; else n * fact(n - 1); } fact(5);"),
        "120"
    );
}

#[test]
fn closures_see_their_defining_scope() {
    let source = "
        var make = function() {
            var n = 10;
            function get() { n; }
            n = 11;
            get();
        };
        make();
    ";
    assert_eq!(eval(source), "11");
}

#[test]
fn member_calls_bind_this() {
    assert_eq!(
        eval("var o = {name: 'box', get: function() { this.name; }}; o.get();"),
        "box"
    );
    assert_eq!(eval("typeof(this);"), "undefined");
    assert_eq!(
        eval("var o = {f: function() { typeof(this); }}; var g = o.f; g();"),
        "undefined"
    );
}

#[test]
fn calling_a_non_function_fails() {
    let err = eval_err("var x = 1; x();");
    assert!(matches!(err, RuntimeError::NotCallable { kind: "number", .. }));
    assert_eq!(err.code(), "E1001");
}

#[test]
fn call_depth_is_bounded() {
    let program = parse("function f() { f(); } f();").unwrap();
    let mut interpreter = Interpreter::new(RuntimeConfig::default().with_max_call_depth(32));
    let err = interpreter.run(&program).unwrap_err();
    assert!(matches!(err, RuntimeError::CallDepthExceeded { limit: 32, .. }));
    assert_eq!(interpreter.scopes().depth(), 1);
}

#[test]
fn function_outliving_its_block_cannot_be_called() {
    let err = eval_err("var f; { var x = 1; f = function() { x; }; } f();");
    assert!(matches!(err, RuntimeError::ScopeExited { .. }));
    assert_eq!(err.code(), "E1002");
}

#[test]
fn builtin_natives() {
    assert_eq!(
        output_of(
            "print('a', 1, [1, 2], {k: true}); print();",
            RuntimeConfig::default()
        ),
        "a 1 [ 1, 2 ] { k: true }\n\n"
    );
    assert_eq!(eval("typeof(print);"), "function");
    assert_eq!(eval("String(1.5) + '!';"), "1.5!");
    assert_eq!(eval("Number('42') + 1;"), "43");
    assert_eq!(eval("Number('x');"), "NaN");
    assert_eq!(eval("print;"), "function print() { [native code] }");
    assert_eq!(eval("function named() {} named;"), "function named() { [code] }");
}

fn native_double(interpreter: &mut Interpreter, args: &[GcHandle]) -> Result<GcHandle, String> {
    let Some(&arg) = args.first() else {
        return Err("expected one argument".to_string());
    };
    let value = interpreter
        .get(arg)
        .to_number()
        .map_err(|e| e.to_string())?;
    Ok(interpreter.alloc(Value::Numeric(value * 2.0)))
}

#[test]
fn embedder_natives() {
    let mut interpreter = Interpreter::default().with_output(SharedOutput::new());
    interpreter.define_native("double", native_double);
    assert_eq!(eval_in(&mut interpreter, "double(21);"), "42");

    let program = parse("double();").unwrap();
    let err = interpreter.run(&program).unwrap_err();
    assert_eq!(err.code(), "E1004");
    assert!(err.to_string().contains("double: expected one argument"));
}

#[test]
fn call_from_embedder() {
    let mut interpreter = Interpreter::default();
    eval_in(&mut interpreter, "function greet(who) { 'hi ' + who; }");
    let greet = interpreter
        .scopes()
        .lookup(interpreter.global_scope(), "greet")
        .unwrap();
    let arg = interpreter.alloc(Value::string("there"));
    let result = interpreter.call(greet, None, &[arg]).unwrap();
    assert_eq!(interpreter.stringify(result).unwrap(), "hi there");
}
