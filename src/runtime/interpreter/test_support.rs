use crate::runtime::{
    config::RuntimeConfig,
    error::RuntimeError,
    interpreter::{Interpreter, SharedOutput},
};
use crate::syntax::parser::parse;

/// Runs `source` and returns the completion value's string form.
pub(super) fn eval(source: &str) -> String {
    let mut interpreter = Interpreter::default().with_output(SharedOutput::new());
    eval_in(&mut interpreter, source)
}

pub(super) fn eval_in(interpreter: &mut Interpreter, source: &str) -> String {
    let program = parse(source).unwrap_or_else(|err| panic!("parse failed: {}", err));
    let result = interpreter
        .run(&program)
        .unwrap_or_else(|err| panic!("run failed: {}", err));
    interpreter
        .stringify(result)
        .unwrap_or_else(|_| panic!("result of {:?} has no string form", source))
}

pub(super) fn eval_err(source: &str) -> RuntimeError {
    let program = parse(source).unwrap_or_else(|err| panic!("parse failed: {}", err));
    let mut interpreter = Interpreter::default().with_output(SharedOutput::new());
    match interpreter.run(&program) {
        Ok(_) => panic!("expected {:?} to fail", source),
        Err(err) => err,
    }
}

/// Runs `source` and returns what it printed.
pub(super) fn output_of(source: &str, config: RuntimeConfig) -> String {
    let output = SharedOutput::new();
    let mut interpreter = Interpreter::new(config).with_output(output.clone());
    let program = parse(source).unwrap_or_else(|err| panic!("parse failed: {}", err));
    interpreter
        .run(&program)
        .unwrap_or_else(|err| panic!("run failed: {}", err));
    output.contents()
}
