use crate::runtime::{gc::GcHandle, interpreter::Interpreter, value::Value};

/// Argument `index`, or a fresh Undefined when the caller passed fewer.
pub(super) fn arg_or_undefined(
    interpreter: &mut Interpreter,
    args: &[GcHandle],
    index: usize,
) -> GcHandle {
    match args.get(index) {
        Some(&handle) => handle,
        None => interpreter.alloc(Value::Undefined),
    }
}
