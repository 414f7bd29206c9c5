use crate::runtime::{gc::GcHandle, interpreter::Interpreter, value::Value};

use super::helpers::arg_or_undefined;

/// `String(v)`: string form of `v`, NaN when it has none.
pub(super) fn native_string(
    interpreter: &mut Interpreter,
    args: &[GcHandle],
) -> Result<GcHandle, String> {
    let arg = arg_or_undefined(interpreter, args, 0);
    let value = match interpreter.stringify(arg) {
        Ok(text) => Value::string(text),
        Err(_) => Value::NaN,
    };
    Ok(interpreter.alloc(value))
}

/// `Number(v)`: numeric form of `v`, NaN when it has none.
pub(super) fn native_number(
    interpreter: &mut Interpreter,
    args: &[GcHandle],
) -> Result<GcHandle, String> {
    let arg = arg_or_undefined(interpreter, args, 0);
    let value = match interpreter.get(arg).to_number() {
        Ok(number) => Value::number(number),
        Err(_) => Value::NaN,
    };
    Ok(interpreter.alloc(value))
}
