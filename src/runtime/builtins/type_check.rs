use crate::runtime::{gc::GcHandle, interpreter::Interpreter, value::Value};

use super::helpers::arg_or_undefined;

/// `typeof(v)`: kind name of `v` as a string.
pub(super) fn native_type_of(
    interpreter: &mut Interpreter,
    args: &[GcHandle],
) -> Result<GcHandle, String> {
    let arg = arg_or_undefined(interpreter, args, 0);
    let name = interpreter.get(arg).type_name();
    Ok(interpreter.alloc(Value::string(name)))
}
