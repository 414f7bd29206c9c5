use crate::runtime::{gc::GcHandle, interpreter::Interpreter, value::Value};

/// `print(a, b, ...)`: string forms joined by a space, one line per call.
/// An argument that cannot be stringified prints as `NaN`.
pub(super) fn native_print(
    interpreter: &mut Interpreter,
    args: &[GcHandle],
) -> Result<GcHandle, String> {
    let line = args
        .iter()
        .map(|&arg| {
            interpreter
                .stringify(arg)
                .unwrap_or_else(|_| "NaN".to_string())
        })
        .collect::<Vec<_>>()
        .join(" ");
    interpreter
        .write_line(&line)
        .map_err(|e| format!("could not write output: {}", e))?;
    Ok(interpreter.alloc(Value::Undefined))
}
