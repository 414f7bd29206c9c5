use crate::runtime::{gc::GcHandle, interpreter::Interpreter, value::Value};

/// `gc()`: collects now and returns the number of freed slots, or `0` when
/// collection is disabled.
pub(super) fn native_gc(
    interpreter: &mut Interpreter,
    _args: &[GcHandle],
) -> Result<GcHandle, String> {
    let freed = interpreter
        .collect_garbage()
        .map_or(0, |report| report.freed);
    Ok(interpreter.alloc(Value::Numeric(freed as f64)))
}
