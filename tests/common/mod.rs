use std::sync::{Mutex, MutexGuard, OnceLock};

use noop::{Interpreter, RuntimeConfig, runtime::interpreter::SharedOutput};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Sets `NO_COLOR` for the lifetime of the returned guard.
#[allow(dead_code)]
pub fn with_no_color() -> MutexGuard<'static, ()> {
    let guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    // SAFETY: every test touching the environment holds `env_lock`.
    unsafe { std::env::set_var("NO_COLOR", "1") };
    guard
}

/// Interpreter whose `print` output is captured.
#[allow(dead_code)]
pub fn interpreter(config: RuntimeConfig) -> (Interpreter, SharedOutput) {
    let output = SharedOutput::new();
    let interpreter = Interpreter::new(config).with_output(output.clone());
    (interpreter, output)
}

/// Runs `source` on a fresh interpreter; panics on any error.
#[allow(dead_code)]
pub fn run(source: &str) -> (String, String) {
    let (mut interpreter, output) = interpreter(RuntimeConfig::default());
    let value = noop::run_source(&mut interpreter, source)
        .unwrap_or_else(|err| panic!("{:?} failed: {}", source, err));
    (value, output.contents())
}
