//! noop: a small dynamically typed scripting language.
//!
//! Source text is lexed and parsed into an AST ([`parse`]), then evaluated by
//! a tree-walking [`Interpreter`] whose values live in a mark-and-sweep
//! collected heap.
//!
//! ```no_run
//! let program = noop::parse("var x = 1 + 2; print(x);").unwrap();
//! let mut interpreter = noop::Interpreter::default();
//! program.execute(&mut interpreter).unwrap();
//! ```

use std::{fmt, sync::Once};

pub mod diagnostics;
pub mod runtime;
pub mod syntax;

pub use diagnostics::{Diagnostic, Span};
pub use runtime::{Interpreter, RuntimeConfig, RuntimeError, Value};
pub use syntax::{ast::Program, parse};

/// Failure of [`run_source`]: a lexical/syntax error or a runtime error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Syntax(Diagnostic),
    Runtime(RuntimeError),
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Syntax(diagnostic) => diagnostic.clone(),
            Error::Runtime(err) => err.to_diagnostic(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(diagnostic) => write!(f, "{}", diagnostic),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        Error::Syntax(diagnostic)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}

/// Parses and runs `source` on `interpreter`, returning the completion
/// value's string form (`NaN` when it has none).
pub fn run_source(interpreter: &mut Interpreter, source: &str) -> Result<String, Error> {
    let program = parse(source)?;
    let result = program.execute(interpreter)?;
    Ok(interpreter
        .stringify(result)
        .unwrap_or_else(|_| "NaN".to_string()))
}

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, writing to stderr.
///
/// Safe to call more than once. `RUST_LOG` wins when set; otherwise `level`
/// enables this crate's events at that level and everything else stays at
/// `warn`.
pub fn init_tracing(level: Option<tracing::Level>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(level) = level {
            EnvFilter::new(format!("warn,noop={}", level))
        } else {
            EnvFilter::new("warn")
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
