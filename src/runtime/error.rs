use std::{error::Error, fmt, rc::Rc};

use crate::diagnostics::{
    CALL_DEPTH_EXCEEDED, Diagnostic, INVALID_ASSIGNMENT_TARGET, NATIVE_ERROR, NOT_CALLABLE,
    SCOPE_EXITED, Span, UNDEFINED_REFERENCE,
};

/// A value could not be converted to a number or a string.
///
/// Recovered locally by the evaluator; it never aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionError;

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value cannot be coerced")
    }
}

impl Error for CoercionError {}

/// Fatal evaluation error. The first one terminates the run.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    UndefinedReference { name: Rc<str>, span: Span },
    NotCallable { kind: &'static str, span: Span },
    /// The callee's defining scope was destroyed before the call.
    ScopeExited { name: Rc<str>, span: Span },
    CallDepthExceeded { limit: usize, span: Span },
    /// Assignment to a node that is not an identifier or member expression.
    InvalidAssignmentTarget { kind: &'static str, span: Span },
    Native { name: Rc<str>, message: String, span: Span },
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::UndefinedReference { .. } => UNDEFINED_REFERENCE,
            RuntimeError::NotCallable { .. } => NOT_CALLABLE,
            RuntimeError::ScopeExited { .. } => SCOPE_EXITED,
            RuntimeError::CallDepthExceeded { .. } => CALL_DEPTH_EXCEEDED,
            RuntimeError::InvalidAssignmentTarget { .. } => INVALID_ASSIGNMENT_TARGET,
            RuntimeError::Native { .. } => NATIVE_ERROR,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            RuntimeError::UndefinedReference { span, .. }
            | RuntimeError::NotCallable { span, .. }
            | RuntimeError::ScopeExited { span, .. }
            | RuntimeError::CallDepthExceeded { span, .. }
            | RuntimeError::InvalidAssignmentTarget { span, .. }
            | RuntimeError::Native { span, .. } => *span,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            RuntimeError::UndefinedReference { .. } => "UNDEFINED REFERENCE",
            RuntimeError::NotCallable { .. } => "NOT CALLABLE",
            RuntimeError::ScopeExited { .. } => "SCOPE EXITED",
            RuntimeError::CallDepthExceeded { .. } => "CALL DEPTH EXCEEDED",
            RuntimeError::InvalidAssignmentTarget { .. } => "INVALID ASSIGNMENT TARGET",
            RuntimeError::Native { .. } => "NATIVE ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            RuntimeError::UndefinedReference { name, .. } => format!("`{}` is not defined", name),
            RuntimeError::NotCallable { kind, .. } => format!("{} is not a function", kind),
            RuntimeError::ScopeExited { name, .. } => {
                format!("function `{}` outlived the scope it was defined in", name)
            }
            RuntimeError::CallDepthExceeded { limit, .. } => {
                format!("maximum call depth of {} exceeded", limit)
            }
            RuntimeError::InvalidAssignmentTarget { kind, .. } => {
                format!("cannot assign to {}", kind)
            }
            RuntimeError::Native { name, message, .. } => format!("{}: {}", name, message),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.title())
            .with_code(self.code())
            .with_span(self.span())
            .with_message(self.message());
        match self {
            RuntimeError::UndefinedReference { .. } => diagnostic
                .with_hint("Declare it with `var`, `let` or `const` before reading it."),
            RuntimeError::ScopeExited { .. } => diagnostic
                .with_hint("Functions defined inside a block can only be called while it runs."),
            _ => diagnostic,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (at offset {})",
            self.code(),
            self.message(),
            self.span().start
        )
    }
}

impl Error for RuntimeError {}
