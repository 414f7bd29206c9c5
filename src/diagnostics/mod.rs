//! Error reports shared by the lexer, parser and evaluator.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Severity, render_diagnostics};
pub use span::Span;

pub const UNTERMINATED_STRING: &str = "E001";
pub const UNEXPECTED_CHARACTER: &str = "E002";
pub const UNTERMINATED_COMMENT: &str = "E003";
pub const MALFORMED_NUMBER: &str = "E004";
pub const UNEXPECTED_TOKEN: &str = "E100";
pub const MISSING_SEMICOLON: &str = "E101";
pub const INVALID_ASSIGNMENT_TARGET: &str = "E102";
pub const UNSUPPORTED_KEYWORD: &str = "E103";

pub const UNDEFINED_REFERENCE: &str = "E1000";
pub const NOT_CALLABLE: &str = "E1001";
pub const SCOPE_EXITED: &str = "E1002";
pub const CALL_DEPTH_EXCEEDED: &str = "E1003";
pub const NATIVE_ERROR: &str = "E1004";
