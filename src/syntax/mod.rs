//! Front end: tokens, lexer, AST and parser.

pub mod ast;
pub mod builder;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod token;
pub mod token_type;

pub use parser::{Parser, parse};
