//! Recursive-descent parser with one token of lookahead.
//!
//! Parsing stops at the first lexical or syntax error; there is no recovery.

use crate::diagnostics::Diagnostic;
use crate::syntax::{
    ast::{Body, Program},
    builder::AstBuilder,
    lexer::Lexer,
    token_type::Punctuator,
};

mod expression;
mod helpers;
mod statement;

pub struct Parser {
    lexer: Lexer,
    builder: AstBuilder,
    /// End offset of the most recently consumed token.
    last_end: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            builder: AstBuilder::new(),
            last_end: 0,
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, Diagnostic> {
        let body = self.parse_body()?;
        Ok(self.builder.program(body))
    }

    /// Number of AST nodes created so far.
    pub fn node_count(&self) -> u32 {
        self.builder.node_count()
    }

    fn parse_body(&mut self) -> Result<Body, Diagnostic> {
        let mut statements = Vec::new();
        loop {
            if self.eat_punctuator(Punctuator::Semicolon)? {
                continue;
            }
            if self.peek()?.is_end() {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(self.builder.body(statements))
    }
}

/// Parses a whole source text into a [`Program`].
pub fn parse(source: &str) -> Result<Program, Diagnostic> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program()?;
    tracing::debug!(nodes = parser.node_count(), "parsed program");
    Ok(program)
}

#[cfg(test)]
mod parser_test;
