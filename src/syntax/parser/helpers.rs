use std::rc::Rc;

use crate::diagnostics::{Diagnostic, MISSING_SEMICOLON, Span, UNEXPECTED_TOKEN};
use crate::syntax::{
    token::{Payload, Token},
    token_type::{Keyword, Punctuator},
};

use super::Parser;

impl Parser {
    // Token navigation
    pub(super) fn peek(&mut self) -> Result<&Token, Diagnostic> {
        self.lexer.peek()
    }

    pub(super) fn next_token(&mut self) -> Result<Token, Diagnostic> {
        let token = self.lexer.lex()?;
        self.last_end = token.end;
        Ok(token)
    }

    pub(super) fn peek_punctuator(&mut self) -> Result<Option<Punctuator>, Diagnostic> {
        Ok(self.peek()?.as_punctuator())
    }

    pub(super) fn is_peek_punctuator(&mut self, punctuator: Punctuator) -> Result<bool, Diagnostic> {
        Ok(self.peek()?.is_punctuator(punctuator))
    }

    pub(super) fn is_peek_keyword(&mut self, keyword: Keyword) -> Result<bool, Diagnostic> {
        Ok(self.peek()?.is_keyword(keyword))
    }

    pub(super) fn eat_punctuator(&mut self, punctuator: Punctuator) -> Result<bool, Diagnostic> {
        if self.is_peek_punctuator(punctuator)? {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(super) fn expect_punctuator(&mut self, punctuator: Punctuator) -> Result<Token, Diagnostic> {
        let token = self.next_token()?;
        if token.is_punctuator(punctuator) {
            Ok(token)
        } else {
            Err(unexpected_token(&token, &format!("`{}`", punctuator)))
        }
    }

    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, Diagnostic> {
        let token = self.next_token()?;
        if token.is_keyword(keyword) {
            Ok(token)
        } else {
            Err(unexpected_token(&token, &format!("keyword `{}`", keyword)))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<(Rc<str>, Span), Diagnostic> {
        let token = self.next_token()?;
        match token.payload {
            Payload::Identifier(name) => Ok((name, Span::new(token.start, token.end))),
            _ => Err(unexpected_token(&token, "an identifier")),
        }
    }

    /// Requires a `;`, or inserts one before a line break, a `}` or the end
    /// of the source.
    pub(super) fn consume_semicolon(&mut self) -> Result<(), Diagnostic> {
        if self.eat_punctuator(Punctuator::Semicolon)? {
            return Ok(());
        }
        let last_end = self.last_end;
        let token = self.peek()?;
        if token.newline_before || token.is_end() || token.is_punctuator(Punctuator::RBrace) {
            return Ok(());
        }
        Err(Diagnostic::error("MISSING SEMICOLON")
            .with_code(MISSING_SEMICOLON)
            .with_span(Span::point(last_end))
            .with_message(format!("expected `;`, found {}", token.describe()))
            .with_hint("Separate statements with `;` or a line break."))
    }

    pub(super) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.last_end.max(start))
    }
}

pub(super) fn unexpected_token(token: &Token, expected: &str) -> Diagnostic {
    Diagnostic::error("UNEXPECTED TOKEN")
        .with_code(UNEXPECTED_TOKEN)
        .with_span(token.span())
        .with_message(format!("expected {}, found {}", expected, token.describe()))
}
