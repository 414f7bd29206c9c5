//! Number literal parsing
//!
//! Supports decimal literals with an optional fractional part and exponent:
//! `42`, `3.14`, `.5`, `2.5e10`, `1.5E-3`.

use crate::diagnostics::{Diagnostic, MALFORMED_NUMBER, Span};
use crate::syntax::token::Token;

use super::{Lexer, is_identifier_head};

impl Lexer {
    pub(super) fn read_number(&mut self) -> Result<Token, Diagnostic> {
        let start = self.index;
        self.consume_digits();

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.index += 1;
            self.consume_digits();
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            self.index += 1;
            if matches!(self.current_char(), Some('+' | '-')) {
                self.index += 1;
            }
            if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.malformed_number(start, "exponent has no digits"));
            }
            self.consume_digits();
        }

        if self.current_char().is_some_and(is_identifier_head) {
            return Err(self.malformed_number(start, "identifier starts immediately after number"));
        }

        let text: String = self.input[start..self.index].iter().collect();
        let value = text
            .parse::<f64>()
            .map_err(|_| self.malformed_number(start, "not a decimal number"))?;
        Ok(Token::number(value, start, self.index))
    }

    fn consume_digits(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.index += 1;
        }
    }

    fn malformed_number(&self, start: usize, reason: &str) -> Diagnostic {
        Diagnostic::error("MALFORMED NUMBER")
            .with_code(MALFORMED_NUMBER)
            .with_span(Span::new(start, self.index.max(start + 1)))
            .with_message(reason.to_string())
    }
}
