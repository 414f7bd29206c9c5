//! String literal parsing

use std::rc::Rc;

use crate::diagnostics::{Diagnostic, Span, UNTERMINATED_STRING};
use crate::syntax::token::Token;

use super::{Lexer, is_line_terminator};

impl Lexer {
    /// Entry: current char is the opening quote.
    pub(super) fn read_string(&mut self, quote: char) -> Result<Token, Diagnostic> {
        let start = self.index;
        let mut value = String::new();
        self.index += 1;

        loop {
            match self.current_char() {
                Some(ch) if ch == quote => {
                    self.index += 1;
                    return Ok(Token::string(Rc::from(value), start, self.index));
                }
                Some('\\') => {
                    let Some(escaped) = self.peek_char(1) else {
                        break;
                    };
                    value.push(unescape(escaped));
                    self.index += 2;
                }
                Some(ch) if !is_line_terminator(ch) => {
                    value.push(ch);
                    self.index += 1;
                }
                _ => break,
            }
        }

        Err(Diagnostic::error("UNTERMINATED STRING")
            .with_code(UNTERMINATED_STRING)
            .with_span(Span::new(start, self.index))
            .with_message(format!("string literal is missing its closing {}", quote)))
    }
}

fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}
