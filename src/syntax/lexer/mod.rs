//! Source buffer to token stream, with exactly one token of lookahead.

use std::rc::Rc;

use crate::diagnostics::{Diagnostic, Span, UNEXPECTED_CHARACTER};
use crate::syntax::token::Token;
use crate::syntax::token_type::{Punctuator, lookup_keyword};

mod comments;
mod numbers;
mod strings;

/// The noop lexer.
///
/// `peek` skips whitespace and comments and buffers one token; `lex` hands
/// the buffered token out, so the next `peek` scans afresh. Once the input is
/// exhausted every call yields an `EndOfSource` token at the same offset.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    index: usize,
    look_ahead: Option<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            index: 0,
            look_ahead: None,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, Diagnostic> {
        let token = match self.look_ahead.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        Ok(self.look_ahead.insert(token))
    }

    /// Consumes and returns the next token.
    pub fn lex(&mut self) -> Result<Token, Diagnostic> {
        match self.look_ahead.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// Lexes the whole input, including the terminal `EndOfSource` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();
        loop {
            let token = self.lex()?;
            let is_end = token.is_end();
            tokens.push(token);
            if is_end {
                return Ok(tokens);
            }
        }
    }

    fn scan(&mut self) -> Result<Token, Diagnostic> {
        let newline_before = self.skip_ignorable()?;
        let start = self.index;

        let Some(ch) = self.current_char() else {
            return Ok(Token::end_of_source(start).with_newline_before(newline_before));
        };

        let token = if ch == '"' || ch == '\'' {
            self.read_string(ch)?
        } else if ch.is_ascii_digit()
            || (ch == '.' && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()))
        {
            self.read_number()?
        } else if is_identifier_head(ch) {
            self.read_word()
        } else if let Some((punctuator, len)) = Punctuator::longest_match(&self.input[start..]) {
            self.index += len;
            Token::punctuator(punctuator, start, self.index)
        } else {
            return Err(Diagnostic::error("UNEXPECTED CHARACTER")
                .with_code(UNEXPECTED_CHARACTER)
                .with_span(Span::new(start, start + 1))
                .with_message(format!("unrecognized character {:?}", ch)));
        };

        Ok(token.with_newline_before(newline_before))
    }

    fn read_word(&mut self) -> Token {
        let start = self.index;
        while self.current_char().is_some_and(is_identifier_part) {
            self.index += 1;
        }
        let word: String = self.input[start..self.index].iter().collect();

        match word.as_str() {
            "true" => Token::boolean(true, start, self.index),
            "false" => Token::boolean(false, start, self.index),
            "null" => Token::null(start, self.index),
            _ => match lookup_keyword(&word) {
                Some(keyword) => Token::keyword(keyword, start, self.index),
                None => Token::identifier(Rc::from(word), start, self.index),
            },
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }

    /// Look ahead n chars without advancing; n=0 is the current char.
    fn peek_char(&self, n: usize) -> Option<char> {
        self.input.get(self.index + n).copied()
    }
}

pub fn is_identifier_head(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_head(ch) || ch.is_numeric()
}

pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
