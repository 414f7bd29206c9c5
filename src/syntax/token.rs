use std::fmt;
use std::rc::Rc;

use crate::diagnostics::Span;

use super::token_type::{Keyword, Punctuator, TokenKind};

/// Kind-specific data carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Keyword(Keyword),
    Identifier(Rc<str>),
    Boolean(bool),
    Number(f64),
    String(Rc<str>),
    Punctuator(Punctuator),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub payload: Payload,
    /// A line terminator was skipped between the previous token and this one.
    pub newline_before: bool,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize, payload: Payload) -> Self {
        Self {
            kind,
            start,
            end,
            payload,
            newline_before: false,
        }
    }

    pub fn end_of_source(offset: usize) -> Self {
        Self::new(TokenKind::EndOfSource, offset, offset, Payload::None)
    }

    pub fn keyword(keyword: Keyword, start: usize, end: usize) -> Self {
        Self::new(TokenKind::Keyword, start, end, Payload::Keyword(keyword))
    }

    pub fn identifier(name: Rc<str>, start: usize, end: usize) -> Self {
        Self::new(TokenKind::Identifier, start, end, Payload::Identifier(name))
    }

    pub fn boolean(value: bool, start: usize, end: usize) -> Self {
        Self::new(TokenKind::BooleanLiteral, start, end, Payload::Boolean(value))
    }

    pub fn null(start: usize, end: usize) -> Self {
        Self::new(TokenKind::NullLiteral, start, end, Payload::None)
    }

    pub fn number(value: f64, start: usize, end: usize) -> Self {
        Self::new(TokenKind::NumericLiteral, start, end, Payload::Number(value))
    }

    pub fn string(value: Rc<str>, start: usize, end: usize) -> Self {
        Self::new(TokenKind::StringLiteral, start, end, Payload::String(value))
    }

    pub fn punctuator(punctuator: Punctuator, start: usize, end: usize) -> Self {
        Self::new(
            TokenKind::Punctuator,
            start,
            end,
            Payload::Punctuator(punctuator),
        )
    }

    pub(crate) fn with_newline_before(mut self, newline_before: bool) -> Self {
        self.newline_before = newline_before;
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfSource
    }

    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.payload == Payload::Punctuator(punctuator)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.payload == Payload::Keyword(keyword)
    }

    pub fn as_punctuator(&self) -> Option<Punctuator> {
        match self.payload {
            Payload::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }

    /// Human-readable description used in "expected X, found Y" reports.
    pub fn describe(&self) -> String {
        match &self.payload {
            Payload::None if self.is_end() => "end of source".to_string(),
            Payload::None => "`null`".to_string(),
            Payload::Keyword(keyword) => format!("keyword `{}`", keyword),
            Payload::Identifier(name) => format!("identifier `{}`", name),
            Payload::Boolean(value) => format!("`{}`", value),
            Payload::Number(value) => format!("number `{}`", value),
            Payload::String(value) => format!("string {:?}", value),
            Payload::Punctuator(punctuator) => format!("`{}`", punctuator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match &self.payload {
            Payload::None if self.is_end() => String::new(),
            Payload::None => "null".to_string(),
            Payload::Keyword(keyword) => keyword.to_string(),
            Payload::Identifier(name) => name.to_string(),
            Payload::Boolean(value) => value.to_string(),
            Payload::Number(value) => value.to_string(),
            Payload::String(value) => format!("{:?}", value),
            Payload::Punctuator(punctuator) => punctuator.to_string(),
        };
        write!(f, "Token({}, {}, {}..{})", self.kind, text, self.start, self.end)
    }
}
