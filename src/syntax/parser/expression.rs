use std::rc::Rc;

use crate::diagnostics::{Diagnostic, INVALID_ASSIGNMENT_TARGET, Span};
use crate::runtime::number::format_number;
use crate::syntax::{
    ast::{Expression, InfixOperator, Literal, MemberProperty, ObjectProperty},
    precedence::{Precedence, assignment_op, infix_op, prefix_op, rhs_precedence},
    token::{Payload, Token},
    token_type::{Keyword, Punctuator},
};

use super::{Parser, helpers::unexpected_token};

impl Parser {
    /// Sequence expression: the comma operator binds loosest of all.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, Diagnostic> {
        let first = self.parse_assignment_expression()?;
        if !self.is_peek_punctuator(Punctuator::Comma)? {
            return Ok(first);
        }

        let start = first.span().start;
        let mut expressions = vec![first];
        while self.eat_punctuator(Punctuator::Comma)? {
            expressions.push(self.parse_assignment_expression()?);
        }
        let span = self.span_from(start);
        Ok(self.builder.sequence(expressions, span))
    }

    pub(super) fn parse_assignment_expression(&mut self) -> Result<Expression, Diagnostic> {
        let target = self.parse_binary_expression(Precedence::LogicalOr)?;

        let Some(operator) = self.peek_punctuator()?.and_then(assignment_op) else {
            return Ok(target);
        };
        if !target.is_assignment_target() {
            return Err(Diagnostic::error("INVALID ASSIGNMENT TARGET")
                .with_code(INVALID_ASSIGNMENT_TARGET)
                .with_span(target.span())
                .with_message(format!(
                    "cannot assign to {}",
                    target.kind_name()
                ))
                .with_hint("Only identifiers and member expressions can be assigned to."));
        }
        self.next_token()?;

        let value = self.parse_assignment_expression()?;
        Ok(self.builder.assignment(operator, target, value))
    }

    /// Precedence climbing over the binary operator table.
    fn parse_binary_expression(&mut self, min: Precedence) -> Result<Expression, Diagnostic> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let Some(info) = self.peek_punctuator()?.and_then(infix_op) else {
                break;
            };
            if info.precedence < min {
                break;
            }
            self.next_token()?;
            let right = self.parse_binary_expression(rhs_precedence(info))?;
            left = match info.operator {
                InfixOperator::Binary(operator) => self.builder.binary(operator, left, right),
                InfixOperator::Logical(operator) => self.builder.logical(operator, left, right),
            };
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, Diagnostic> {
        let Some(operator) = self.peek_punctuator()?.and_then(prefix_op) else {
            return self.parse_postfix_expression();
        };
        let start = self.next_token()?.start;
        let argument = self.parse_unary_expression()?;
        let span = Span::new(start, argument.span().end);
        Ok(self.builder.unary(operator, argument, span))
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression, Diagnostic> {
        let mut expression = self.parse_primary_expression()?;

        loop {
            let start = expression.span().start;
            match self.peek_punctuator()? {
                Some(Punctuator::Dot) => {
                    self.next_token()?;
                    let name = self.parse_literal_property()?;
                    let span = self.span_from(start);
                    expression = self
                        .builder
                        .member(expression, MemberProperty::Named(name), span);
                }
                Some(Punctuator::LBracket) => {
                    self.next_token()?;
                    let property = self.parse_expression()?;
                    self.expect_punctuator(Punctuator::RBracket)?;
                    let span = self.span_from(start);
                    expression = self.builder.member(
                        expression,
                        MemberProperty::Computed(Box::new(property)),
                        span,
                    );
                }
                Some(Punctuator::LParen) => {
                    let arguments = self.parse_arguments()?;
                    let span = self.span_from(start);
                    expression = self.builder.call(expression, arguments, span);
                }
                _ => return Ok(expression),
            }
        }
    }

    /// Name after `.`; reserved words and literal words are valid here.
    fn parse_literal_property(&mut self) -> Result<Rc<str>, Diagnostic> {
        let token = self.next_token()?;
        property_name(&token).ok_or_else(|| unexpected_token(&token, "a property name"))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>, Diagnostic> {
        self.expect_punctuator(Punctuator::LParen)?;
        let mut arguments = Vec::new();
        if self.eat_punctuator(Punctuator::RParen)? {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_assignment_expression()?);
            if !self.eat_punctuator(Punctuator::Comma)? {
                break;
            }
        }
        self.expect_punctuator(Punctuator::RParen)?;
        Ok(arguments)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, Diagnostic> {
        let token = self.next_token()?;
        let span = token.span();

        match token.payload {
            Payload::Number(value) => Ok(self.builder.literal(Literal::Numeric(value), span)),
            Payload::String(value) => Ok(self.builder.literal(Literal::String(value), span)),
            Payload::Boolean(value) => Ok(self.builder.literal(Literal::Boolean(value), span)),
            Payload::None if !token.is_end() => Ok(self.builder.literal(Literal::Null, span)),
            Payload::Identifier(name) => Ok(self.builder.identifier(name, span)),
            Payload::Keyword(Keyword::This) => Ok(self.builder.this_expression(span)),
            Payload::Keyword(Keyword::Function) => self.parse_function_expression(span.start),
            Payload::Punctuator(Punctuator::LParen) => {
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RParen)?;
                Ok(expression)
            }
            Payload::Punctuator(Punctuator::LBracket) => self.parse_array_expression(span.start),
            Payload::Punctuator(Punctuator::LBrace) => self.parse_object_expression(span.start),
            _ => Err(unexpected_token(&token, "an expression")),
        }
    }

    /// Entry: `[` already consumed.
    fn parse_array_expression(&mut self, start: usize) -> Result<Expression, Diagnostic> {
        let mut elements = Vec::new();
        while !self.eat_punctuator(Punctuator::RBracket)? {
            elements.push(self.parse_assignment_expression()?);
            if !self.eat_punctuator(Punctuator::Comma)? {
                self.expect_punctuator(Punctuator::RBracket)?;
                break;
            }
        }
        let span = self.span_from(start);
        Ok(self.builder.array(elements, span))
    }

    /// Entry: `{` already consumed.
    fn parse_object_expression(&mut self, start: usize) -> Result<Expression, Diagnostic> {
        let mut properties = Vec::new();
        while !self.eat_punctuator(Punctuator::RBrace)? {
            let key_token = self.next_token()?;
            let key = match &key_token.payload {
                Payload::Number(value) => Rc::from(format_number(*value)),
                Payload::String(value) => value.clone(),
                _ => property_name(&key_token)
                    .ok_or_else(|| unexpected_token(&key_token, "a property key"))?,
            };
            self.expect_punctuator(Punctuator::Colon)?;
            let value = self.parse_assignment_expression()?;
            let span = self.span_from(key_token.start);
            properties.push(ObjectProperty { key, value, span });

            if !self.eat_punctuator(Punctuator::Comma)? {
                self.expect_punctuator(Punctuator::RBrace)?;
                break;
            }
        }
        let span = self.span_from(start);
        Ok(self.builder.object(properties, span))
    }

    /// Entry: `function` already consumed.
    fn parse_function_expression(&mut self, start: usize) -> Result<Expression, Diagnostic> {
        let named = matches!(self.peek()?.payload, Payload::Identifier(_));
        let name = if named {
            Some(self.expect_identifier()?.0)
        } else {
            None
        };

        self.expect_punctuator(Punctuator::LParen)?;
        let mut params = Vec::new();
        if !self.eat_punctuator(Punctuator::RParen)? {
            loop {
                params.push(self.expect_identifier()?.0);
                if !self.eat_punctuator(Punctuator::Comma)? {
                    break;
                }
            }
            self.expect_punctuator(Punctuator::RParen)?;
        }

        let body = self.parse_block()?;
        let span = self.span_from(start);
        Ok(self.builder.function(name, params, body, span))
    }
}

fn property_name(token: &Token) -> Option<Rc<str>> {
    match &token.payload {
        Payload::Identifier(name) => Some(name.clone()),
        Payload::Keyword(keyword) => Some(Rc::from(keyword.as_str())),
        Payload::Boolean(value) => Some(Rc::from(value.to_string())),
        Payload::None if !token.is_end() => Some(Rc::from("null")),
        _ => None,
    }
}
