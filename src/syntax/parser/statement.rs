use crate::diagnostics::{Diagnostic, UNSUPPORTED_KEYWORD};
use crate::syntax::{
    ast::{Block, Expression, Statement, VariableKind},
    token::Payload,
    token_type::{Keyword, Punctuator},
};

use super::{Parser, helpers::unexpected_token};

impl Parser {
    pub(super) fn parse_statement(&mut self) -> Result<Statement, Diagnostic> {
        if self.is_peek_punctuator(Punctuator::LBrace)? {
            return Ok(Statement::Block(self.parse_block()?));
        }

        let keyword = match self.peek()?.payload {
            Payload::Keyword(keyword) => Some(keyword),
            _ => None,
        };
        let Some(keyword) = keyword else {
            return self.parse_expression_statement();
        };

        match keyword {
            Keyword::Var => self.parse_variable_statement(VariableKind::Var),
            Keyword::Let => self.parse_variable_statement(VariableKind::Let),
            Keyword::Const => self.parse_variable_statement(VariableKind::Const),
            Keyword::If => self.parse_if_statement(),
            Keyword::While => self.parse_while_statement(),
            Keyword::Function | Keyword::This => self.parse_expression_statement(),
            Keyword::Else => {
                let token = self.next_token()?;
                Err(unexpected_token(&token, "a statement"))
            }
            other => {
                let token = self.next_token()?;
                Err(Diagnostic::error("UNSUPPORTED KEYWORD")
                    .with_code(UNSUPPORTED_KEYWORD)
                    .with_span(token.span())
                    .with_message(format!("`{}` is reserved but not supported", other)))
            }
        }
    }

    pub(super) fn parse_block(&mut self) -> Result<Block, Diagnostic> {
        let start = self.expect_punctuator(Punctuator::LBrace)?.start;
        let mut statements = Vec::new();

        loop {
            if self.eat_punctuator(Punctuator::Semicolon)? {
                continue;
            }
            if self.is_peek_punctuator(Punctuator::RBrace)? {
                break;
            }
            if self.peek()?.is_end() {
                let token = self.next_token()?;
                return Err(unexpected_token(&token, "`}`"));
            }
            statements.push(self.parse_statement()?);
        }
        self.expect_punctuator(Punctuator::RBrace)?;

        let span = self.span_from(start);
        Ok(self.builder.block(statements, span))
    }

    fn parse_variable_statement(&mut self, kind: VariableKind) -> Result<Statement, Diagnostic> {
        let start = self.next_token()?.start;
        let mut declarations = Vec::new();

        loop {
            let (name, name_span) = self.expect_identifier()?;
            let init = if self.eat_punctuator(Punctuator::Assign)? {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            let span = self.span_from(name_span.start);
            declarations.push(self.builder.variable_declarator(name, init, span));

            if !self.eat_punctuator(Punctuator::Comma)? {
                break;
            }
        }
        self.consume_semicolon()?;

        let span = self.span_from(start);
        Ok(self.builder.variable_statement(kind, declarations, span))
    }

    fn parse_if_statement(&mut self) -> Result<Statement, Diagnostic> {
        let start = self.expect_keyword(Keyword::If)?.start;
        self.expect_punctuator(Punctuator::LParen)?;
        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;

        let consequent = self.parse_statement()?;
        // Greedy: an `else` always binds to the nearest unmatched `if`.
        let alternate = if self.is_peek_keyword(Keyword::Else)? {
            self.next_token()?;
            Some(self.parse_statement()?)
        } else {
            None
        };

        let span = self.span_from(start);
        Ok(self
            .builder
            .if_statement(condition, consequent, alternate, span))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, Diagnostic> {
        let start = self.expect_keyword(Keyword::While)?.start;
        self.expect_punctuator(Punctuator::LParen)?;
        let test = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;
        let body = self.parse_statement()?;

        let span = self.span_from(start);
        Ok(self.builder.while_statement(test, body, span))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, Diagnostic> {
        let expression = self.parse_expression()?;
        let start = expression.span().start;

        // A function literal ends with `}`, so like a declaration it needs no `;`.
        if matches!(expression, Expression::Function { .. }) {
            self.eat_punctuator(Punctuator::Semicolon)?;
        } else {
            self.consume_semicolon()?;
        }

        let span = self.span_from(start);
        Ok(self.builder.expression_statement(expression, span))
    }
}
