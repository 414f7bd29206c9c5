//! The single factory every AST node is created through.
//!
//! Node ids are handed out here in creation order, so numbering is monotonic
//! across all grammar rules of one parse.

use std::rc::Rc;

use crate::diagnostics::Span;
use crate::syntax::ast::{
    AssignmentOperator, BinaryOperator, Block, Body, Expression, Literal, LogicalOperator,
    MemberProperty, NodeId, ObjectProperty, Program, Statement, UnaryOperator, VariableDeclarator,
    VariableKind,
};

#[derive(Debug, Default)]
pub struct AstBuilder {
    next_id: u32,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn node_count(&self) -> u32 {
        self.next_id
    }

    fn node_id(&mut self, kind: &'static str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        tracing::trace!(node = id.0, kind, "create node");
        id
    }

    pub fn literal(&mut self, value: Literal, span: Span) -> Expression {
        let kind = match value {
            Literal::Null => "NullLiteral",
            Literal::Boolean(_) => "BooleanLiteral",
            Literal::String(_) => "StringLiteral",
            Literal::Numeric(_) => "NumericLiteral",
        };
        Expression::Literal {
            id: self.node_id(kind),
            value,
            span,
        }
    }

    pub fn identifier(&mut self, name: Rc<str>, span: Span) -> Expression {
        Expression::Identifier {
            id: self.node_id("Identifier"),
            name,
            span,
        }
    }

    pub fn this_expression(&mut self, span: Span) -> Expression {
        Expression::This {
            id: self.node_id("ThisExpression"),
            span,
        }
    }

    pub fn member(&mut self, object: Expression, property: MemberProperty, span: Span) -> Expression {
        Expression::Member {
            id: self.node_id("MemberExpression"),
            object: Box::new(object),
            property,
            span,
        }
    }

    pub fn call(&mut self, callee: Expression, arguments: Vec<Expression>, span: Span) -> Expression {
        Expression::Call {
            id: self.node_id("CallExpression"),
            callee: Box::new(callee),
            arguments,
            span,
        }
    }

    pub fn assignment(
        &mut self,
        operator: AssignmentOperator,
        target: Expression,
        value: Expression,
    ) -> Expression {
        let span = target.span().merge(value.span());
        Expression::Assignment {
            id: self.node_id("AssignmentExpression"),
            operator,
            target: Box::new(target),
            value: Box::new(value),
            span,
        }
    }

    pub fn object(&mut self, properties: Vec<ObjectProperty>, span: Span) -> Expression {
        Expression::Object {
            id: self.node_id("ObjectExpression"),
            properties,
            span,
        }
    }

    pub fn array(&mut self, elements: Vec<Expression>, span: Span) -> Expression {
        Expression::Array {
            id: self.node_id("ArrayExpression"),
            elements,
            span,
        }
    }

    pub fn sequence(&mut self, expressions: Vec<Expression>, span: Span) -> Expression {
        Expression::Sequence {
            id: self.node_id("SequenceExpression"),
            expressions,
            span,
        }
    }

    pub fn unary(&mut self, operator: UnaryOperator, argument: Expression, span: Span) -> Expression {
        Expression::Unary {
            id: self.node_id("UnaryExpression"),
            operator,
            argument: Box::new(argument),
            span,
        }
    }

    pub fn binary(
        &mut self,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        let span = left.span().merge(right.span());
        Expression::Binary {
            id: self.node_id("BinaryExpression"),
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn logical(
        &mut self,
        operator: LogicalOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        let span = left.span().merge(right.span());
        Expression::Logical {
            id: self.node_id("LogicalExpression"),
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn function(
        &mut self,
        name: Option<Rc<str>>,
        params: Vec<Rc<str>>,
        body: Block,
        span: Span,
    ) -> Expression {
        Expression::Function {
            id: self.node_id("FunctionExpression"),
            name,
            params,
            body: Rc::new(body),
            span,
        }
    }

    pub fn variable_declarator(
        &mut self,
        name: Rc<str>,
        init: Option<Expression>,
        span: Span,
    ) -> VariableDeclarator {
        VariableDeclarator {
            id: self.node_id("VariableDeclarator"),
            name,
            init,
            span,
        }
    }

    pub fn variable_statement(
        &mut self,
        kind: VariableKind,
        declarations: Vec<VariableDeclarator>,
        span: Span,
    ) -> Statement {
        Statement::Variable {
            id: self.node_id("VariableStatement"),
            kind,
            declarations,
            span,
        }
    }

    pub fn if_statement(
        &mut self,
        condition: Expression,
        consequent: Statement,
        alternate: Option<Statement>,
        span: Span,
    ) -> Statement {
        Statement::If {
            id: self.node_id("IfStatement"),
            condition,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
            span,
        }
    }

    pub fn while_statement(&mut self, test: Expression, body: Statement, span: Span) -> Statement {
        Statement::While {
            id: self.node_id("WhileStatement"),
            test,
            body: Box::new(body),
            span,
        }
    }

    pub fn expression_statement(&mut self, expression: Expression, span: Span) -> Statement {
        Statement::Expression {
            id: self.node_id("ExpressionStatement"),
            expression,
            span,
        }
    }

    pub fn block(&mut self, statements: Vec<Statement>, span: Span) -> Block {
        Block {
            id: self.node_id("BlockStatement"),
            statements,
            span,
        }
    }

    pub fn body(&mut self, statements: Vec<Statement>) -> Body {
        Body {
            id: self.node_id("Body"),
            statements,
        }
    }

    pub fn program(&mut self, body: Body) -> Program {
        Program {
            id: self.node_id("Program"),
            body,
        }
    }
}
