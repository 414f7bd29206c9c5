//! Abstract syntax tree.
//!
//! Every node owns its children; function bodies are the one exception and are
//! held through an `Rc` so function values created at runtime can share them
//! with the tree. Each node carries a [`NodeId`] assigned by
//! [`AstBuilder`](super::builder::AstBuilder), used for diagnostics only.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::diagnostics::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".node_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
}

impl BinaryOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::UnsignedShiftRight => ">>>",
        }
    }
}

/// Short-circuit operators; they yield the deciding operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

/// Any operator that can appear between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Binary(BinaryOperator),
    Logical(LogicalOperator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    Negate,
    Plus,
    Not,
    BitNot,
}

impl UnaryOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
}

impl AssignmentOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::ModuloAssign => "%=",
        }
    }

    /// The arithmetic operator a compound assignment applies, if any.
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            AssignmentOperator::Assign => None,
            AssignmentOperator::AddAssign => Some(BinaryOperator::Add),
            AssignmentOperator::SubtractAssign => Some(BinaryOperator::Subtract),
            AssignmentOperator::MultiplyAssign => Some(BinaryOperator::Multiply),
            AssignmentOperator::DivideAssign => Some(BinaryOperator::Divide),
            AssignmentOperator::ModuloAssign => Some(BinaryOperator::Modulo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    String(Rc<str>),
    Numeric(f64),
}

/// Property selector of a member expression: `.name` or `[expr]`.
#[derive(Debug, Clone, Serialize)]
pub enum MemberProperty {
    Named(Rc<str>),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectProperty {
    pub key: Rc<str>,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub enum Expression {
    Literal {
        id: NodeId,
        value: Literal,
        span: Span,
    },
    Identifier {
        id: NodeId,
        name: Rc<str>,
        span: Span,
    },
    This {
        id: NodeId,
        span: Span,
    },
    Member {
        id: NodeId,
        object: Box<Expression>,
        property: MemberProperty,
        span: Span,
    },
    Call {
        id: NodeId,
        callee: Box<Expression>,
        arguments: Vec<Expression>,
        span: Span,
    },
    Assignment {
        id: NodeId,
        operator: AssignmentOperator,
        target: Box<Expression>,
        value: Box<Expression>,
        span: Span,
    },
    Object {
        id: NodeId,
        properties: Vec<ObjectProperty>,
        span: Span,
    },
    Array {
        id: NodeId,
        elements: Vec<Expression>,
        span: Span,
    },
    Sequence {
        id: NodeId,
        expressions: Vec<Expression>,
        span: Span,
    },
    Unary {
        id: NodeId,
        operator: UnaryOperator,
        argument: Box<Expression>,
        span: Span,
    },
    Binary {
        id: NodeId,
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        span: Span,
    },
    Logical {
        id: NodeId,
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        span: Span,
    },
    Function {
        id: NodeId,
        name: Option<Rc<str>>,
        params: Vec<Rc<str>>,
        body: Rc<Block>,
        span: Span,
    },
}

impl Expression {
    pub fn id(&self) -> NodeId {
        match self {
            Expression::Literal { id, .. }
            | Expression::Identifier { id, .. }
            | Expression::This { id, .. }
            | Expression::Member { id, .. }
            | Expression::Call { id, .. }
            | Expression::Assignment { id, .. }
            | Expression::Object { id, .. }
            | Expression::Array { id, .. }
            | Expression::Sequence { id, .. }
            | Expression::Unary { id, .. }
            | Expression::Binary { id, .. }
            | Expression::Logical { id, .. }
            | Expression::Function { id, .. } => *id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::Literal { span, .. }
            | Expression::Identifier { span, .. }
            | Expression::This { span, .. }
            | Expression::Member { span, .. }
            | Expression::Call { span, .. }
            | Expression::Assignment { span, .. }
            | Expression::Object { span, .. }
            | Expression::Array { span, .. }
            | Expression::Sequence { span, .. }
            | Expression::Unary { span, .. }
            | Expression::Binary { span, .. }
            | Expression::Logical { span, .. }
            | Expression::Function { span, .. } => *span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Literal { value, .. } => match value {
                Literal::Null => "NullLiteral",
                Literal::Boolean(_) => "BooleanLiteral",
                Literal::String(_) => "StringLiteral",
                Literal::Numeric(_) => "NumericLiteral",
            },
            Expression::Identifier { .. } => "Identifier",
            Expression::This { .. } => "ThisExpression",
            Expression::Member { .. } => "MemberExpression",
            Expression::Call { .. } => "CallExpression",
            Expression::Assignment { .. } => "AssignmentExpression",
            Expression::Object { .. } => "ObjectExpression",
            Expression::Array { .. } => "ArrayExpression",
            Expression::Sequence { .. } => "SequenceExpression",
            Expression::Unary { .. } => "UnaryExpression",
            Expression::Binary { .. } => "BinaryExpression",
            Expression::Logical { .. } => "LogicalExpression",
            Expression::Function { .. } => "FunctionExpression",
        }
    }

    /// Identifiers and member expressions are the only assignable forms.
    pub fn is_assignment_target(&self) -> bool {
        matches!(
            self,
            Expression::Identifier { .. } | Expression::Member { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariableDeclarator {
    pub id: NodeId,
    pub name: Rc<str>,
    pub init: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub id: NodeId,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub enum Statement {
    Variable {
        id: NodeId,
        kind: VariableKind,
        declarations: Vec<VariableDeclarator>,
        span: Span,
    },
    If {
        id: NodeId,
        condition: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
        span: Span,
    },
    While {
        id: NodeId,
        test: Expression,
        body: Box<Statement>,
        span: Span,
    },
    Expression {
        id: NodeId,
        expression: Expression,
        span: Span,
    },
    Block(Block),
}

impl Statement {
    pub fn id(&self) -> NodeId {
        match self {
            Statement::Variable { id, .. }
            | Statement::If { id, .. }
            | Statement::While { id, .. }
            | Statement::Expression { id, .. } => *id,
            Statement::Block(block) => block.id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Statement::Variable { span, .. }
            | Statement::If { span, .. }
            | Statement::While { span, .. }
            | Statement::Expression { span, .. } => *span,
            Statement::Block(block) => block.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Variable { .. } => "VariableStatement",
            Statement::If { .. } => "IfStatement",
            Statement::While { .. } => "WhileStatement",
            Statement::Expression { .. } => "ExpressionStatement",
            Statement::Block(_) => "BlockStatement",
        }
    }
}

/// Top-level ordered statement list.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub id: NodeId,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub id: NodeId,
    pub body: Body,
}

// ---------------------------------------------------------------------------
// Display: fully parenthesised source, used by tests and `noop ast --text`
// ---------------------------------------------------------------------------

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{:?}", value),
            Literal::Numeric(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal { value, .. } => write!(f, "{}", value),
            Expression::Identifier { name, .. } => write!(f, "{}", name),
            Expression::This { .. } => write!(f, "this"),
            Expression::Member {
                object, property, ..
            } => match property {
                MemberProperty::Named(name) => write!(f, "{}.{}", object, name),
                MemberProperty::Computed(index) => write!(f, "{}[{}]", object, index),
            },
            Expression::Call {
                callee, arguments, ..
            } => write!(f, "{}({})", callee, join(arguments, ", ")),
            Expression::Assignment {
                operator,
                target,
                value,
                ..
            } => write!(f, "({} {} {})", target, operator.as_str(), value),
            Expression::Object { properties, .. } => {
                if properties.is_empty() {
                    return write!(f, "{{}}");
                }
                let items: Vec<String> = properties
                    .iter()
                    .map(|property| format!("{}: {}", property.key, property.value))
                    .collect();
                write!(f, "{{ {} }}", items.join(", "))
            }
            Expression::Array { elements, .. } => write!(f, "[{}]", join(elements, ", ")),
            Expression::Sequence { expressions, .. } => {
                write!(f, "({})", join(expressions, ", "))
            }
            Expression::Unary {
                operator, argument, ..
            } => write!(f, "({}{})", operator.as_str(), argument),
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator.as_str(), right),
            Expression::Logical {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator.as_str(), right),
            Expression::Function {
                name, params, body, ..
            } => {
                write!(f, "function")?;
                if let Some(name) = name {
                    write!(f, " {}", name)?;
                }
                write!(f, "({}) {}", join(params, ", "), body)
            }
        }
    }
}

impl fmt::Display for VariableDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.init {
            Some(init) => write!(f, "{} = {}", self.name, init),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ {} }}", join(&self.statements, " "))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Variable {
                kind, declarations, ..
            } => write!(f, "{} {};", kind.as_str(), join(declarations, ", ")),
            Statement::If {
                condition,
                consequent,
                alternate,
                ..
            } => {
                write!(f, "if ({}) {}", condition, consequent)?;
                if let Some(alternate) = alternate {
                    write!(f, " else {}", alternate)?;
                }
                Ok(())
            }
            Statement::While { test, body, .. } => write!(f, "while ({}) {}", test, body),
            Statement::Expression { expression, .. } => write!(f, "{};", expression),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join(&self.body.statements, "\n"))
    }
}
