use crate::syntax::ast::{
    AssignmentOperator, BinaryOperator, InfixOperator, LogicalOperator, UnaryOperator,
};
use crate::syntax::token_type::Punctuator;

/// Binding strength, weakest first. C-family ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Sequence,       // a, b
    Assignment,     // =, +=, ... (right associative)
    LogicalOr,      // ||
    LogicalAnd,     // &&
    BitwiseOr,      // |
    BitwiseXor,     // ^
    BitwiseAnd,     // &
    Equality,       // ==, !=, ===, !==
    Relational,     // <, >, <=, >=
    Shift,          // <<, >>, >>>
    Additive,       // +, -
    Multiplicative, // *, /, %
    Unary,          // -x, !x
    Postfix,        // f(x), a.b, a[b]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub punctuator: Punctuator,
    pub operator: InfixOperator,
    pub precedence: Precedence,
    pub associativity: Assoc,
}

const fn infix(
    punctuator: Punctuator,
    operator: BinaryOperator,
    precedence: Precedence,
) -> OpInfo {
    OpInfo {
        punctuator,
        operator: InfixOperator::Binary(operator),
        precedence,
        associativity: Assoc::Left,
    }
}

const fn logical(
    punctuator: Punctuator,
    operator: LogicalOperator,
    precedence: Precedence,
) -> OpInfo {
    OpInfo {
        punctuator,
        operator: InfixOperator::Logical(operator),
        precedence,
        associativity: Assoc::Left,
    }
}

// Single source of truth for binary operator precedence + associativity.
pub const OPERATOR_TABLE: &[OpInfo] = &[
    logical(Punctuator::PipePipe, LogicalOperator::Or, Precedence::LogicalOr),
    logical(Punctuator::AmpAmp, LogicalOperator::And, Precedence::LogicalAnd),
    infix(Punctuator::Pipe, BinaryOperator::BitOr, Precedence::BitwiseOr),
    infix(Punctuator::Caret, BinaryOperator::BitXor, Precedence::BitwiseXor),
    infix(Punctuator::Amp, BinaryOperator::BitAnd, Precedence::BitwiseAnd),
    infix(Punctuator::EqEq, BinaryOperator::Equal, Precedence::Equality),
    infix(Punctuator::NotEq, BinaryOperator::NotEqual, Precedence::Equality),
    infix(Punctuator::StrictEq, BinaryOperator::StrictEqual, Precedence::Equality),
    infix(Punctuator::StrictNotEq, BinaryOperator::StrictNotEqual, Precedence::Equality),
    infix(Punctuator::Lt, BinaryOperator::Less, Precedence::Relational),
    infix(Punctuator::Gt, BinaryOperator::Greater, Precedence::Relational),
    infix(Punctuator::LtEq, BinaryOperator::LessEqual, Precedence::Relational),
    infix(Punctuator::GtEq, BinaryOperator::GreaterEqual, Precedence::Relational),
    infix(Punctuator::Shl, BinaryOperator::ShiftLeft, Precedence::Shift),
    infix(Punctuator::Shr, BinaryOperator::ShiftRight, Precedence::Shift),
    infix(Punctuator::UShr, BinaryOperator::UnsignedShiftRight, Precedence::Shift),
    infix(Punctuator::Plus, BinaryOperator::Add, Precedence::Additive),
    infix(Punctuator::Minus, BinaryOperator::Subtract, Precedence::Additive),
    infix(Punctuator::Star, BinaryOperator::Multiply, Precedence::Multiplicative),
    infix(Punctuator::Slash, BinaryOperator::Divide, Precedence::Multiplicative),
    infix(Punctuator::Percent, BinaryOperator::Modulo, Precedence::Multiplicative),
];

pub fn infix_op(punctuator: Punctuator) -> Option<&'static OpInfo> {
    OPERATOR_TABLE
        .iter()
        .find(|info| info.punctuator == punctuator)
}

pub fn prefix_op(punctuator: Punctuator) -> Option<UnaryOperator> {
    match punctuator {
        Punctuator::Minus => Some(UnaryOperator::Negate),
        Punctuator::Plus => Some(UnaryOperator::Plus),
        Punctuator::Bang => Some(UnaryOperator::Not),
        Punctuator::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}

pub fn assignment_op(punctuator: Punctuator) -> Option<AssignmentOperator> {
    match punctuator {
        Punctuator::Assign => Some(AssignmentOperator::Assign),
        Punctuator::PlusAssign => Some(AssignmentOperator::AddAssign),
        Punctuator::MinusAssign => Some(AssignmentOperator::SubtractAssign),
        Punctuator::StarAssign => Some(AssignmentOperator::MultiplyAssign),
        Punctuator::SlashAssign => Some(AssignmentOperator::DivideAssign),
        Punctuator::PercentAssign => Some(AssignmentOperator::ModuloAssign),
        _ => None,
    }
}

fn precedence_above(precedence: Precedence) -> Precedence {
    match precedence {
        Precedence::Lowest => Precedence::Sequence,
        Precedence::Sequence => Precedence::Assignment,
        Precedence::Assignment => Precedence::LogicalOr,
        Precedence::LogicalOr => Precedence::LogicalAnd,
        Precedence::LogicalAnd => Precedence::BitwiseOr,
        Precedence::BitwiseOr => Precedence::BitwiseXor,
        Precedence::BitwiseXor => Precedence::BitwiseAnd,
        Precedence::BitwiseAnd => Precedence::Equality,
        Precedence::Equality => Precedence::Relational,
        Precedence::Relational => Precedence::Shift,
        Precedence::Shift => Precedence::Additive,
        Precedence::Additive => Precedence::Multiplicative,
        Precedence::Multiplicative => Precedence::Unary,
        Precedence::Unary => Precedence::Postfix,
        Precedence::Postfix => Precedence::Postfix,
    }
}

/// Minimum precedence the right operand of `info` is parsed at.
pub fn rhs_precedence(info: &OpInfo) -> Precedence {
    match info.associativity {
        Assoc::Left => precedence_above(info.precedence),
        Assoc::Right => info.precedence,
    }
}
