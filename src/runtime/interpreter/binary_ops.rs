use crate::runtime::{
    error::RuntimeError,
    gc::{GcHandle, GcHeap},
    number::to_int32,
    scope::ScopeId,
    value::Value,
};
use crate::syntax::ast::{BinaryOperator, Expression, LogicalOperator};

use super::{Interpreter, comparison_ops};

impl Interpreter {
    pub(super) fn evaluate_binary(
        &mut self,
        operator: BinaryOperator,
        left: &Expression,
        right: &Expression,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let mark = self.root_mark();
        let left = self.evaluate(left, scope)?;
        self.protect(left);
        let right = self.evaluate(right, scope);
        self.release(mark);
        Ok(self.apply_binary(operator, left, right?))
    }

    /// `&&` and `||` evaluate the right operand only when the left one does
    /// not decide the result.
    pub(super) fn evaluate_logical(
        &mut self,
        operator: LogicalOperator,
        left: &Expression,
        right: &Expression,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let left = self.evaluate(left, scope)?;
        let truthy = self.heap.get(left).is_truthy();
        match (operator, truthy) {
            (LogicalOperator::And, false) | (LogicalOperator::Or, true) => Ok(left),
            _ => self.evaluate(right, scope),
        }
    }

    /// Applies a binary operator to two evaluated operands.
    pub(crate) fn apply_binary(
        &mut self,
        operator: BinaryOperator,
        left: GcHandle,
        right: GcHandle,
    ) -> GcHandle {
        let value = binary_value(operator, left, right, &self.heap);
        self.alloc(value)
    }
}

fn binary_value(operator: BinaryOperator, left: GcHandle, right: GcHandle, heap: &GcHeap) -> Value {
    let (l, r) = (heap.get(left), heap.get(right));
    match operator {
        BinaryOperator::Add => add(l, r, heap),
        BinaryOperator::Subtract => arithmetic(l, r, |a, b| a - b),
        BinaryOperator::Multiply => arithmetic(l, r, |a, b| a * b),
        BinaryOperator::Divide => arithmetic(l, r, |a, b| a / b),
        BinaryOperator::Modulo => arithmetic(l, r, |a, b| a % b),
        BinaryOperator::BitAnd => bitwise(l, r, |a, b| f64::from(a & b)),
        BinaryOperator::BitOr => bitwise(l, r, |a, b| f64::from(a | b)),
        BinaryOperator::BitXor => bitwise(l, r, |a, b| f64::from(a ^ b)),
        BinaryOperator::ShiftLeft => bitwise(l, r, |a, b| f64::from(a.wrapping_shl(b as u32 & 31))),
        BinaryOperator::ShiftRight => {
            bitwise(l, r, |a, b| f64::from(a.wrapping_shr(b as u32 & 31)))
        }
        BinaryOperator::UnsignedShiftRight => {
            bitwise(l, r, |a, b| f64::from((a as u32).wrapping_shr(b as u32 & 31)))
        }
        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => comparison_ops::compare(operator, l, r),
        BinaryOperator::Equal => Value::Boolean(comparison_ops::loose_equals(left, right, heap)),
        BinaryOperator::NotEqual => Value::Boolean(!comparison_ops::loose_equals(left, right, heap)),
        BinaryOperator::StrictEqual => {
            Value::Boolean(comparison_ops::strict_equals(left, right, heap))
        }
        BinaryOperator::StrictNotEqual => {
            Value::Boolean(!comparison_ops::strict_equals(left, right, heap))
        }
    }
}

/// String concatenation when either side is a string, numeric addition
/// otherwise.
fn add(left: &Value, right: &Value, heap: &GcHeap) -> Value {
    if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) {
        return match (left.to_display_string(heap), right.to_display_string(heap)) {
            (Ok(l), Ok(r)) => Value::string(l + &r),
            _ => Value::NaN,
        };
    }
    arithmetic(left, right, |a, b| a + b)
}

fn arithmetic(left: &Value, right: &Value, op: impl Fn(f64, f64) -> f64) -> Value {
    match (left.to_number(), right.to_number()) {
        (Ok(l), Ok(r)) => Value::number(op(l, r)),
        _ => Value::NaN,
    }
}

fn bitwise(left: &Value, right: &Value, op: impl Fn(i32, i32) -> f64) -> Value {
    match (left.to_number(), right.to_number()) {
        (Ok(l), Ok(r)) => Value::Numeric(op(to_int32(l), to_int32(r))),
        _ => Value::NaN,
    }
}
