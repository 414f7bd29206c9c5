use std::{cmp::Ordering, mem};

use crate::runtime::{
    gc::{GcHandle, GcHeap},
    value::Value,
};
use crate::syntax::ast::BinaryOperator;

/// `<`, `>`, `<=`, `>=`: two strings compare lexicographically, anything
/// else numerically. A failed coercion yields NaN.
pub(super) fn compare(operator: BinaryOperator, left: &Value, right: &Value) -> Value {
    let ordering = match (left, right) {
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        _ => match (left.to_number(), right.to_number()) {
            (Ok(l), Ok(r)) => l.partial_cmp(&r),
            _ => return Value::NaN,
        },
    };
    let Some(ordering) = ordering else {
        return Value::Boolean(false);
    };
    let result = match operator {
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        _ => false,
    };
    Value::Boolean(result)
}

/// `==`: strings by text, references by identity, Undefined only equals
/// Undefined or Null, NaN equals nothing, everything else numerically.
pub(super) fn loose_equals(left: GcHandle, right: GcHandle, heap: &GcHeap) -> bool {
    let (l, r) = (heap.get(left), heap.get(right));
    match (l, r) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::NaN, _) | (_, Value::NaN) => false,
        (Value::Undefined, other) | (other, Value::Undefined) => {
            matches!(other, Value::Undefined | Value::Null)
        }
        _ if l.is_reference() || r.is_reference() => left == right,
        _ => match (l.to_number(), r.to_number()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        },
    }
}

/// `===`: same kind and `==`.
pub(super) fn strict_equals(left: GcHandle, right: GcHandle, heap: &GcHeap) -> bool {
    let (l, r) = (heap.get(left), heap.get(right));
    mem::discriminant(l) == mem::discriminant(r) && loose_equals(left, right, heap)
}
