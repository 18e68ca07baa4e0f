//! Numeric semantics of the four binary operators.
//!
//! - `+ - *` on two integers use checked `i64` arithmetic; any float operand
//!   promotes both sides to `f64`.
//! - `/` is true division: the result is always a float (`4/2` is `2.0`,
//!   `1/2` is `0.5`). A zero divisor is rejected before dividing.
//! - Float results must be finite.

use calc_types::ast::BinOp;
use calc_types::Number;

/// Why an operation could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithFault {
    DivisionByZero,
    Overflow,
}

/// Apply `op` to two operands.
pub fn apply(op: BinOp, left: Number, right: Number) -> Result<Number, ArithFault> {
    match op {
        BinOp::Add => promote(left, right, i64::checked_add, |a, b| a + b),
        BinOp::Sub => promote(left, right, i64::checked_sub, |a, b| a - b),
        BinOp::Mul => promote(left, right, i64::checked_mul, |a, b| a * b),
        BinOp::Div => divide(left, right),
    }
}

fn promote(
    left: Number,
    right: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, ArithFault> {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => {
            int_op(a, b).map(Number::Int).ok_or(ArithFault::Overflow)
        }
        _ => finite(float_op(left.as_f64(), right.as_f64())),
    }
}

fn divide(left: Number, right: Number) -> Result<Number, ArithFault> {
    if right.is_zero() {
        return Err(ArithFault::DivisionByZero);
    }
    finite(left.as_f64() / right.as_f64())
}

fn finite(x: f64) -> Result<Number, ArithFault> {
    if x.is_finite() {
        Ok(Number::Float(x))
    } else {
        Err(ArithFault::Overflow)
    }
}
