use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value: the result of every evaluation.
///
/// The representation follows the literal form: `3` is an integer, `3.0` a
/// float. Arithmetic promotes to float when either operand is a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` for `0`, `0.0` and `-0.0`.
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // Debug formatting keeps the trailing `.0` on whole floats.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}
