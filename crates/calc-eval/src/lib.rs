//! calc tree-walking evaluator.
//!
//! Evaluates a parsed expression tree against an [`Environment`] of
//! variable bindings. The environment is an explicit value owned by the
//! caller, so its lifetime and sharing policy are decided where it is
//! constructed.

pub mod arith;
pub mod env;
pub mod error;
pub mod evaluator;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
