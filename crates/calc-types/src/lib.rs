//! Shared types for the calc pipeline.
//!
//! This crate defines the AST node types, numeric values, source spans,
//! and the error type used across the lexer, parser, and evaluator.

mod error;
mod number;
mod span;
pub mod ast;

pub use error::{CalcError, ErrorCode, ErrorKind};
pub use number::Number;
pub use span::Span;

/// Result type used throughout the calc pipeline.
pub type Result<T> = std::result::Result<T, CalcError>;
