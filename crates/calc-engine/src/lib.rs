//! calc engine: orchestrates the full evaluation pipeline.
//!
//! ```text
//! Expression text → Lexer → Parser → Evaluator (+ Environment) → Number
//! ```
//!
//! [`evaluate`] runs the pipeline against a caller-owned [`Environment`].
//! [`Session`] owns one behind a lock so it can be shared between threads,
//! and speaks the JSON request/response shape used by hosting layers.

mod config;
mod pipeline;
mod session;
mod wire;

pub use calc_eval::Environment;
pub use calc_types::{CalcError, ErrorCode, ErrorKind, Number, Result};
pub use config::EngineConfig;
pub use pipeline::{evaluate, evaluate_with, parse_source};
pub use session::Session;
pub use wire::{EvaluateRequest, EvaluateResponse};
