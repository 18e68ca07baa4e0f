//! The lex → parse → evaluate pipeline.

use calc_eval::Environment;
use calc_lexer::tokenize;
use calc_parser::Parser;
use calc_types::ast::Expr;
use calc_types::{Number, Result};
use tracing::debug;

use crate::EngineConfig;

/// Lex and parse `source` into an expression tree.
pub fn parse_source(source: &str, config: &EngineConfig) -> Result<Expr> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed expression");
    Parser::with_max_depth(tokens, config.max_depth).parse()
}

/// Evaluate `source` against `env` with the default configuration.
///
/// The first failing stage aborts the pipeline. `env` is only written by a
/// successful assignment.
pub fn evaluate(source: &str, env: &mut Environment) -> Result<Number> {
    evaluate_with(source, env, &EngineConfig::default())
}

/// Evaluate `source` against `env` with an explicit configuration.
pub fn evaluate_with(source: &str, env: &mut Environment, config: &EngineConfig) -> Result<Number> {
    let expr = parse_source(source, config)?;
    let value = calc_eval::evaluate(&expr, env)?;
    debug!(%source, %value, "evaluated expression");
    Ok(value)
}
