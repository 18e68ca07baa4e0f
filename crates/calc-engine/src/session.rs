//! A shared evaluation session.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use calc_eval::Environment;
use calc_types::{Number, Result};
use tracing::{debug, warn};

use crate::pipeline::parse_source;
use crate::wire::{EvaluateRequest, EvaluateResponse};
use crate::EngineConfig;

/// One environment plus the settings used to evaluate against it.
///
/// Lexing and parsing run without the lock. Evaluation holds the lock from
/// the first read to the last write, so concurrent callers never observe
/// a half-finished assignment and never lose an update.
#[derive(Debug, Default)]
pub struct Session {
    env: Mutex<Environment>,
    config: EngineConfig,
}

impl Session {
    /// Create a session with an empty environment and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            env: Mutex::new(Environment::new()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one expression against the session environment.
    pub fn evaluate(&self, source: &str) -> Result<Number> {
        let expr = parse_source(source, &self.config)?;
        let mut env = self.lock();
        let value = calc_eval::evaluate(&expr, &mut env)?;
        debug!(%source, %value, bindings = env.len(), "session evaluated expression");
        Ok(value)
    }

    /// Current value of one variable.
    pub fn get(&self, name: &str) -> Option<Number> {
        self.lock().get(name)
    }

    /// Snapshot of all bindings, ordered by name.
    pub fn variables(&self) -> BTreeMap<String, Number> {
        self.lock().bindings().clone()
    }

    /// Drop every binding.
    pub fn reset(&self) {
        self.lock().clear();
        debug!("session environment cleared");
    }

    /// Handle one JSON request body; returns the status and JSON response.
    pub fn handle_json(&self, body: &str) -> (u16, String) {
        let response = match serde_json::from_str::<EvaluateRequest>(body) {
            Ok(request) => EvaluateResponse::from_result(self.evaluate(&request.expression)),
            Err(e) => {
                warn!(error = %e, "rejected malformed request body");
                EvaluateResponse::invalid_request(e.to_string())
            }
        };
        (response.status(), response.to_json())
    }

    // A panic while the lock was held cannot leave a half-written binding:
    // the only write is a single map insert. The poisoned guard is reused.
    fn lock(&self) -> MutexGuard<'_, Environment> {
        self.env.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
