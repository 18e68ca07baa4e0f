//! calc evaluator as a WASM module for browser environments.
//!
//! This crate exposes the evaluation pipeline via `wasm-bindgen`. Each WASM
//! instance owns one [`Session`], so variables persist across calls until
//! [`reset`] is called or the instance is dropped.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { evaluate } from 'calc-wasm';
//!
//! await init();
//!
//! evaluate("x = 3 * 4");   // '{"result":12}'
//! evaluate("x / 0");       // '{"error":"arithmetic error at col 1: division by zero", ...}'
//! ```

use calc_engine::{EvaluateResponse, Session};
use wasm_bindgen::prelude::*;

thread_local! {
    static SESSION: Session = Session::new();
}

/// Evaluate one expression against the instance's session.
///
/// Returns a JSON string: `{"result": <number>}` on success, or
/// `{"error": "...", "kind": "...", "code": "..."}` on failure.
#[wasm_bindgen]
pub fn evaluate(expression: &str) -> String {
    SESSION.with(|session| EvaluateResponse::from_result(session.evaluate(expression)).to_json())
}

/// Handle a JSON request body of the form `{"expression": "..."}`.
///
/// Returns the JSON response; malformed bodies produce an error envelope.
#[wasm_bindgen]
pub fn handle_request(body: &str) -> String {
    SESSION.with(|session| session.handle_json(body).1)
}

/// Return the current variable bindings as a JSON object.
#[wasm_bindgen]
pub fn variables() -> String {
    SESSION.with(|session| {
        serde_json::to_string(&session.variables()).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("serialization error: {e}") }).to_string()
        })
    })
}

/// Clear all variable bindings.
#[wasm_bindgen]
pub fn reset() {
    SESSION.with(Session::reset);
}

/// Return the evaluator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
