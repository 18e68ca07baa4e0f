//! JSON request/response shapes for hosting layers.
//!
//! Request: `{"expression": "x = 3 * 4"}`
//!
//! Response on success: `{"result": 12}`.
//! Response on failure: `{"error": "...", "kind": "syntax", "code": "E201"}`;
//! `kind` and `code` are absent when the request itself could not be read.

use calc_types::{CalcError, ErrorKind, Number, Result};
use serde::{Deserialize, Serialize};

/// An evaluation request. A missing `expression` is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub expression: String,
}

/// The outcome of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluateResponse {
    Ok {
        result: Number,
    },
    Err {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<ErrorKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },
}

impl EvaluateResponse {
    pub fn from_result(result: Result<Number>) -> Self {
        match result {
            Ok(result) => Self::Ok { result },
            Err(err) => err.into(),
        }
    }

    /// A response for a body that is not a valid request.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::Err {
            error: format!("invalid request: {}", reason.into()),
            kind: None,
            code: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// HTTP-style status: 200 on success, 400 on any failure.
    pub fn status(&self) -> u16 {
        if self.is_ok() {
            200
        } else {
            400
        }
    }

    /// Serialize to a JSON string. Never fails: a serialization error is
    /// reported as an error envelope.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("serialization error: {e}") }).to_string()
        })
    }
}

impl From<CalcError> for EvaluateResponse {
    fn from(err: CalcError) -> Self {
        Self::Err {
            error: err.to_string(),
            kind: Some(err.kind),
            code: Some(err.code.to_string()),
        }
    }
}
