// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;

/// Message used when a failed response carries no usable `detail`.
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// The single failure type of the API layer.
///
/// Every network or service failure ends up here. Callers are expected to
/// show [`RequestError::message`] and nothing else; the status is kept for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    status: Option<u16>,
}

pub type Result<T> = std::result::Result<T, RequestError>;

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Build the error for a non-success response from its raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| detail_message(&v))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Self::new(message).with_status(status)
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        let err = Self::new(e.to_string());
        match e.status() {
            Some(s) => err.with_status(s.as_u16()),
            None => err,
        }
    }
}

// `detail` is a plain string for handled errors and a list of
// `{loc, msg, type}` entries for request validation failures.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
