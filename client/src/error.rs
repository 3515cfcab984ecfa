//! Error types shared by the REST client, the store and the views.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures become [`ApiError`]. When a failure reaches
//! the store it is reduced to an [`ErrorPayload`]: either the server's
//! field-keyed validation map or a plain message. Views render payloads
//! inline; they never see transport details.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// A `401` that was not (or could no longer be) recovered by refreshing.
    #[error("not authenticated")]
    Unauthorized(ErrorPayload),
    /// The refresh credential was missing or rejected; credentials were cleared.
    #[error("session expired")]
    SessionExpired,
    /// A `403` response.
    #[error("permission denied")]
    Forbidden(ErrorPayload),
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, payload: ErrorPayload },
    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    Body(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided payload, or `fallback` when the failure carried none.
    pub fn into_payload(self, fallback: &str) -> ErrorPayload {
        match self {
            Self::Unauthorized(payload) | Self::Forbidden(payload) | Self::Status { payload, .. }
                if !payload.is_empty() =>
            {
                payload
            }
            _ => ErrorPayload::Message(fallback.to_owned()),
        }
    }
}

/// Error body as stored in a slice and rendered by a view.
///
/// Validation failures arrive as `{"field": ["msg", ...]}`; other failures as
/// `{"detail": "..."}` or a bare string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message(String),
    Fields(BTreeMap<String, serde_json::Value>),
}

impl ErrorPayload {
    /// Parse a response body, falling back to `fallback` for empty or non-JSON bodies.
    pub fn from_body(body: &str, fallback: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) if !map.is_empty() => Self::Fields(map.into_iter().collect()),
            Ok(serde_json::Value::String(message)) if !message.is_empty() => Self::Message(message),
            _ => Self::Message(fallback.to_owned()),
        }
    }

    /// True for a body that carried nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Message(message) => message.is_empty(),
            Self::Fields(fields) => fields.is_empty(),
        }
    }

    /// `detail` or `error` entry of a field map, or the message itself.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Message(message) => Some(message.clone()),
            Self::Fields(fields) => ["detail", "error"]
                .iter()
                .find_map(|key| fields.get(*key))
                .map(render_value),
        }
    }

    /// Per-field lines, e.g. `("password", "too short, too common")`.
    pub fn field_lines(&self) -> Vec<(String, String)> {
        match self {
            Self::Message(_) => Vec::new(),
            Self::Fields(fields) => fields
                .iter()
                .map(|(key, value)| (key.clone(), render_value(value)))
                .collect(),
        }
    }

    /// Single-line rendering: the message, or `field: a, b | other: c`.
    pub fn display_message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Fields(_) => self
                .field_lines()
                .into_iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_message())
    }
}

impl From<&str> for ErrorPayload {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
