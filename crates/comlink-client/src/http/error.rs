/*
[INPUT]:  Error sources (HTTP transport, response bodies, serialization, config)
[OUTPUT]: Structured error types with the remote service's message/code promoted
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing normalization rules
*/

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Stable codes attached to transport failures
pub const CODE_STATUS: &str = "ERR_STATUS";
pub const CODE_CONNECT: &str = "ERR_CONNECT";
pub const CODE_TIMEOUT: &str = "ERR_TIMEOUT";
pub const CODE_DECODE: &str = "ERR_DECODE";
pub const CODE_REQUEST: &str = "ERR_REQUEST";

/// Failure raised while talking to a remote host.
///
/// Carries whatever the transport knew: a human readable message, a stable
/// code, the HTTP status and the parsed response body when one was received.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub code: Option<String>,
    pub status: Option<StatusCode>,
    pub body: Option<Value>,
    #[source]
    pub source: Option<reqwest::Error>,
}

impl TransportError {
    /// Build from a reqwest failure (connect, timeout, decode, ...)
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            CODE_TIMEOUT
        } else if err.is_connect() {
            CODE_CONNECT
        } else if err.is_decode() {
            CODE_DECODE
        } else if err.is_status() {
            CODE_STATUS
        } else {
            CODE_REQUEST
        };

        Self {
            message: err.to_string(),
            code: Some(code.to_string()),
            status: err.status(),
            body: None,
            source: Some(err),
        }
    }

    /// Build from a non-2xx response. The body is kept when it parses as JSON.
    pub fn from_status(status: StatusCode, body: Option<Value>) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        Self {
            message: format!("Response code {} ({reason})", status.as_u16()),
            code: Some(CODE_STATUS.to_string()),
            status: Some(status),
            body,
            source: None,
        }
    }

    /// Build from a 2xx response whose body is not the expected JSON
    pub fn malformed(status: StatusCode, err: &serde_json::Error) -> Self {
        Self {
            message: format!("Malformed JSON response: {err}"),
            code: Some(CODE_DECODE.to_string()),
            status: Some(status),
            body: None,
            source: None,
        }
    }

    /// The response body, if it is a JSON object
    fn structured_body(&self) -> Option<&serde_json::Map<String, Value>> {
        self.body.as_ref().and_then(Value::as_object)
    }
}

/// A transport failure rewritten with the remote service's own message/code.
///
/// `got_message`/`got_code` hold the transport values that were replaced;
/// the untouched transport error is kept in `transport`.
#[derive(Debug)]
pub struct DomainError {
    pub message: String,
    pub code: Option<String>,
    pub got_message: Option<String>,
    pub got_code: Option<String>,
    pub transport: TransportError,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (code {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.transport)
    }
}

/// Main error type for the comlink client
#[derive(Error, Debug)]
pub enum ComlinkError {
    /// Primary API failure without a structured body
    #[error("HTTP request failed: {0}")]
    Transport(TransportError),

    /// Primary API failure carrying the service's own message/code
    #[error("API error: {0}")]
    Api(DomainError),

    /// Stats service failure, never normalized
    #[error("Stats request failed: {0}")]
    Stats(TransportError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ComlinkError {
    /// Promote a structured response body's `message`/`code` to the top level.
    ///
    /// Only the `Transport` variant is rewritten; every other variant passes
    /// through, which makes this idempotent.
    pub fn normalize(self) -> Self {
        match self {
            ComlinkError::Transport(err) => normalize(err),
            other => other,
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ComlinkError::Transport(err) | ComlinkError::Stats(err) => err.status,
            ComlinkError::Api(err) => err.transport.status,
            _ => None,
        }
    }

    /// Check if the error carries the remote service's own message/code
    pub fn is_domain_error(&self) -> bool {
        matches!(self, ComlinkError::Api(_))
    }
}

/// Rewrite a primary API transport failure into a domain error when its body
/// is a JSON object with `message` and/or `code`.
pub fn normalize(err: TransportError) -> ComlinkError {
    let (body_message, body_code) = match err.structured_body() {
        Some(body) => (body_field(body, "message"), body_field(body, "code")),
        None => (None, None),
    };

    if body_message.is_none() && body_code.is_none() {
        return ComlinkError::Transport(err);
    }

    let (message, got_message) = match body_message {
        Some(message) => (message, Some(err.message.clone())),
        None => (err.message.clone(), None),
    };
    let (code, got_code) = match body_code {
        Some(code) => (Some(code), err.code.clone()),
        None => (err.code.clone(), None),
    };

    ComlinkError::Api(DomainError {
        message,
        code,
        got_message,
        got_code,
        transport: err,
    })
}

/// A `null` field counts as absent
fn body_field(body: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    body.get(key).filter(|value| !value.is_null()).map(value_to_string)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result type alias for comlink operations
pub type Result<T> = std::result::Result<T, ComlinkError>;
