// Client-side error types
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the API gateway
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response. `message` is the server-supplied text when the body had one.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl ClientError {
    /// Build an HTTP error from a status code and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = server_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ClientError::Http { status, message }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404))
    }

    /// Error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Http { status: 400, .. } => "BAD_REQUEST",
            ClientError::Http { status: 401, .. } => "UNAUTHORIZED",
            ClientError::Http { status: 403, .. } => "FORBIDDEN",
            ClientError::Http { status: 404, .. } => "NOT_FOUND",
            ClientError::Http { status: 409, .. } => "CONFLICT",
            ClientError::Http { status, .. } if *status >= 500 => "SERVER_ERROR",
            ClientError::Http { .. } => "HTTP_ERROR",
            ClientError::Network(_) => "NETWORK_ERROR",
            ClientError::Decode(_) => "INVALID_RESPONSE",
            ClientError::InvalidUrl(_) => "INVALID_URL",
            ClientError::Session(_) => "SESSION_ERROR",
        }
    }
}

/// Pull `error` (or `message`) out of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|key| match value.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

/// Token slot errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Token slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
