use std::fmt;

/// Fallback message when a failed response carries no `message` field.
pub const FALLBACK_MESSAGE: &str = "API Error";

/// Any failure talking to the results API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection, TLS or timeout failure before a response arrived.
    Transport(String),
    /// Non-success HTTP status; `message` comes from the response body.
    Status { status: u16, message: String },
    /// A success response whose body did not match the expected shape.
    Decode(String),
    /// A success response that explicitly declined the request (`success` not true).
    Rejected(String),
}

impl ApiError {
    /// Human-readable message suitable for an alert.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(m) | ApiError::Decode(m) | ApiError::Rejected(m) => m,
            ApiError::Status { message, .. } => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Network error: {e}"),
            ApiError::Status { status, message } => write!(f, "API error ({status}): {message}"),
            ApiError::Decode(e) => write!(f, "Unexpected API response: {e}"),
            ApiError::Rejected(e) => write!(f, "Request rejected: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}
