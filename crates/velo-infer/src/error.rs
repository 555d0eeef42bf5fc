use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The batch had zero frames; no request was made.
    EmptyInput,
    /// Transport or service failure: connection error, timeout, or a
    /// non-success status. No partial result is carried.
    RequestFailed(String),
    /// The upstream reply was missing a required field or mistyped.
    MalformedResponse(String),
    /// Client construction failed (e.g., no API key configured).
    Config(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::EmptyInput => write!(f, "no frames provided for analysis"),
            InferError::RequestFailed(msg) => write!(f, "request failed: {msg}"),
            InferError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            InferError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<reqwest::Error> for InferError {
    fn from(err: reqwest::Error) -> Self {
        InferError::RequestFailed(err.to_string())
    }
}
