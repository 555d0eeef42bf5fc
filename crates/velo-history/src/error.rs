use std::fmt;

#[derive(Debug)]
pub enum HistoryError {
    Io(String),
    Serialize(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(msg) => write!(f, "history io error: {msg}"),
            HistoryError::Serialize(msg) => write!(f, "history serialize error: {msg}"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Serialize(err.to_string())
    }
}
