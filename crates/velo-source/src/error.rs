use std::fmt;

#[derive(Debug)]
pub enum SourceError {
    Unavailable(String),
    SeekTimeout(String),
    Decode(String),
    Channel(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "source unavailable: {msg}"),
            SourceError::SeekTimeout(msg) => write!(f, "seek timeout: {msg}"),
            SourceError::Decode(msg) => write!(f, "decode error: {msg}"),
            SourceError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Unavailable(err.to_string())
    }
}

impl From<velo_frame::FrameError> for SourceError {
    fn from(err: velo_frame::FrameError) -> Self {
        SourceError::Decode(err.to_string())
    }
}
