use std::fmt;
use velo_frame::FrameError;
use velo_source::SourceError;

#[derive(Debug)]
pub enum CaptureError {
    /// The run was cancelled between or during samples; the source has
    /// been stopped and no batch was delivered.
    Cancelled,
    /// A sample failed; the partial batch was discarded.
    Source(SourceError),
    /// Encoding or batch assembly failed; the partial batch was discarded.
    Frame(FrameError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Cancelled => write!(f, "capture cancelled"),
            CaptureError::Source(err) => write!(f, "capture failed: {err}"),
            CaptureError::Frame(err) => write!(f, "capture failed: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Cancelled => None,
            CaptureError::Source(err) => Some(err),
            CaptureError::Frame(err) => Some(err),
        }
    }
}

impl From<SourceError> for CaptureError {
    fn from(err: SourceError) -> Self {
        CaptureError::Source(err)
    }
}

impl From<FrameError> for CaptureError {
    fn from(err: FrameError) -> Self {
        CaptureError::Frame(err)
    }
}
