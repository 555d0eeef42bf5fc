use std::fmt;
use velo_capture::CaptureError;
use velo_infer::InferError;
use velo_source::SourceError;

/// The classified failures a run can end in.
///
/// Every internal failure is normalized to one of these before leaving
/// the pipeline; `Display` is a short message the caller can show
/// verbatim. All kinds are terminal for the run that produced them — a
/// failed run is restarted in full by a fresh user action, never retried
/// inside the pipeline.
#[derive(Debug)]
pub enum AnalysisError {
    /// Device or file inaccessible, or permission denied.
    SourceUnavailable(String),
    /// A per-frame seek did not complete within its bounded wait.
    SeekTimeout(String),
    /// A sample in the batch failed, or the run was cancelled; the batch
    /// was discarded.
    CaptureFailed(String),
    /// Capture produced zero frames; no request was made.
    EmptyInput,
    /// The model's reply was missing or mistyped a required field.
    MalformedResponse(String),
    /// Transport or service failure; no partial result.
    RequestFailed(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::SourceUnavailable(msg) => {
                write!(f, "media source unavailable: {msg}")
            }
            AnalysisError::SeekTimeout(msg) => write!(f, "seek timed out: {msg}"),
            AnalysisError::CaptureFailed(msg) => write!(f, "capture failed: {msg}"),
            AnalysisError::EmptyInput => write!(f, "no frames captured for analysis"),
            AnalysisError::MalformedResponse(msg) => {
                write!(f, "the model returned an unusable response: {msg}")
            }
            AnalysisError::RequestFailed(msg) => {
                write!(f, "the analysis request failed: {msg}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<CaptureError> for AnalysisError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::Cancelled => {
                AnalysisError::CaptureFailed("capture cancelled".to_string())
            }
            CaptureError::Source(SourceError::Unavailable(msg)) => {
                AnalysisError::SourceUnavailable(msg)
            }
            CaptureError::Source(SourceError::SeekTimeout(msg)) => {
                AnalysisError::SeekTimeout(msg)
            }
            CaptureError::Source(other) => AnalysisError::CaptureFailed(other.to_string()),
            CaptureError::Frame(other) => AnalysisError::CaptureFailed(other.to_string()),
        }
    }
}

impl From<InferError> for AnalysisError {
    fn from(err: InferError) -> Self {
        match err {
            InferError::EmptyInput => AnalysisError::EmptyInput,
            InferError::MalformedResponse(msg) => AnalysisError::MalformedResponse(msg),
            InferError::RequestFailed(msg) => AnalysisError::RequestFailed(msg),
            InferError::Config(msg) => AnalysisError::RequestFailed(msg),
        }
    }
}
