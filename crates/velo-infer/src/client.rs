use crate::{AnalysisResult, InferError, ModelBackend, ANALYSIS_PROMPT};
use velo_frame::CaptureBatch;

/// Validates batches going out and model replies coming back.
///
/// One backend call per `analyze` invocation, no internal retries; retry
/// policy, if any, belongs to the caller.
#[derive(Debug)]
pub struct AnalysisClient<B: ModelBackend> {
    backend: B,
}

impl<B: ModelBackend> AnalysisClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Submit a capture batch and parse the model's structured reply.
    ///
    /// # Errors
    ///
    /// - `InferError::EmptyInput` for a zero-frame batch; the backend is
    ///   not called.
    /// - `InferError::MalformedResponse` when the reply is not a JSON
    ///   object carrying string `exitVelocity` and `analysis` fields.
    /// - `InferError::RequestFailed` passed through from the backend.
    pub async fn analyze(&self, batch: &CaptureBatch) -> Result<AnalysisResult, InferError> {
        if batch.is_empty() {
            return Err(InferError::EmptyInput);
        }

        let text = self.backend.generate(ANALYSIS_PROMPT, batch).await?;
        parse_result(&text)
    }
}

fn parse_result(text: &str) -> Result<AnalysisResult, InferError> {
    let value: serde_json::Value = serde_json::from_str(text.trim())
        .map_err(|e| InferError::MalformedResponse(format!("reply is not JSON: {e}")))?;

    // Field-by-field rather than a derive so a missing field and a
    // mistyped field both report which one was at fault
    let exit_velocity = require_string(&value, "exitVelocity")?;
    let analysis = require_string(&value, "analysis")?;

    Ok(AnalysisResult {
        exit_velocity,
        analysis,
    })
}

fn require_string(value: &serde_json::Value, field: &str) -> Result<String, InferError> {
    match value.get(field) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(InferError::MalformedResponse(format!(
            "field {field} is not a string"
        ))),
        None => Err(InferError::MalformedResponse(format!(
            "missing field {field}"
        ))),
    }
}
