use serde::{Deserialize, Serialize};

/// The model's answer: an exit-velocity estimate and a one-line rationale.
///
/// Both fields are mandatory. The velocity is free-form text because the
/// model may answer something non-numeric ("unknown"); consumers must
/// tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "exitVelocity")]
    pub exit_velocity: String,
    pub analysis: String,
}
