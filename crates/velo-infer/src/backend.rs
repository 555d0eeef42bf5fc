use crate::{ClientConfig, InferError};
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use velo_frame::CaptureBatch;

/// The network seam of the pipeline.
///
/// `generate` submits the prompt and the ordered image payloads in one
/// request and returns the model's raw text reply. Tests substitute a
/// stub implementation; nothing else in the pipeline touches the wire.
#[allow(async_fn_in_trait)]
pub trait ModelBackend {
    async fn generate(&self, prompt: &str, batch: &CaptureBatch) -> Result<String, InferError>;
}

/// Backend for the Gemini `generateContent` REST endpoint.
pub struct GeminiBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiBackend {
    /// # Errors
    ///
    /// Returns `InferError::Config` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, InferError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| InferError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url(),
            self.config.model()
        )
    }
}

impl ModelBackend for GeminiBackend {
    async fn generate(&self, prompt: &str, batch: &CaptureBatch) -> Result<String, InferError> {
        let body = build_request_body(prompt, batch);

        log::debug!(
            "requesting {} with {} image parts",
            self.endpoint(),
            batch.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InferError::RequestFailed(format!(
                "status {status}: {}",
                detail.trim()
            )));
        }

        let envelope: ResponseEnvelope = response.json().await?;
        extract_text(envelope)
    }
}

/// Build the `generateContent` request body: the instruction text part,
/// then one base64 `inlineData` part per frame in batch order, and the
/// two-field JSON response schema the model must fill.
fn build_request_body(prompt: &str, batch: &CaptureBatch) -> serde_json::Value {
    let mut parts = vec![json!({ "text": prompt })];

    for frame in batch.frames() {
        parts.push(json!({
            "inlineData": {
                "mimeType": frame.mime(),
                "data": base64::engine::general_purpose::STANDARD.encode(frame.data()),
            }
        }));
    }

    json!({
        "contents": [{ "parts": parts }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "exitVelocity": {
                        "type": "STRING",
                        "description": "The estimated exit velocity in MPH, e.g., \"105.5\"",
                    },
                    "analysis": {
                        "type": "STRING",
                        "description": "A brief, one-sentence analysis explaining the reasoning behind the velocity estimate.",
                    },
                },
                "required": ["exitVelocity", "analysis"],
            },
        },
    })
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull the concatenated candidate text out of the response envelope.
/// An envelope with no text is an upstream reply missing its content,
/// not a transport fault.
fn extract_text(envelope: ResponseEnvelope) -> Result<String, InferError> {
    let text: String = envelope
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        return Err(InferError::MalformedResponse(
            "no candidate text in response".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use velo_frame::{Frame, JPEG_MIME};

    fn batch_of(count: usize) -> CaptureBatch {
        let frames = (0..count)
            .map(|i| {
                Frame::new(
                    i,
                    Duration::from_millis(50 * i as u64),
                    JPEG_MIME,
                    vec![i as u8; 4],
                )
            })
            .collect();
        CaptureBatch::new(frames).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("estimate it", &batch_of(2));

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 3);
        assert_eq!(parts[0]["text"], "estimate it");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(
            parts[1]["inlineData"]["data"],
            base64::engine::general_purpose::STANDARD.encode([0u8; 4])
        );

        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(schema["required"], serde_json::json!(["exitVelocity", "analysis"]));
        assert_eq!(schema["properties"]["exitVelocity"]["type"], "STRING");
        assert_eq!(schema["properties"]["analysis"]["type"], "STRING");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_image_parts_preserve_batch_order() {
        let body = build_request_body("p", &batch_of(3));
        let parts = body["contents"][0]["parts"].as_array().unwrap();

        for (i, part) in parts.iter().skip(1).enumerate() {
            assert_eq!(
                part["inlineData"]["data"],
                base64::engine::general_purpose::STANDARD.encode([i as u8; 4])
            );
        }
    }

    #[test]
    fn test_extract_text_from_envelope() {
        let envelope: ResponseEnvelope = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"exitVelocity\":\"98\"}"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(envelope).unwrap(), "{\"exitVelocity\":\"98\"}");
    }

    #[test]
    fn test_empty_envelope_is_malformed() {
        let envelope: ResponseEnvelope = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();

        assert!(matches!(
            extract_text(envelope),
            Err(InferError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_envelope_without_candidates_key_is_malformed() {
        let envelope: ResponseEnvelope = serde_json::from_str("{}").unwrap();

        assert!(matches!(
            extract_text(envelope),
            Err(InferError::MalformedResponse(_))
        ));
    }
}
