//! Inference request client for the velo pipeline.
//!
//! Sends one structured request per capture batch to a hosted multimodal
//! model — the fixed instruction prompt plus the ordered image payloads —
//! and enforces the two-string-field response contract. The network
//! backend sits behind the [`ModelBackend`] trait so tests can substitute
//! a stub that never touches the wire.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod result;

pub use backend::{GeminiBackend, ModelBackend};
pub use client::AnalysisClient;
pub use config::ClientConfig;
pub use error::InferError;
pub use prompt::ANALYSIS_PROMPT;
pub use result::AnalysisResult;
