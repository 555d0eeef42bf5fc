//! Pipeline facade: capture a burst from a frame source, send it to the
//! model, surface one of two outcomes.
//!
//! Callers see a single operation — [`Analyzer::run`] — returning either
//! an [`AnalysisResult`] or a classified [`AnalysisError`]. Each run is
//! one linear pass, Capturing then Requesting, with a single terminal
//! state and no internal retries.
//!
//! [`AnalysisResult`]: velo_infer::AnalysisResult

pub mod analyzer;
pub mod error;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
