//! Frame sources for the velo capture pipeline.
//!
//! This crate provides the [`FrameSource`] trait — render the visual
//! frame at a source-time offset into a raster — with a seekable
//! video-file backend and a feature-gated live V4L2 backend.

pub mod clip;
pub mod config;
pub mod error;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use clip::ClipSource;
pub use config::SourceConfig;
pub use error::SourceError;
pub use traits::{FrameSource, SourceKind};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Source;
