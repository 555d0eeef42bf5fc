//! Capture scheduler for the velo pipeline.
//!
//! Drives the fixed-count, fixed-interval burst: plans the sampling
//! window, takes N sequential samples from a [`FrameSource`], JPEG-encodes
//! each raster, and assembles the complete, ordered [`CaptureBatch`] — or
//! fails with no partial batch. Holds no state across invocations.
//!
//! [`FrameSource`]: velo_source::FrameSource
//! [`CaptureBatch`]: velo_frame::CaptureBatch

pub mod config;
pub mod error;
pub mod plan;
pub mod scheduler;

pub use config::CaptureConfig;
pub use error::CaptureError;
pub use plan::plan_offsets;
pub use scheduler::capture_batch;
