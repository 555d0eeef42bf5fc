use crate::SourceError;
use std::time::Duration;
use velo_frame::Raster;

/// Whether a source can be positioned or only offers the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A device stream; only "now" can be sampled.
    Live,
    /// A stored clip whose frames can be rendered at arbitrary offsets.
    Seekable,
}

/// Async frame source for burst capture.
///
/// Implementations expose one capability: render the visual frame at a
/// source-time offset into an RGB raster. Seekable sources realize the
/// offset by seeking an independent decode of the same media, so the
/// caller-visible playback position is never disturbed; live sources
/// ignore the offset and return the current frame.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    fn kind(&self) -> SourceKind;

    /// Current playback position for seekable sources, elapsed capture
    /// time for live ones. The capture scheduler centers its sampling
    /// window on this.
    fn position(&self) -> Duration;

    /// Media length when known, `None` for live sources.
    fn duration(&self) -> Option<Duration>;

    /// Render the frame at `offset` into a raster.
    ///
    /// Seekable sources must complete the seek before rasterizing and
    /// bound the wait, failing with `SourceError::SeekTimeout` when the
    /// bound elapses.
    async fn sample_at(&mut self, offset: Duration) -> Result<Raster, SourceError>;

    /// Release the underlying device or decode resources.
    ///
    /// Idempotent. Further samples fail with `SourceError::Unavailable`.
    fn stop(&mut self);
}
