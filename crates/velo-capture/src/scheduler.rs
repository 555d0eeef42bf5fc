use crate::{plan_offsets, CaptureConfig, CaptureError};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use velo_frame::{CaptureBatch, Frame, JPEG_MIME};
use velo_source::{FrameSource, SourceError, SourceKind};

/// Run one capture burst against `source`.
///
/// Live sources are sampled `frame_count` times with a real-time
/// `frame_interval` sleep before each sample, so the burst spans about
/// `N × interval` of wall clock. Seekable sources are sampled at the
/// planned window offsets (see [`plan_offsets`]) strictly in order, each
/// seek completing before the next begins.
///
/// Every sample is awaited under the config's `seek_timeout`; a sample
/// that does not complete in time fails the run with
/// `SourceError::SeekTimeout` even when the source enforces no bound of
/// its own.
///
/// Returns the complete batch of exactly `frame_count` frames, or fails
/// with the partial work discarded. Cancellation is honored between and
/// during samples; a cancelled run stops the source and yields
/// [`CaptureError::Cancelled`].
pub async fn capture_batch<S: FrameSource>(
    source: &mut S,
    config: &CaptureConfig,
    cancel: &CancellationToken,
) -> Result<CaptureBatch, CaptureError> {
    let offsets: Vec<Option<Duration>> = match source.kind() {
        SourceKind::Live => vec![None; config.frame_count()],
        SourceKind::Seekable => plan_offsets(source.position(), source.duration(), config)
            .into_iter()
            .map(Some)
            .collect(),
    };

    log::debug!(
        "capturing {} frames ({:?} source)",
        config.frame_count(),
        source.kind()
    );

    let mut frames = Vec::with_capacity(offsets.len());

    for (index, target) in offsets.into_iter().enumerate() {
        // Live spacing is realized in real time; seekable spacing is
        // already baked into the offsets.
        if target.is_none() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return cancelled(source),
                _ = sleep(config.frame_interval()) => {}
            }
        }

        let offset = target.unwrap_or_else(|| source.position());

        // The scheduler bounds every sample itself, so sources without
        // their own seek bound cannot hang the run.
        let sampled = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = timeout(config.seek_timeout(), source.sample_at(offset)) => Some(result),
        };

        let raster = match sampled {
            None => return cancelled(source),
            Some(Err(_)) => {
                return Err(CaptureError::Source(SourceError::SeekTimeout(format!(
                    "sample at {:.3}s did not complete within {:?}",
                    offset.as_secs_f64(),
                    config.seek_timeout()
                ))));
            }
            Some(Ok(result)) => result?,
        };

        let data = velo_frame::encode_jpeg(raster, config.jpeg_quality()).await?;
        frames.push(Frame::new(index, offset, JPEG_MIME, data));
    }

    Ok(CaptureBatch::new(frames)?)
}

fn cancelled<S: FrameSource>(source: &mut S) -> Result<CaptureBatch, CaptureError> {
    log::debug!("capture cancelled, stopping source");
    source.stop();
    Err(CaptureError::Cancelled)
}
