use crate::{FrameSource, SourceConfig, SourceError, SourceKind};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};
use velo_frame::Raster;

type SampleResult = Result<Vec<u8>, SourceError>;

/// Live source backed by a V4L2 camera in MJPEG mode.
///
/// A background thread streams JPEG frames into a small channel; each
/// sample drains whatever queued while idle and decodes the next fresh
/// frame, so the sampled content is always "now".
pub struct V4l2Source {
    config: SourceConfig,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<SampleResult>>,
    thread_handle: Option<JoinHandle<()>>,
    started_at: Option<Instant>,
    stopped: bool,
}

impl std::fmt::Debug for V4l2Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Source")
            .field("config", &self.config)
            .field("device", &self.device.is_some())
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .field("stopped", &self.stopped)
            .finish()
    }
}

impl V4l2Source {
    /// Open the camera at `config.device()` in MJPEG mode.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if:
    /// - The device cannot be opened
    /// - MJPEG format is not supported
    /// - Format or parameter setting fails
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let device = Device::with_path(config.device())?;

        // Set MJPEG format at requested resolution
        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        format = Capture::set_format(&device, &format)?;

        // Verify the device accepted MJPEG (it might change to a different format)
        if format.fourcc != FourCC::new(b"MJPG") {
            return Err(SourceError::Unavailable(
                "MJPEG format not supported by device".to_string(),
            ));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        v4l::video::Capture::set_params(&device, &params)?;

        Ok(Self {
            config,
            device: Some(device),
            receiver: None,
            thread_handle: None,
            started_at: None,
            stopped: false,
        })
    }

    /// Start the capture thread if not already running.
    fn ensure_started(&mut self) -> Result<(), SourceError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| SourceError::Unavailable("device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let (tx, rx) = mpsc::channel(buffer_count.max(1));

        let handle = thread::spawn(move || {
            Self::capture_loop(device, tx, buffer_count);
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);
        self.started_at = Some(Instant::now());
        log::debug!("v4l2 capture thread started");

        Ok(())
    }

    /// Background thread capture loop.
    ///
    /// Streams MJPEG frames into the channel with `try_send`, dropping
    /// frames when the consumer lags rather than blocking the stream.
    fn capture_loop(device: Device, tx: mpsc::Sender<SampleResult>, buffer_count: usize) {
        let mut stream = match MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)
        {
            Ok(stream) => stream,
            Err(e) => {
                let _ = tx.blocking_send(Err(SourceError::Unavailable(e.to_string())));
                return;
            }
        };

        loop {
            let (frame_data, _metadata) = match CaptureStream::next(&mut stream) {
                Ok(frame) => frame,
                Err(e) => {
                    let _ = tx.blocking_send(Err(SourceError::Channel(e.to_string())));
                    return;
                }
            };

            // Buffer is only valid until the next call; copy it out.
            let jpeg = frame_data.to_vec();

            match tx.try_send(Ok(jpeg)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    // Consumer not sampling right now — drop the frame.
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    // Receiver dropped — exit thread.
                    break;
                }
            }
        }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl FrameSource for V4l2Source {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    fn position(&self) -> Duration {
        self.started_at
            .map(|started| started.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        None
    }

    async fn sample_at(&mut self, _offset: Duration) -> Result<Raster, SourceError> {
        if self.stopped {
            return Err(SourceError::Unavailable("camera stopped".to_string()));
        }

        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| SourceError::Channel("receiver not initialized".to_string()))?;

        // Drain frames queued while idle so the sample reflects "now".
        drain_stale(receiver)?;

        let jpeg = receiver
            .recv()
            .await
            .ok_or_else(|| SourceError::Channel("capture thread terminated".to_string()))??;

        Ok(velo_frame::decode_jpeg(&jpeg).await?)
    }

    fn stop(&mut self) {
        self.stopped = true;

        // Dropping the receiver signals the thread to stop.
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for V4l2Source {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Discard stale frames queued while the consumer was idle. An error the
/// capture thread queued is returned, not discarded with them.
fn drain_stale(receiver: &mut mpsc::Receiver<SampleResult>) -> Result<(), SourceError> {
    loop {
        match receiver.try_recv() {
            Ok(Ok(_stale)) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_stale_discards_queued_frames() {
        let (tx, mut rx) = mpsc::channel::<SampleResult>(4);
        tx.try_send(Ok(vec![1])).unwrap();
        tx.try_send(Ok(vec![2])).unwrap();

        assert!(drain_stale(&mut rx).is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drain_stale_surfaces_queued_error() {
        let (tx, mut rx) = mpsc::channel::<SampleResult>(4);
        tx.try_send(Ok(vec![1])).unwrap();
        tx.try_send(Err(SourceError::Unavailable("stream died".to_string())))
            .unwrap();

        match drain_stale(&mut rx).unwrap_err() {
            SourceError::Unavailable(msg) => assert!(msg.contains("stream died")),
            other => panic!("Expected SourceError::Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_drain_stale_empty_channel() {
        let (_tx, mut rx) = mpsc::channel::<SampleResult>(4);
        assert!(drain_stale(&mut rx).is_ok());
    }
}
