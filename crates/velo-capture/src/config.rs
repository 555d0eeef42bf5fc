use std::time::Duration;

/// Configuration for one capture burst.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    frame_count: usize,
    frame_interval: Duration,
    jpeg_quality: u8,
    seek_timeout: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_count: 4,
            frame_interval: Duration::from_millis(50),
            jpeg_quality: 80,
            seek_timeout: Duration::from_secs(5),
        }
    }
}

impl CaptureConfig {
    /// Set the number of frames per batch.
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set the source-time spacing between consecutive frames.
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Set the JPEG quality (1–100) frames are encoded at.
    pub fn with_jpeg_quality(mut self, jpeg_quality: u8) -> Self {
        self.jpeg_quality = jpeg_quality;
        self
    }

    /// Set the bounded wait around each per-frame seek.
    pub fn with_seek_timeout(mut self, seek_timeout: Duration) -> Self {
        self.seek_timeout = seek_timeout;
        self
    }

    // Getters
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    pub fn seek_timeout(&self) -> Duration {
        self.seek_timeout
    }
}
