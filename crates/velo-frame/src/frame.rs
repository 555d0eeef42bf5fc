use std::fmt;
use std::time::Duration;

/// MIME type of frames produced by the built-in sources.
pub const JPEG_MIME: &str = "image/jpeg";

/// An encoded still image tagged with its position in a capture sequence.
///
/// `index` is the ordinal within the batch (0-based); `offset` is the
/// source-time position the frame was sampled at.
#[derive(Clone, PartialEq)]
pub struct Frame {
    index: usize,
    offset: Duration,
    mime: String,
    data: Vec<u8>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("index", &self.index)
            .field("offset", &self.offset)
            .field("mime", &self.mime)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Frame {
    pub fn new(index: usize, offset: Duration, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            index,
            offset,
            mime: mime.into(),
            data,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
