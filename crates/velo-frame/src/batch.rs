use crate::{Frame, FrameError};

/// The ordered frames of exactly one capture invocation.
///
/// A batch is delivered complete or not at all: the constructor rejects
/// out-of-order frames, and the capture scheduler never hands a partial
/// batch downstream. Consumed once by the inference client, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureBatch {
    frames: Vec<Frame>,
}

impl CaptureBatch {
    /// Assemble a batch from frames in capture order.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::Batch` if frame indices are not exactly
    /// `0..frames.len()` or if capture offsets ever decrease.
    pub fn new(frames: Vec<Frame>) -> Result<Self, FrameError> {
        for (position, frame) in frames.iter().enumerate() {
            if frame.index() != position {
                return Err(FrameError::Batch(format!(
                    "frame index {} at position {position}",
                    frame.index()
                )));
            }

            if position > 0 && frame.offset() < frames[position - 1].offset() {
                return Err(FrameError::Batch(format!(
                    "offset decreased at frame {position}: {:?} after {:?}",
                    frame.offset(),
                    frames[position - 1].offset()
                )));
            }
        }

        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}
