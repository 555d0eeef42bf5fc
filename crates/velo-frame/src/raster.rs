use crate::FrameError;
use std::fmt;

/// A decoded RGB8 raster: row-major pixels, 3 bytes per pixel.
///
/// This is the working surface a frame source renders into before the
/// capture scheduler encodes it. One capture run owns its rasters
/// exclusively; they are never shared between runs.
#[derive(Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Raster {
    /// Create a raster from raw RGB8 bytes.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::ShapeOverflow` if `width * height * 3` overflows,
    /// `FrameError::ShapeMismatch` if `data` is not exactly that many bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width
            .checked_mul(height)
            .and_then(|p| p.checked_mul(3))
            .ok_or(FrameError::ShapeOverflow)?;

        if expected != data.len() {
            return Err(FrameError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
