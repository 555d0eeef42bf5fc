use std::fmt;

#[derive(Debug, PartialEq)]
pub enum FrameError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
    Encode(String),
    Decode(String),
    Batch(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ShapeOverflow => write!(f, "raster dimensions overflow when multiplied"),
            FrameError::ShapeMismatch { expected, got } => {
                write!(f, "raster size mismatch: expected {expected} bytes, got {got}")
            }
            FrameError::Encode(msg) => write!(f, "encode error: {msg}"),
            FrameError::Decode(msg) => write!(f, "decode error: {msg}"),
            FrameError::Batch(msg) => write!(f, "batch error: {msg}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<image::ImageError> for FrameError {
    fn from(err: image::ImageError) -> Self {
        FrameError::Decode(err.to_string())
    }
}
