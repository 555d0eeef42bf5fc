//! Frame vocabulary for the velo capture pipeline.
//!
//! Defines the raster surface frames are rendered into, the encoded
//! [`Frame`] type, the ordered [`CaptureBatch`] handed to the inference
//! client, and JPEG encode/decode built on the `image` crate.

pub mod batch;
pub mod error;
pub mod frame;
pub mod raster;

pub use batch::CaptureBatch;
pub use error::FrameError;
pub use frame::{Frame, JPEG_MIME};
pub use raster::Raster;

use image::ImageEncoder;

fn encode_jpeg_inner(raster: &Raster, quality: u8) -> Result<Vec<u8>, FrameError> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            raster.data(),
            raster.width() as u32,
            raster.height() as u32,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| FrameError::Encode(e.to_string()))?;

    Ok(buffer)
}

fn decode_jpeg_inner(data: &[u8]) -> Result<Raster, FrameError> {
    let img = image::load_from_memory(data)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Raster::new(width as usize, height as usize, rgb.into_raw())
}

/// Encodes a raster as JPEG bytes.
///
/// The `quality` parameter controls JPEG compression (1–100, higher =
/// better quality). The CPU-bound encoding work runs on tokio's blocking
/// thread pool.
///
/// # Errors
///
/// Returns `FrameError::Encode` if encoding fails.
pub async fn encode_jpeg(raster: Raster, quality: u8) -> Result<Vec<u8>, FrameError> {
    tokio::task::spawn_blocking(move || encode_jpeg_inner(&raster, quality))
        .await
        .map_err(|e| FrameError::Encode(e.to_string()))?
}

/// Decodes an encoded image into an RGB8 raster.
///
/// The format is auto-detected by the `image` crate; grayscale and alpha
/// images are converted to RGB. The CPU-bound decoding work runs on
/// tokio's blocking thread pool.
///
/// # Errors
///
/// Returns `FrameError::Decode` if the data is invalid or the format is
/// unsupported.
pub async fn decode_jpeg(data: &[u8]) -> Result<Raster, FrameError> {
    let owned = data.to_vec();
    tokio::task::spawn_blocking(move || decode_jpeg_inner(&owned))
        .await
        .map_err(|e| FrameError::Decode(e.to_string()))?
}
