use velo_frame::{FrameError, Raster, decode_jpeg, encode_jpeg};

/// Build a small gradient raster so encode output is a realistic image.
fn gradient_raster(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let val = ((x + y) % 256) as u8;
            data.extend_from_slice(&[val, val.wrapping_add(10), val.wrapping_add(20)]);
        }
    }
    Raster::new(width, height, data).unwrap()
}

#[tokio::test]
async fn test_encode_jpeg_produces_jpeg_bytes() {
    let raster = gradient_raster(16, 16);
    let jpeg = encode_jpeg(raster, 80).await.unwrap();

    assert!(!jpeg.is_empty());
    // JPEG SOI marker
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn test_decode_jpeg_preserves_dimensions() {
    let raster = gradient_raster(16, 8);
    let jpeg = encode_jpeg(raster, 90).await.unwrap();

    let decoded = decode_jpeg(&jpeg).await.unwrap();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 8);
    assert_eq!(decoded.data().len(), 16 * 8 * 3);
}

#[tokio::test]
async fn test_decode_jpeg_rejects_garbage() {
    let result = decode_jpeg(&[0u8; 32]).await;

    match result.unwrap_err() {
        FrameError::Decode(_) => {}
        other => panic!("Expected FrameError::Decode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lower_quality_is_smaller() {
    let low = encode_jpeg(gradient_raster(64, 64), 10).await.unwrap();
    let high = encode_jpeg(gradient_raster(64, 64), 95).await.unwrap();

    assert!(
        low.len() < high.len(),
        "quality 10 ({} bytes) should be smaller than quality 95 ({} bytes)",
        low.len(),
        high.len()
    );
}
