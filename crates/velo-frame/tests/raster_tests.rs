use velo_frame::{FrameError, Raster};

#[test]
fn test_raster_new_valid() {
    let raster = Raster::new(4, 2, vec![0u8; 4 * 2 * 3]).unwrap();

    assert_eq!(raster.width(), 4);
    assert_eq!(raster.height(), 2);
    assert_eq!(raster.data().len(), 24);
}

#[test]
fn test_raster_new_size_mismatch() {
    let result = Raster::new(4, 2, vec![0u8; 10]);

    match result.unwrap_err() {
        FrameError::ShapeMismatch { expected, got } => {
            assert_eq!(expected, 24);
            assert_eq!(got, 10);
        }
        other => panic!("Expected FrameError::ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_raster_new_overflow() {
    let result = Raster::new(usize::MAX, 2, Vec::new());

    assert_eq!(result.unwrap_err(), FrameError::ShapeOverflow);
}

#[test]
fn test_raster_zero_dimensions() {
    // A 0x0 raster is degenerate but consistent: zero bytes expected.
    let raster = Raster::new(0, 0, Vec::new()).unwrap();
    assert_eq!(raster.data().len(), 0);
}

#[test]
fn test_raster_into_data_round_trip() {
    let pixels: Vec<u8> = (0..12).collect();
    let raster = Raster::new(2, 2, pixels.clone()).unwrap();

    assert_eq!(raster.into_data(), pixels);
}
