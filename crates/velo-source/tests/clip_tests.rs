use velo_source::{ClipSource, SourceConfig, SourceError};

#[tokio::test]
async fn test_clip_open_missing_file() {
    let result = ClipSource::open("/nonexistent/clip.mp4", &SourceConfig::default()).await;

    match result.unwrap_err() {
        SourceError::Unavailable(msg) => assert!(msg.contains("/nonexistent/clip.mp4")),
        other => panic!("Expected SourceError::Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_clip_open_directory_is_not_a_file() {
    let result = ClipSource::open(std::env::temp_dir(), &SourceConfig::default()).await;

    match result.unwrap_err() {
        SourceError::Unavailable(_) => {}
        other => panic!("Expected SourceError::Unavailable, got {:?}", other),
    }
}
