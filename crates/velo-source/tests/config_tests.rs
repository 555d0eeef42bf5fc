use std::time::Duration;
use velo_source::SourceConfig;

#[test]
fn test_config_defaults() {
    let config = SourceConfig::default();

    assert_eq!(config.device(), "/dev/video0");
    assert_eq!(config.width(), 640);
    assert_eq!(config.height(), 480);
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
    assert_eq!(config.seek_timeout(), Duration::from_secs(5));
}

#[test]
fn test_config_builders() {
    let config = SourceConfig::default()
        .with_device("/dev/video2".to_string())
        .with_width(1280)
        .with_height(720)
        .with_fps(60)
        .with_buffer_count(2)
        .with_seek_timeout(Duration::from_secs(2));

    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.fps(), 60);
    assert_eq!(config.buffer_count(), 2);
    assert_eq!(config.seek_timeout(), Duration::from_secs(2));
}
