#[cfg(feature = "v4l2")]
mod cam {
    use std::path::PathBuf;
    use std::time::Duration;
    use velo_analyzer::Analyzer;
    use velo_base::{log, log_fatal, poll_until};
    use velo_capture::CaptureConfig;
    use velo_history::HistoryStore;
    use velo_infer::{ClientConfig, GeminiBackend};
    use velo_source::{SourceConfig, V4l2Source};

    const DEFAULT_DEVICE: &str = "/dev/video0";
    const DEFAULT_USER: &str = "local";

    pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
        velo_base::init_stdout_logger();

        let device = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_DEVICE.to_string());

        let client_config = match ClientConfig::from_env() {
            Ok(config) => config,
            Err(e) => log_fatal!("{e}"),
        };

        // Cameras can take a moment to enumerate after plug-in
        log::info!("Waiting for {device}");
        let node = PathBuf::from(&device);
        if poll_until(Duration::from_millis(100), Duration::from_secs(5), || {
            node.exists().then_some(())
        })
        .await
        .is_none()
        {
            log_fatal!("camera {device} did not appear within 5s");
        }

        let source = V4l2Source::new(SourceConfig::default().with_device(device.clone()))?;
        log::info!("Camera opened: {device}");

        let backend = GeminiBackend::new(client_config)?;
        let analyzer = Analyzer::new(backend, CaptureConfig::default());

        log::info!("Capturing burst");
        let result = analyzer.run(source).await?;

        println!("Exit velocity: {} MPH", result.exit_velocity);
        println!("Analysis: {}", result.analysis);

        if let Ok(dir) = std::env::var("VELO_HISTORY_DIR") {
            let user = std::env::var("VELO_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
            let store = HistoryStore::open(dir)?;
            let entry = store.append(&user, &result)?;
            log::info!("Recorded history entry {} for {user}", entry.id);
        }

        Ok(())
    }
}

#[cfg(feature = "v4l2")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cam::run().await
}

#[cfg(not(feature = "v4l2"))]
fn main() {
    eprintln!("analyze-cam requires a camera backend; build with --features v4l2");
    std::process::exit(2);
}
