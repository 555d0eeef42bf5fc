use std::time::Duration;
use velo_analyzer::Analyzer;
use velo_base::{log, log_fatal};
use velo_capture::CaptureConfig;
use velo_history::HistoryStore;
use velo_infer::{ClientConfig, GeminiBackend};
use velo_source::{ClipSource, SourceConfig};

const DEFAULT_USER: &str = "local";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    velo_base::init_stdout_logger();

    let mut args = std::env::args().skip(1);
    let (path, seconds) = match (args.next(), args.next()) {
        (Some(path), Some(seconds)) => (path, seconds),
        _ => {
            eprintln!("usage: analyze-clip <video-file> <seconds>");
            std::process::exit(2);
        }
    };

    let at = match seconds.parse::<f64>() {
        Ok(secs) if secs >= 0.0 && secs.is_finite() => Duration::from_secs_f64(secs),
        _ => {
            eprintln!("invalid timestamp: {seconds}");
            std::process::exit(2);
        }
    };

    let client_config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => log_fatal!("{e}"),
    };

    log::info!("Opening {path}");
    let mut source = ClipSource::open(&path, &SourceConfig::default()).await?;
    source.set_position(at);

    let backend = GeminiBackend::new(client_config)?;
    let analyzer = Analyzer::new(backend, CaptureConfig::default());

    log::info!("Analyzing the window around {seconds}s");
    let result = analyzer.run(source).await?;

    println!("Exit velocity: {} MPH", result.exit_velocity);
    println!("Analysis: {}", result.analysis);

    // Optional local history, mirroring the app's per-user list
    if let Ok(dir) = std::env::var("VELO_HISTORY_DIR") {
        let user = std::env::var("VELO_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
        let store = HistoryStore::open(dir)?;
        let entry = store.append(&user, &result)?;
        log::info!("Recorded history entry {} for {user}", entry.id);
    }

    Ok(())
}
