use crate::{FrameSource, SourceConfig, SourceError, SourceKind};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use velo_frame::Raster;

/// Seekable source backed by a video file.
///
/// Every sample runs one short-lived `ffmpeg` decode of the same file, so
/// sampling never moves the caller-visible position held in `position`.
/// The media duration is probed once with `ffprobe` at open.
pub struct ClipSource {
    path: PathBuf,
    duration: Option<Duration>,
    position: Duration,
    seek_timeout: Duration,
    stopped: bool,
}

impl std::fmt::Debug for ClipSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipSource")
            .field("path", &self.path)
            .field("duration", &self.duration)
            .field("position", &self.position)
            .field("stopped", &self.stopped)
            .finish()
    }
}

impl ClipSource {
    /// Open a video file and probe its duration.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the file does not exist or
    /// `ffprobe` cannot read it.
    pub async fn open(path: impl Into<PathBuf>, config: &SourceConfig) -> Result<Self, SourceError> {
        let path = path.into();

        if !path.is_file() {
            return Err(SourceError::Unavailable(format!(
                "no such file: {}",
                path.display()
            )));
        }

        let duration = probe_duration(&path).await?;
        log::debug!("opened clip {} (duration {:?})", path.display(), duration);

        Ok(Self {
            path,
            duration,
            position: Duration::ZERO,
            seek_timeout: config.seek_timeout(),
            stopped: false,
        })
    }

    /// Move the caller-visible position, clamped into `[0, duration]`.
    ///
    /// Sampling does not change this; it stands in for the playhead a
    /// player UI would hold.
    pub fn set_position(&mut self, position: Duration) {
        self.position = clamp_to(position, self.duration);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSource for ClipSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Seekable
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    async fn sample_at(&mut self, offset: Duration) -> Result<Raster, SourceError> {
        if self.stopped {
            return Err(SourceError::Unavailable("clip source stopped".to_string()));
        }

        // Input-side -ss seeks before decode; -frames:v 1 exits after one
        // frame, written to stdout as a high-quality JPEG.
        let mut command = Command::new("ffmpeg");
        command
            .args(["-v", "error", "-ss", &format_seconds(offset), "-i"])
            .arg(&self.path)
            .args(["-frames:v", "1", "-f", "image2pipe", "-vcodec", "mjpeg", "-q:v", "2", "-"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match timeout(self.seek_timeout, command.output()).await {
            Ok(result) => {
                result.map_err(|e| SourceError::Unavailable(format!("failed to run ffmpeg: {e}")))?
            }
            Err(_) => {
                return Err(SourceError::SeekTimeout(format!(
                    "seek to {} did not complete within {:?}",
                    format_seconds(offset),
                    self.seek_timeout
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Decode(format!(
                "ffmpeg failed at {}s: {}",
                format_seconds(offset),
                stderr.trim()
            )));
        }

        if output.stdout.is_empty() {
            return Err(SourceError::Decode(format!(
                "no frame decoded at {}s",
                format_seconds(offset)
            )));
        }

        Ok(velo_frame::decode_jpeg(&output.stdout).await?)
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn format_seconds(offset: Duration) -> String {
    format!("{:.3}", offset.as_secs_f64())
}

fn clamp_to(position: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(end) if position > end => end,
        _ => position,
    }
}

async fn probe_duration(path: &Path) -> Result<Option<Duration>, SourceError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| SourceError::Unavailable(format!("failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        return Err(SourceError::Unavailable(format!(
            "ffprobe could not read {}",
            path.display()
        )));
    }

    // Some containers report no duration ("N/A"); the source still works,
    // offsets just lose their upper clamp.
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_within_duration() {
        let clamped = clamp_to(Duration::from_secs(3), Some(Duration::from_secs(10)));
        assert_eq!(clamped, Duration::from_secs(3));
    }

    #[test]
    fn test_clamp_to_past_end() {
        let clamped = clamp_to(Duration::from_secs(15), Some(Duration::from_secs(10)));
        assert_eq!(clamped, Duration::from_secs(10));
    }

    #[test]
    fn test_clamp_to_unknown_duration() {
        let clamped = clamp_to(Duration::from_secs(15), None);
        assert_eq!(clamped, Duration::from_secs(15));
    }

    #[test]
    fn test_format_seconds_millis() {
        assert_eq!(format_seconds(Duration::from_millis(1250)), "1.250");
        assert_eq!(format_seconds(Duration::ZERO), "0.000");
    }
}
