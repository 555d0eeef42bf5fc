use crate::HistoryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use velo_infer::AnalysisResult;

/// One recorded estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// RFC 3339 UTC time the entry was recorded.
    pub timestamp: String,
    #[serde(rename = "exitVelocity")]
    pub exit_velocity: String,
    pub analysis: String,
}

/// File-backed history keyed by a user identifier string.
#[derive(Debug)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Record a result for `user`, newest first. Returns the stored entry.
    pub fn append(
        &self,
        user: &str,
        result: &AnalysisResult,
    ) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry {
            id: next_id(),
            timestamp: velo_base::format_rfc3339(),
            exit_velocity: result.exit_velocity.clone(),
            analysis: result.analysis.clone(),
        };

        let mut entries = self.list(user);
        entries.insert(0, entry.clone());

        let path = self.user_path(user);
        fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
        log::debug!("appended history entry for {user} ({} total)", entries.len());

        Ok(entry)
    }

    /// All entries for `user`, newest first. A missing or corrupt file
    /// reads as empty.
    pub fn list(&self, user: &str) -> Vec<HistoryEntry> {
        let path = self.user_path(user);
        match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("ignoring corrupt history {}: {e}", path.display());
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn user_path(&self, user: &str) -> PathBuf {
        self.dir.join(format!("history-{}.json", sanitize(user)))
    }
}

// Keep user identifiers filename-safe
fn sanitize(user: &str) -> String {
    user.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

fn next_id() -> String {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros())
        .unwrap_or(0);
    format!("{micros}")
}
