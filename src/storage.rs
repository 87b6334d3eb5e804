//! Session snapshot persistence.
//!
//! Whole-object semantics: each save rewrites a complete JSON document,
//! last write wins, nothing is merged. A session directory holds
//! `settings.json`, `response.json`, and one `report-{participant}.txt`
//! per exported participant. Loading tolerates absent or unreadable files
//! by returning `None` — a fresh session is always a valid fallback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::types::{ResponseData, Settings};

/// Settings snapshot file name.
pub const SETTINGS_FILE: &str = "settings.json";
/// Response-data snapshot file name.
pub const RESPONSE_FILE: &str = "response.json";

/// A directory-backed key-value store for one survey session.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn report_path(&self, participant_id: i64) -> PathBuf {
        self.dir.join(format!("report-{}.txt", participant_id))
    }

    pub fn save_settings(&self, settings: &Settings) -> io::Result<()> {
        self.write_json(SETTINGS_FILE, settings)
    }

    pub fn save_response(&self, data: &ResponseData) -> io::Result<()> {
        self.write_json(RESPONSE_FILE, data)
    }

    /// Persist an exported report under the participant's key.
    pub fn save_report(&self, participant_id: i64, report: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.report_path(participant_id), report)
    }

    /// Load a full session snapshot. Returns `None` when either file is
    /// missing or unparseable; shape validation is the model's job.
    pub fn load_session(&self) -> Option<(Settings, ResponseData)> {
        let settings: Settings = self.read_json(SETTINGS_FILE)?;
        let data: ResponseData = self.read_json(RESPONSE_FILE)?;
        info!(dir = %self.dir.display(), "loaded session snapshot");
        Some((settings, data))
    }

    /// Remove this tool's files from the session directory. Foreign files
    /// are left alone.
    pub fn clear(&self) -> io::Result<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err),
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let ours = name == SETTINGS_FILE
                || name == RESPONSE_FILE
                || (name.starts_with("report-") && name.ends_with(".txt"));
            if ours {
                fs::remove_file(entry.path())?;
            }
        }
        info!(dir = %self.dir.display(), "cleared session snapshot");
        Ok(())
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let bytes = serde_json::to_vec_pretty(value).map_err(io::Error::other)?;
        fs::write(self.dir.join(file), bytes)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!(path = %path.display(), %err, "failed to read snapshot file");
                }
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding unparseable snapshot file");
                None
            }
        }
    }
}
