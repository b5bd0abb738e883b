//! JSON-file session log.
//!
//! The log is a single file holding every recorded session as a JSON list,
//! rewritten wholesale on every append. There is no partial-write recovery
//! and no concurrent-writer support; a single foreground loop is the only
//! writer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Timestamp format used in persisted records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded work session.
///
/// Immutable once created; the log is append-only and records are never
/// mutated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub task: String,
    pub duration_minutes: u32,
    pub timestamp: String,
    pub completed: bool,
}

impl SessionRecord {
    pub fn new(
        task: impl Into<String>,
        duration_minutes: u32,
        at: DateTime<Local>,
        completed: bool,
    ) -> Self {
        Self {
            task: task.into(),
            duration_minutes,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            completed,
        }
    }
}

/// In-memory view over the on-disk session log.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    records: Vec<SessionRecord>,
}

impl History {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Load the log from disk.
    ///
    /// An absent file yields an empty history. Unreadable or malformed
    /// content is reported as a typed error so the caller can surface a
    /// warning before deciding to continue with an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::empty(path));
            }
            Err(err) => return Err(HistoryError::ReadFailed { path, source: err }),
        };
        match serde_json::from_str(&content) {
            Ok(records) => Ok(Self { path, records }),
            Err(err) => Err(HistoryError::Corrupt { path, source: err }),
        }
    }

    /// Append a record and rewrite the whole log file.
    ///
    /// # Errors
    /// Write failures are surfaced, never swallowed; the record stays in
    /// the in-memory sequence either way.
    pub fn append(&mut self, record: SessionRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|err| HistoryError::Encode { source: err })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| HistoryError::WriteFailed {
                path: self.path.clone(),
                source: err,
            })?;
        }
        fs::write(&self.path, json).map_err(|err| HistoryError::WriteFailed {
            path: self.path.clone(),
            source: err,
        })
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
