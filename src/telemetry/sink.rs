//! Analytics sinks.
//!
//! An [`AnalyticsSink`] persists timestamped analytics records somewhere the
//! host can collect them. The bundled [`FileSink`] appends one JSON line per
//! record and rotates the file when it grows past a size threshold, keeping
//! a bounded number of timestamped backups so disk usage stays capped.

use crate::domain::{BionavError, Result};
use crate::telemetry::events::AnalyticsRecord;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated files to retain.
const MAX_BACKUP_FILES: usize = 3;

/// Destination for analytics records.
pub trait AnalyticsSink {
    /// Persists one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    /// Callers treat analytics as best-effort and log rather than propagate.
    fn record(&mut self, record: &AnalyticsRecord) -> Result<()>;
}

/// JSON-lines file sink with size-based rotation.
///
/// The file is opened lazily on the first write so construction succeeds
/// even when the path is not yet writable. Before each write the current
/// size is checked; past the threshold the file is renamed with a Unix
/// timestamp suffix and a fresh one is started. The engine is
/// single-threaded, so no locking is needed around the handle.
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Creates a sink writing to the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path, file: None }
    }

    /// Rotates the current file if it exceeds the size threshold.
    fn check_and_rotate(&mut self) -> Result<()> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                self.file = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jsonl");
        let backup = self.path.with_extension(format!("{extension}.{timestamp}"));

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }

        self.prune_backups()
    }

    /// Deletes rotated files beyond the retention limit, newest kept.
    fn prune_backups(&self) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path != &self.path
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(stem))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

impl AnalyticsSink for FileSink {
    fn record(&mut self, record: &AnalyticsRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| BionavError::Telemetry(format!("failed to serialize record: {e}")))?;

        self.check_and_rotate()?;

        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| BionavError::Telemetry("no analytics file handle".to_string()))?;

        writeln!(file, "{json}")?;
        file.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
