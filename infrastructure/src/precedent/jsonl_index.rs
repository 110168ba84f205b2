//! JSONL precedent log.
//!
//! Each [`PrecedentRecord`] is serialized as a single JSON line and appended
//! with one write. The log is never rewritten, so re-indexing a case adds
//! a second line for it.
//!
//! There is no cross-process lock. Two processes appending at once may
//! interleave lines.

use senate_application::ports::precedent_index::{PrecedentError, PrecedentIndex};
use senate_domain::{LoadedLine, PrecedentRecord, parse_line};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Append-only precedent index stored as JSON lines
pub struct JsonlPrecedentIndex {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlPrecedentIndex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrecedentIndex for JsonlPrecedentIndex {
    fn add(&self, record: &PrecedentRecord) -> Result<(), PrecedentError> {
        record.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        Ok(())
    }

    fn load_lines(&self) -> Result<Vec<LoadedLine>, PrecedentError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(raw
            .lines()
            .enumerate()
            .filter_map(|(i, line)| parse_line(i + 1, line))
            .collect())
    }
}
