//! JSON document store rooted at one directory.

use senate_application::ports::case_outbox::{CaseFiledEnvelope, CaseOutbox, OutboxError};
use senate_application::ports::case_repository::{CaseRepository, RepositoryError};
use senate_domain::{Case, DomainError, Transcript, Verdict};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Root used when none is configured
pub const DEFAULT_STATE_DIR: &str = "state";

const CASES_DIR: &str = "cases";
const VERDICTS_DIR: &str = "verdicts";
const TRANSCRIPTS_DIR: &str = "transcripts";
const PRECEDENTS_DIR: &str = "precedents";
const OUTBOX_DIR: &str = "outbox";

/// Filesystem-backed [`CaseRepository`] and [`CaseOutbox`]
///
/// Documents are pretty-printed JSON written to `<path>.tmp` and renamed
/// into place, so readers never see a half-written file.
#[derive(Debug)]
pub struct StateDir {
    root: PathBuf,
    outbox_lock: Mutex<()>,
}

impl StateDir {
    /// Open the state directory, creating the layout if needed.
    ///
    /// A blank root falls back to [`DEFAULT_STATE_DIR`].
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        let root = if root.to_string_lossy().trim().is_empty() {
            PathBuf::from(DEFAULT_STATE_DIR)
        } else {
            root.to_path_buf()
        };

        for dir in [CASES_DIR, VERDICTS_DIR, TRANSCRIPTS_DIR, PRECEDENTS_DIR, OUTBOX_DIR] {
            let path = root.join(dir);
            fs::create_dir_all(&path).map_err(|e| {
                io::Error::new(e.kind(), format!("create dir {}: {}", path.display(), e))
            })?;
        }

        Ok(Self {
            root,
            outbox_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn case_path(&self, case_id: &str) -> PathBuf {
        self.root.join(CASES_DIR).join(format!("{case_id}.json"))
    }

    pub fn verdict_path(&self, case_id: &str) -> PathBuf {
        self.root.join(VERDICTS_DIR).join(format!("{case_id}.json"))
    }

    pub fn transcript_path(&self, case_id: &str) -> PathBuf {
        self.root
            .join(TRANSCRIPTS_DIR)
            .join(format!("{case_id}.json"))
    }

    pub fn precedent_index_path(&self) -> PathBuf {
        self.root.join(PRECEDENTS_DIR).join("index.jsonl")
    }

    pub fn outbox_path(&self) -> PathBuf {
        self.root.join(OUTBOX_DIR).join("case-filed.jsonl")
    }

    fn load_document<T: DeserializeOwned>(
        &self,
        path: &Path,
        kind: &'static str,
        id: &str,
    ) -> Result<T, RepositoryError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound {
                    kind,
                    id: id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&data).map_err(|e| RepositoryError::Decode {
            kind,
            id: id.to_string(),
            message: e.to_string(),
        })
    }
}

/// Serialize `value` as pretty JSON with a trailing newline and move it into place
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let mut body = serde_json::to_vec_pretty(value)?;
    body.push(b'\n');
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, &body)?;
    fs::rename(&tmp, path)
}

impl CaseRepository for StateDir {
    fn save_case(&self, case: &Case) -> Result<PathBuf, RepositoryError> {
        case.validate()?;
        let path = self.case_path(&case.id);
        write_json_atomic(&path, case)?;
        Ok(path)
    }

    fn load_case(&self, case_id: &str) -> Result<Case, RepositoryError> {
        self.load_document(&self.case_path(case_id), "case", case_id)
    }

    fn save_transcript(&self, transcript: &Transcript) -> Result<PathBuf, RepositoryError> {
        if transcript.case_id.trim().is_empty() {
            return Err(DomainError::validation("transcript.case_id is required").into());
        }
        let path = self.transcript_path(&transcript.case_id);
        write_json_atomic(&path, transcript)?;
        Ok(path)
    }

    fn load_transcript(&self, case_id: &str) -> Result<Transcript, RepositoryError> {
        self.load_document(&self.transcript_path(case_id), "transcript", case_id)
    }

    fn save_verdict(&self, verdict: &Verdict) -> Result<PathBuf, RepositoryError> {
        verdict.validate()?;
        let path = self.verdict_path(&verdict.case_id);
        write_json_atomic(&path, verdict)?;
        Ok(path)
    }

    fn load_verdict(&self, case_id: &str) -> Result<Verdict, RepositoryError> {
        self.load_document(&self.verdict_path(case_id), "verdict", case_id)
    }
}

impl CaseOutbox for StateDir {
    fn queue_case_filed(&self, envelope: &CaseFiledEnvelope) -> Result<PathBuf, OutboxError> {
        let mut line = serde_json::to_vec(envelope)?;
        line.push(b'\n');

        let path = self.outbox_path();
        let _guard = self.outbox_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(&line)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use senate_domain::DeliberationEngine;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap()
    }

    fn case() -> Case {
        let mut case = Case::quick("Should we amend rule X?", "ops");
        case.evidence = vec!["47 false positives".to_string()];
        case.normalize(now());
        case
    }

    #[test]
    fn test_open_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path().join("state")).unwrap();
        for sub in ["cases", "verdicts", "transcripts", "precedents", "outbox"] {
            assert!(state.root().join(sub).is_dir(), "missing {sub}");
        }
        assert_eq!(
            state.precedent_index_path(),
            dir.path().join("state/precedents/index.jsonl")
        );
    }

    #[test]
    fn test_case_round_trip_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path()).unwrap();
        let case = case();

        let path = state.save_case(&case).unwrap();
        assert_eq!(path, state.case_path("senate-20260220-100000"));
        assert_eq!(state.load_case(&case.id).unwrap(), case);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with("}\n"));
        assert!(raw.contains("\n  \"type\": \"general\""));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_case_validates_first() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path()).unwrap();
        let err = state.save_case(&Case::default()).unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));
        assert_eq!(fs::read_dir(dir.path().join("cases")).unwrap().count(), 0);
    }

    #[test]
    fn test_verdict_and_transcript_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path()).unwrap();
        let (transcript, verdict) = DeliberationEngine::default()
            .deliberate(&case(), now())
            .unwrap();

        state.save_transcript(&transcript).unwrap();
        assert!(state.load_verdict(&verdict.case_id).unwrap_err().is_not_found());

        state.save_verdict(&verdict).unwrap();
        assert_eq!(state.load_verdict(&verdict.case_id).unwrap(), verdict);
        assert_eq!(state.load_transcript(&transcript.case_id).unwrap(), transcript);
    }

    #[test]
    fn test_corrupt_document_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path()).unwrap();
        fs::write(state.verdict_path("senate-1"), "{ nope").unwrap();

        let err = state.load_verdict("senate-1").unwrap_err();
        assert!(matches!(err, RepositoryError::Decode { kind: "verdict", .. }));
    }

    #[test]
    fn test_outbox_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateDir::open(dir.path()).unwrap();

        state
            .queue_case_filed(&CaseFiledEnvelope::new(case(), now()))
            .unwrap();
        let path = state
            .queue_case_filed(&CaseFiledEnvelope::new(case(), now()))
            .unwrap();

        let raw = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "senate.case.filed");
        assert_eq!(first["case_id"], "senate-20260220-100000");
        assert_eq!(first["relay_integration_stub"], true);
    }
}
