//! Case files supplied on the command line

use senate_application::ports::case_repository::RepositoryError;
use senate_domain::Case;
use std::fs;
use std::path::Path;

/// Read a case JSON file. Unknown fields are ignored; nothing is normalized.
pub fn read_case_file(path: &Path) -> Result<Case, RepositoryError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| RepositoryError::Decode {
        kind: "case file",
        id: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_partial_case_and_ignores_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.json");
        fs::write(
            &path,
            r#"{"type":"gate_criteria","question":"Lower the gate?","evidence":["ci logs"],"priority":"high"}"#,
        )
        .unwrap();

        let case = read_case_file(&path).unwrap();
        assert_eq!(case.case_type, "gate_criteria");
        assert_eq!(case.evidence, vec!["ci logs"]);
        assert!(case.id.is_empty());
        assert!(case.summary.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_case_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }
}
