//! Journal loading
//!
//! Turns exported mood journals into `Observation`s for the analytics engine:
//! - CSV export (header auto-detection, flexible date formats)
//! - JSON array of observations
//!
//! Bad rows are counted and reported rather than aborting the load.

mod csv_import;
mod json_import;

pub use csv_import::{import_csv_file, CsvImporter, JournalColumn};
pub use json_import::{import_json_file, import_json_str};

use crate::observation::{Observation, ObservationError};
use std::path::Path;

/// Result of loading a journal
#[derive(Debug, Default)]
pub struct JournalImport {
    pub observations: Vec<Observation>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl JournalImport {
    /// Record a rejected row
    pub(crate) fn fail(&mut self, line: usize, reason: impl std::fmt::Display) {
        tracing::warn!(line, %reason, "Skipping journal row");
        self.errors.push(format!("Line {}: {}", line, reason));
        self.rows_failed += 1;
    }

    /// Truncate errors if too many
    pub(crate) fn cap_errors(&mut self) {
        if self.errors.len() > MAX_REPORTED_ERRORS {
            let total = self.errors.len();
            self.errors.truncate(MAX_REPORTED_ERRORS);
            self.errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }
    }
}

const MAX_REPORTED_ERRORS: usize = 100;

/// Errors that can occur while loading a journal
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid observation: {0}")]
    Observation(#[from] ObservationError),
}

/// Result type alias for journal loading
pub type JournalResult<T> = Result<T, JournalError>;

/// Load a journal, choosing the format from the file extension
///
/// `.json` files use the JSON loader; anything else is read as CSV.
pub fn load_journal(path: &Path) -> JournalResult<JournalImport> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let import = if is_json {
        import_json_file(path)?
    } else {
        import_csv_file(path)?
    };

    tracing::info!(
        path = %path.display(),
        observations = import.observations.len(),
        rows_failed = import.rows_failed,
        "Loaded journal"
    );

    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_journal_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("journal.csv");
        std::fs::write(&csv_path, "date,mood\n2024-01-15,7\n").unwrap();
        let import = load_journal(&csv_path).unwrap();
        assert_eq!(import.observations.len(), 1);

        let json_path = dir.path().join("journal.JSON");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(file, r#"[{{"date":"2024-01-15","mood_score":7.0}}]"#).unwrap();
        let import = load_journal(&json_path).unwrap();
        assert_eq!(import.observations.len(), 1);
    }

    #[test]
    fn test_cap_errors() {
        let mut import = JournalImport::default();
        for line in 0..105 {
            import.fail(line, "bad");
        }
        import.cap_errors();
        assert_eq!(import.rows_failed, 105);
        assert_eq!(import.errors.len(), MAX_REPORTED_ERRORS + 1);
        assert_eq!(import.errors.last().unwrap(), "... and 5 more errors");
    }

    #[test]
    fn test_missing_file() {
        let err = load_journal(Path::new("/nonexistent/journal.json")).unwrap_err();
        assert!(matches!(err, JournalError::Io(_)));
    }
}
