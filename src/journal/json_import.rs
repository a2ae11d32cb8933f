//! JSON Import
//!
//! Reads a JSON array of observations using the field names of `Observation`.

use super::{JournalError, JournalImport, JournalResult};
use crate::observation::Observation;
use std::path::Path;

/// Import observations from a JSON file
pub fn import_json_file(path: &Path) -> JournalResult<JournalImport> {
    let content = std::fs::read_to_string(path)?;
    import_json_str(&content)
}

/// Import observations from a JSON string
///
/// Entries that fail to deserialize or carry an out-of-range mood are
/// reported and skipped; the rest are kept.
pub fn import_json_str(json: &str) -> JournalResult<JournalImport> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => {
            return Err(JournalError::ParseError(
                "expected a JSON array of observations".to_string(),
            ))
        }
    };

    let mut import = JournalImport::default();

    for (idx, entry) in entries.into_iter().enumerate() {
        let entry_num = idx + 1;

        let mut observation: Observation = match serde_json::from_value(entry) {
            Ok(obs) => obs,
            Err(e) => {
                import.fail(entry_num, e);
                continue;
            }
        };

        if let Err(e) = observation.validate() {
            import.fail(entry_num, e);
            continue;
        }

        // Same tag normalization as the builder: trimmed, unique, non-empty
        let raw_tags = std::mem::take(&mut observation.tags);
        let observation = observation.tags(raw_tags);

        import.observations.push(observation);
        import.rows_processed += 1;
    }

    import.cap_errors();
    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::TimeOfDay;

    #[test]
    fn test_import_json() {
        let json = r#"[
            {"date": "2024-01-15", "mood_score": 7.5, "tags": ["work", "work"], "sleep_hours": 8.0},
            {"date": "2024-01-16", "mood_score": 4.0, "weather": "rainy", "time_of_day": "night"}
        ]"#;

        let import = import_json_str(json).unwrap();
        assert_eq!(import.rows_processed, 2);
        assert_eq!(import.rows_failed, 0);

        let first = &import.observations[0];
        assert_eq!(first.tags, vec!["work"]);
        assert_eq!(first.sleep_hours, Some(8.0));
        assert_eq!(first.stress_level, None);

        let second = &import.observations[1];
        assert_eq!(second.time_of_day, Some(TimeOfDay::Night));
        assert_eq!(second.weather.as_deref(), Some("rainy"));
    }

    #[test]
    fn test_bad_entries_skipped() {
        let json = r#"[
            {"date": "2024-01-15", "mood_score": 12.0},
            {"date": "not-a-date", "mood_score": 5.0},
            {"mood_score": 5.0},
            {"date": "2024-01-18", "mood_score": 5.0}
        ]"#;

        let import = import_json_str(json).unwrap();
        assert_eq!(import.observations.len(), 1);
        assert_eq!(import.rows_failed, 3);
        assert!(import.errors[0].starts_with("Line 1:"));
    }

    #[test]
    fn test_not_an_array() {
        let err = import_json_str(r#"{"date": "2024-01-15"}"#).unwrap_err();
        assert!(matches!(err, JournalError::ParseError(_)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(import_json_str("[").unwrap_err(), JournalError::Json(_)));
    }
}
