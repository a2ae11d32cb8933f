//! CSV Import
//!
//! Mood journal CSV import with header auto-detection and multiple date
//! formats. Each row is one check-in; blank optional cells mean "not recorded".

use super::{JournalError, JournalImport, JournalResult};
use crate::observation::{Observation, TimeOfDay};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;

/// Observation field a CSV column maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalColumn {
    Date,
    Mood,
    Tags,
    Sleep,
    Exercise,
    Stress,
    Weather,
    TimeOfDay,
}

impl JournalColumn {
    /// Guess the field from a header name
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim().to_lowercase().replace([' ', '-'], "_");
        let column = match header.as_str() {
            "date" | "day" | "timestamp" | "created_at" => JournalColumn::Date,
            "mood" | "mood_score" | "score" | "rating" => JournalColumn::Mood,
            "tags" | "labels" | "activities" => JournalColumn::Tags,
            "sleep" | "sleep_hours" | "hours_slept" => JournalColumn::Sleep,
            "exercise" | "exercise_minutes" | "workout_minutes" => JournalColumn::Exercise,
            "stress" | "stress_level" => JournalColumn::Stress,
            "weather" => JournalColumn::Weather,
            "time_of_day" | "time" | "period" => JournalColumn::TimeOfDay,
            _ => return None,
        };
        Some(column)
    }
}

/// CSV journal importer with configurable column mapping
pub struct CsvImporter {
    /// Format string tried first when parsing dates
    date_format: String,
    /// Mapping of column indices to observation fields
    columns: Vec<(usize, JournalColumn)>,
    /// Separator between tags inside the tags cell
    tag_separator: char,
    /// Whether the CSV has a header row
    has_header: bool,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvImporter {
    /// Create a new CSV importer with default settings
    pub fn new() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            columns: Vec::new(),
            tag_separator: ';',
            has_header: true,
        }
    }

    /// Set the date format string
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Add a column mapping
    pub fn with_column(mut self, column: usize, field: JournalColumn) -> Self {
        self.columns.push((column, field));
        self
    }

    /// Set the tag separator
    pub fn with_tag_separator(mut self, separator: char) -> Self {
        self.tag_separator = separator;
        self
    }

    /// Set whether the CSV has a header row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Auto-detect column mapping from header row
    ///
    /// Unrecognized headers are ignored. The first column claiming a field wins.
    pub fn auto_detect_columns(&mut self, headers: &csv::StringRecord) {
        self.columns.clear();

        for (idx, header) in headers.iter().enumerate() {
            match JournalColumn::from_header(header) {
                Some(field) if !self.columns.iter().any(|(_, f)| *f == field) => {
                    self.columns.push((idx, field));
                }
                Some(_) => {
                    tracing::debug!(column = idx, header, "Duplicate journal column ignored");
                }
                None => {
                    tracing::debug!(column = idx, header, "Unrecognized journal column");
                }
            }
        }
    }

    fn column(&self, field: JournalColumn) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, f)| *f == field)
            .map(|(idx, _)| *idx)
    }

    /// Parse a date string using the configured format
    fn parse_date(&self, date_str: &str) -> Result<NaiveDate, JournalError> {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, &self.date_format) {
            return Ok(date);
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, &self.date_format) {
            return Ok(dt.date());
        }

        // Try common formats
        let formats = [
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M:%SZ",
            "%Y-%m-%d",
            "%m/%d/%Y",
            "%d/%m/%Y",
            "%Y/%m/%d",
        ];

        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, fmt) {
                return Ok(dt.date());
            }
            if let Ok(date) = NaiveDate::parse_from_str(date_str, fmt) {
                return Ok(date);
            }
        }

        // Try RFC 3339, keeping the local calendar date
        if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
            return Ok(dt.date_naive());
        }

        Err(JournalError::ParseError(format!(
            "Could not parse date: {}",
            date_str
        )))
    }

    /// Import data from a CSV file
    pub fn import(&self, path: &Path) -> JournalResult<JournalImport> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file)
    }

    /// Import from a CSV string (useful for testing)
    pub fn import_str(&self, csv_data: &str) -> JournalResult<JournalImport> {
        self.import_reader(csv_data.as_bytes())
    }

    fn import_reader<R: Read>(&self, source: R) -> JournalResult<JournalImport> {
        let date_col = self
            .column(JournalColumn::Date)
            .ok_or_else(|| JournalError::ParseError("no date column".to_string()))?;
        let mood_col = self
            .column(JournalColumn::Mood)
            .ok_or_else(|| JournalError::ParseError("no mood column".to_string()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .from_reader(source);

        let mut import = JournalImport::default();

        for (line_num, result) in reader.records().enumerate() {
            let actual_line = if self.has_header {
                line_num + 2
            } else {
                line_num + 1
            };

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    import.fail(actual_line, e);
                    continue;
                }
            };

            match self.parse_row(&record, date_col, mood_col) {
                Ok(observation) => {
                    import.observations.push(observation);
                    import.rows_processed += 1;
                }
                Err(e) => import.fail(actual_line, e),
            }
        }

        import.cap_errors();
        Ok(import)
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        date_col: usize,
        mood_col: usize,
    ) -> JournalResult<Observation> {
        let date_str = cell(record, date_col)
            .ok_or_else(|| JournalError::ParseError("missing date".to_string()))?;
        let date = self.parse_date(date_str)?;

        let mood_str = cell(record, mood_col)
            .ok_or_else(|| JournalError::ParseError("missing mood".to_string()))?;
        let mood = parse_number(mood_str, "mood")?;

        let mut observation = Observation::checked(date, mood)?;

        for &(idx, field) in &self.columns {
            let Some(value) = cell(record, idx) else {
                continue;
            };

            observation = match field {
                JournalColumn::Date | JournalColumn::Mood => observation,
                JournalColumn::Tags => observation.tags(value.split(self.tag_separator)),
                JournalColumn::Sleep => observation.sleep_hours(parse_number(value, "sleep")?),
                JournalColumn::Exercise => {
                    observation.exercise_minutes(parse_number(value, "exercise")?)
                }
                JournalColumn::Stress => observation.stress_level(parse_number(value, "stress")?),
                JournalColumn::Weather => observation.weather(value),
                JournalColumn::TimeOfDay => observation.time_of_day(value.parse::<TimeOfDay>()?),
            };
        }

        Ok(observation)
    }
}

/// Trimmed cell contents, `None` when missing or blank
fn cell(record: &csv::StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(value: &str, field: &str) -> JournalResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| JournalError::ParseError(format!("invalid {} value: {}", field, value)))
}

/// Import a CSV journal, detecting columns from its header row
pub fn import_csv_file(path: &Path) -> JournalResult<JournalImport> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut importer = CsvImporter::new();
    importer.auto_detect_columns(&headers);

    importer.import(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(csv_data: &str) -> CsvImporter {
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let mut importer = CsvImporter::new();
        importer.auto_detect_columns(&headers);
        importer
    }

    #[test]
    fn test_full_journal_import() {
        let csv_data = "date,mood,tags,sleep_hours,exercise_minutes,stress_level,weather,time_of_day
2024-01-15,7.5,work;outdoor,8,30,4,sunny,morning
2024-01-16,4,,5.5,,8,rainy,night
2024-01-17,6,family,,0,,,";

        let result = detected(csv_data).import_str(csv_data).unwrap();

        assert_eq!(result.rows_processed, 3);
        assert_eq!(result.rows_failed, 0);

        let first = &result.observations[0];
        assert_eq!(first.tags, vec!["work", "outdoor"]);
        assert_eq!(first.sleep_hours, Some(8.0));
        assert_eq!(first.time_of_day, Some(TimeOfDay::Morning));

        let second = &result.observations[1];
        assert!(second.tags.is_empty());
        assert_eq!(second.exercise_minutes, None);

        let third = &result.observations[2];
        assert_eq!(third.exercise_minutes, Some(0.0));
        assert_eq!(third.sleep_hours, None);
        assert_eq!(third.weather, None);
    }

    #[test]
    fn test_header_aliases() {
        let csv_data = "Day,Mood Score,Hours Slept,Stress
01/31/2024,8,7.5,3";

        let result = detected(csv_data).import_str(csv_data).unwrap();
        assert_eq!(result.rows_processed, 1);

        let obs = &result.observations[0];
        assert_eq!(obs.date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(obs.sleep_hours, Some(7.5));
        assert_eq!(obs.stress_level, Some(3.0));
    }

    #[test]
    fn test_bad_rows_reported() {
        let csv_data = "date,mood,time_of_day
2024-01-15,11,morning
yesterday,5,morning
2024-01-17,five,
2024-01-18,5,noon
2024-01-19,,
2024-01-20,6,evening";

        let result = detected(csv_data).import_str(csv_data).unwrap();
        assert_eq!(result.rows_processed, 1);
        assert_eq!(result.rows_failed, 5);
        assert!(result.errors[0].starts_with("Line 2:"));
        assert!(result.errors[0].contains("Invalid mood score"));
    }

    #[test]
    fn test_datetime_keeps_date() {
        let csv_data = "timestamp,mood
2024-02-01T21:30:00+02:00,6
2024-02-02 08:15:00,7";

        let result = detected(csv_data).import_str(csv_data).unwrap();
        assert_eq!(result.rows_processed, 2);
        assert_eq!(
            result.observations[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_manual_mapping_without_header() {
        let importer = CsvImporter::new()
            .with_header(false)
            .with_column(0, JournalColumn::Date)
            .with_column(1, JournalColumn::Mood)
            .with_column(2, JournalColumn::Tags)
            .with_tag_separator('|');

        let result = importer.import_str("2024-03-01,6,work|stress").unwrap();
        assert_eq!(result.observations[0].tags, vec!["work", "stress"]);
    }

    #[test]
    fn test_custom_date_format() {
        let csv_data = "date,mood
03.04.2024,6
2024-04-05,7";

        let importer = detected(csv_data).with_date_format("%d.%m.%Y");

        let result = importer.import_str(csv_data).unwrap();
        assert_eq!(result.rows_processed, 2);
        assert_eq!(
            result.observations[0].date,
            NaiveDate::from_ymd_opt(2024, 4, 3).unwrap()
        );
        // Common formats still apply after the configured one
        assert_eq!(
            result.observations[1].date,
            NaiveDate::from_ymd_opt(2024, 4, 5).unwrap()
        );
    }

    #[test]
    fn test_missing_mood_column() {
        let csv_data = "date,sleep\n2024-01-01,7";
        let err = detected(csv_data).import_str(csv_data).unwrap_err();
        assert!(matches!(err, JournalError::ParseError(_)));
    }

    #[test]
    fn test_import_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.csv");
        std::fs::write(&path, "date,mood,weather\n2024-04-01,7,cloudy\n").unwrap();

        let result = import_csv_file(&path).unwrap();
        assert_eq!(result.observations[0].weather.as_deref(), Some("cloudy"));
    }
}
