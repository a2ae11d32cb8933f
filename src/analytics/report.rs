//! Mood Report
//!
//! Runs every aggregator over one observation snapshot and bundles the
//! results for the presentation layer.

use crate::analytics::categorical::{
    aggregate_by_time_of_day, aggregate_by_weather, CategoricalAggregate,
};
use crate::analytics::correlations::{correlate_all, CorrelationResult};
use crate::analytics::seasonal::{aggregate_by_month, SeasonalPattern};
use crate::analytics::stats::{mean, round1};
use crate::analytics::triggers::{analyze_triggers, TriggerInsight};
use crate::config::AnalysisConfig;
use crate::observation::Observation;
use chrono::NaiveDate;
use serde::Serialize;

/// Fewest entries needed before a trend is reported
const MIN_TREND_ENTRIES: usize = 4;

/// Overall journal statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub entries: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub average_mood: Option<f64>,
    /// Mean of the later half minus mean of the earlier half
    pub trend: Option<f64>,
}

impl MoodSummary {
    pub fn from_observations(observations: &[Observation]) -> Self {
        let mut dated: Vec<(NaiveDate, f64)> = observations
            .iter()
            .map(|o| (o.date, o.mood_score))
            .collect();
        // Stable, so same-day entries keep input order
        dated.sort_by_key(|(date, _)| *date);

        let moods: Vec<f64> = dated.iter().map(|(_, m)| *m).collect();

        let trend = if moods.len() >= MIN_TREND_ENTRIES {
            let mid = moods.len() / 2;
            match (mean(&moods[..mid]), mean(&moods[mid..])) {
                (Some(first), Some(second)) => Some(round1(second - first)),
                _ => None,
            }
        } else {
            None
        };

        Self {
            entries: observations.len(),
            first_date: dated.first().map(|(d, _)| *d),
            last_date: dated.last().map(|(d, _)| *d),
            average_mood: mean(&moods).map(round1),
            trend,
        }
    }
}

/// All analytics for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodReport {
    pub summary: MoodSummary,
    pub correlations: Vec<CorrelationResult>,
    pub triggers: Vec<TriggerInsight>,
    pub seasonal: Vec<SeasonalPattern>,
    pub weather: Vec<CategoricalAggregate>,
    pub time_of_day: Vec<CategoricalAggregate>,
}

/// Run every aggregator over `observations`
pub fn analyze(observations: &[Observation], config: &AnalysisConfig) -> MoodReport {
    let report = MoodReport {
        summary: MoodSummary::from_observations(observations),
        correlations: correlate_all(observations, &config.factors),
        triggers: analyze_triggers(observations, &config.triggers),
        seasonal: aggregate_by_month(observations),
        weather: aggregate_by_weather(observations),
        time_of_day: aggregate_by_time_of_day(observations),
    };

    tracing::info!(
        entries = observations.len(),
        correlations = report.correlations.len(),
        triggers = report.triggers.len(),
        months = report.seasonal.len(),
        "Mood report generated"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::TimeOfDay;

    fn obs(m: u32, d: u32, mood: f64) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(2024, m, d).unwrap(), mood)
    }

    fn sample_journal() -> Vec<Observation> {
        vec![
            obs(1, 5, 4.0).sleep_hours(5.0).weather("rainy").tag("work"),
            obs(1, 2, 3.0).sleep_hours(5.5).time_of_day(TimeOfDay::Night),
            obs(2, 1, 8.0).sleep_hours(8.5).weather("sunny").tag("outdoor"),
            obs(2, 9, 9.0).sleep_hours(9.0).time_of_day(TimeOfDay::Morning),
        ]
    }

    #[test]
    fn test_full_report() {
        let report = analyze(&sample_journal(), &AnalysisConfig::default());

        assert_eq!(report.summary.entries, 4);
        assert_eq!(report.summary.first_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(report.summary.last_date, NaiveDate::from_ymd_opt(2024, 2, 9));
        assert_eq!(report.summary.average_mood, Some(6.0));
        assert_eq!(report.summary.trend, Some(5.0));

        assert_eq!(report.correlations.len(), 3);
        assert_eq!(report.correlations[0].factor, "sleep_hours");

        assert_eq!(report.triggers.len(), 1);
        assert_eq!(report.triggers[0].improvement, 5.0);

        assert_eq!(report.seasonal.len(), 2);
        assert_eq!(report.weather.len(), 2);
        assert_eq!(report.time_of_day.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = analyze(&[], &AnalysisConfig::default());

        assert_eq!(report.summary.entries, 0);
        assert_eq!(report.summary.average_mood, None);
        assert_eq!(report.summary.trend, None);
        assert!(report.correlations.is_empty());
        assert!(report.triggers.is_empty());
        assert!(report.seasonal.is_empty());
        assert!(report.weather.is_empty());
        assert!(report.time_of_day.is_empty());
    }

    #[test]
    fn test_input_not_reordered() {
        let journal = sample_journal();
        let before = journal.clone();
        let _ = analyze(&journal, &AnalysisConfig::default());
        assert_eq!(journal, before);
    }

    #[test]
    fn test_report_serializes() {
        let report = analyze(&sample_journal(), &AnalysisConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["entries"], 4);
        assert!(json["seasonal"][0]["mood_variance"].is_number());
        assert_eq!(json["summary"]["first_date"], "2024-01-02");
    }
}
