//! Seasonal Aggregator
//!
//! Groups observations by calendar month name. The year is ignored, so
//! January 2023 and January 2024 land in the same bucket.

use crate::analytics::recommendations::generate_recommendations;
use crate::analytics::stats::{mean, population_variance, round1};
use crate::observation::Observation;
use chrono::{Datelike, Month};
use serde::Serialize;
use std::collections::HashMap;

/// Number of tags reported per month
pub const COMMON_TAG_LIMIT: usize = 3;

/// Mood statistics for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPattern {
    /// Month name, e.g. "January"
    pub month: String,
    pub avg_mood: f64,
    /// Population variance of mood
    pub mood_variance: f64,
    pub common_tags: Vec<String>,
    pub recommendations: Vec<String>,
    pub sample_count: usize,
}

/// Aggregate observations by month, ordered January through December
pub fn aggregate_by_month(observations: &[Observation]) -> Vec<SeasonalPattern> {
    // Index 0 = January
    let mut groups: [Vec<&Observation>; 12] = Default::default();
    for obs in observations {
        groups[obs.date.month0() as usize].push(obs);
    }

    groups
        .iter()
        .enumerate()
        .filter(|(_, group)| !group.is_empty())
        .filter_map(|(idx, group)| {
            let month = Month::try_from(idx as u8 + 1).ok()?;
            Some(month_pattern(month, group))
        })
        .collect()
}

fn month_pattern(month: Month, group: &[&Observation]) -> SeasonalPattern {
    let moods: Vec<f64> = group.iter().map(|o| o.mood_score).collect();
    let avg_mood = round1(mean(&moods).unwrap_or(0.0));
    let mood_variance = round1(population_variance(&moods).unwrap_or(0.0));
    let common_tags = most_common_tags(group, COMMON_TAG_LIMIT);
    let recommendations = generate_recommendations(avg_mood, &common_tags);

    tracing::debug!(
        month = month.name(),
        samples = group.len(),
        avg_mood,
        "Aggregated month"
    );

    SeasonalPattern {
        month: month.name().to_string(),
        avg_mood,
        mood_variance,
        common_tags,
        recommendations,
        sample_count: group.len(),
    }
}

/// Most frequent tags, ties broken by first appearance
pub(crate) fn most_common_tags(group: &[&Observation], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for obs in group {
        for tag in &obs.tags {
            match positions.get(tag.as_str()) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(tag.as_str(), counts.len());
                    counts.push((tag.as_str(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}
