//! Categorical aggregation (weather, time of day)

use crate::analytics::stats::round1;
use crate::observation::Observation;
use serde::Serialize;
use std::collections::HashMap;

/// How each category bucket is reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryMeasure {
    /// Mean mood per label
    AverageMood,
    /// Number of observations per label
    Count,
}

/// Aggregate for one category label
///
/// Averages are rounded to one decimal place, like the seasonal figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalAggregate {
    pub label: String,
    /// Mean mood or raw count, depending on the measure
    #[serde(rename = "avg_or_count")]
    pub value: f64,
    pub sample_count: usize,
}

/// Group observations by a categorical field
///
/// Observations whose field is absent are left out. Labels appear in the
/// order they were first seen.
pub fn aggregate_by_category<F>(
    observations: &[Observation],
    selector: F,
    measure: CategoryMeasure,
) -> Vec<CategoricalAggregate>
where
    F: Fn(&Observation) -> Option<String>,
{
    let mut buckets: Vec<(String, f64, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let Some(label) = selector(obs) else {
            continue;
        };

        let pos = match positions.get(&label) {
            Some(&pos) => pos,
            None => {
                positions.insert(label.clone(), buckets.len());
                buckets.push((label, 0.0, 0));
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[pos];
        bucket.1 += obs.mood_score;
        bucket.2 += 1;
    }

    buckets
        .into_iter()
        .map(|(label, mood_sum, count)| CategoricalAggregate {
            label,
            value: match measure {
                CategoryMeasure::AverageMood => round1(mood_sum / count as f64),
                CategoryMeasure::Count => count as f64,
            },
            sample_count: count,
        })
        .collect()
}

/// Average mood per weather label, rounded to one decimal place
///
/// Blank labels count as absent.
pub fn aggregate_by_weather(observations: &[Observation]) -> Vec<CategoricalAggregate> {
    aggregate_by_category(
        observations,
        |obs| {
            obs.weather
                .as_deref()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
        },
        CategoryMeasure::AverageMood,
    )
}

/// Check-in count per time-of-day bucket
pub fn aggregate_by_time_of_day(observations: &[Observation]) -> Vec<CategoricalAggregate> {
    aggregate_by_category(
        observations,
        |obs| obs.time_of_day.map(|t| t.to_string()),
        CategoryMeasure::Count,
    )
}
