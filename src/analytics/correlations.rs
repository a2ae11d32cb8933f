//! Correlation Engine
//!
//! Calculates the Pearson correlation between mood and each optional numeric
//! factor. Only observations that recorded the factor take part in its
//! coefficient; everything degrades to `r = 0` rather than failing.

use crate::analytics::stats::pearson_correlation;
use crate::observation::{Factor, Observation};
use serde::Serialize;

/// Confidence never claims more than this, however many samples exist
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Fewest paired samples that yield a coefficient
const MIN_SAMPLES: usize = 2;

/// Correlation between mood and one factor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Factor name (e.g. "sleep_hours")
    pub factor: String,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Direction of the relationship
    pub impact: Impact,
    /// Sample-size heuristic in [0, 0.9]
    pub confidence: f64,
    /// Number of observations that recorded the factor
    pub sample_size: usize,
}

/// Direction of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    fn from_coefficient(r: f64) -> Self {
        if r > 0.0 {
            Impact::Positive
        } else if r < 0.0 {
            Impact::Negative
        } else {
            Impact::Neutral
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Positive => write!(f, "positive"),
            Impact::Negative => write!(f, "negative"),
            Impact::Neutral => write!(f, "neutral"),
        }
    }
}

/// Human-readable strength of a coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    /// Classify a coefficient by its absolute value
    pub fn from_coefficient(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r > 0.7 {
            CorrelationStrength::Strong
        } else if abs_r > 0.5 {
            CorrelationStrength::Moderate
        } else if abs_r > 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationStrength::Strong => write!(f, "strong"),
            CorrelationStrength::Moderate => write!(f, "moderate"),
            CorrelationStrength::Weak => write!(f, "weak"),
            CorrelationStrength::Negligible => write!(f, "negligible"),
        }
    }
}

impl CorrelationResult {
    pub fn strength(&self) -> CorrelationStrength {
        CorrelationStrength::from_coefficient(self.correlation)
    }
}

/// Correlate mood with the factor extracted by `selector`
///
/// Observations where `selector` returns `None` are skipped. With fewer than
/// two paired samples the result is `r = 0` with zero confidence.
pub fn correlate<F>(observations: &[Observation], factor: &str, selector: F) -> CorrelationResult
where
    F: Fn(&Observation) -> Option<f64>,
{
    let (values, moods): (Vec<f64>, Vec<f64>) = observations
        .iter()
        .filter_map(|obs| selector(obs).map(|v| (v, obs.mood_score)))
        .unzip();

    let sample_size = values.len();

    let (correlation, confidence) = if sample_size < MIN_SAMPLES {
        (0.0, 0.0)
    } else {
        (
            pearson_correlation(&values, &moods),
            confidence_for(sample_size),
        )
    };

    tracing::debug!(
        factor = %factor,
        samples = sample_size,
        r = correlation,
        "Computed mood correlation"
    );

    CorrelationResult {
        factor: factor.to_string(),
        correlation,
        impact: Impact::from_coefficient(correlation),
        confidence,
        sample_size,
    }
}

/// Correlate mood with a built-in factor
pub fn correlate_factor(observations: &[Observation], factor: Factor) -> CorrelationResult {
    correlate(observations, factor.name(), |obs| factor.value(obs))
}

/// Correlate mood with every given factor
///
/// Returns results sorted by absolute correlation (strongest first). The sort
/// is stable, so equal strengths keep the order of `factors`.
pub fn correlate_all(observations: &[Observation], factors: &[Factor]) -> Vec<CorrelationResult> {
    if observations.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<CorrelationResult> = factors
        .iter()
        .map(|&factor| correlate_factor(observations, factor))
        .collect();

    results.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Confidence heuristic: one tenth per sample, capped at 0.9
fn confidence_for(sample_size: usize) -> f64 {
    (sample_size as f64 / 10.0).min(MAX_CONFIDENCE)
}
