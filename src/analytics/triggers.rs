//! Trigger Analyzer
//!
//! Compares mood on days when a factor crossed a "high" threshold against days
//! when it fell below a "low" one. Values in the band between the two
//! thresholds belong to neither group.

use crate::analytics::stats::mean;
use crate::observation::{Factor, Observation};
use serde::{Deserialize, Serialize};

/// Mood impact of a threshold condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerInsight {
    pub trigger_label: String,
    /// Number of observations in the high group
    pub frequency: usize,
    /// Mean mood of the low group
    pub avg_mood_before: f64,
    /// Mean mood of the high group
    pub avg_mood_after: f64,
    /// `avg_mood_after - avg_mood_before`
    pub improvement: f64,
    pub recommendation: String,
}

/// A configured threshold condition on one factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRule {
    pub factor: Factor,
    /// Values `>=` this form the high group
    pub high_threshold: f64,
    /// Values `<` this form the low group
    pub low_threshold: f64,
    pub label: String,
    pub recommendation: String,
}

impl TriggerRule {
    pub fn new(
        factor: Factor,
        high_threshold: f64,
        low_threshold: f64,
        label: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            factor,
            high_threshold,
            low_threshold,
            label: label.into(),
            recommendation: recommendation.into(),
        }
    }

    /// Built-in rules for sleep and exercise
    pub fn defaults() -> Vec<TriggerRule> {
        vec![
            TriggerRule::new(
                Factor::Sleep,
                8.0,
                6.0,
                "8+ hours of sleep",
                "Aim for at least 8 hours of sleep to support a better mood.",
            ),
            TriggerRule::new(
                Factor::Exercise,
                30.0,
                15.0,
                "30+ minutes of exercise",
                "Try to fit in 30 minutes of movement on most days.",
            ),
        ]
    }
}

/// Analyze one threshold condition
///
/// Returns `None` when either group is empty: there is nothing to compare.
pub fn analyze_trigger<F>(
    observations: &[Observation],
    selector: F,
    high_threshold: f64,
    low_threshold: f64,
    label: &str,
    recommendation: &str,
) -> Option<TriggerInsight>
where
    F: Fn(&Observation) -> Option<f64>,
{
    let mut high_moods = Vec::new();
    let mut low_moods = Vec::new();

    for obs in observations {
        match selector(obs) {
            Some(v) if v >= high_threshold => high_moods.push(obs.mood_score),
            Some(v) if v < low_threshold => low_moods.push(obs.mood_score),
            _ => {}
        }
    }

    let (Some(avg_mood_after), Some(avg_mood_before)) = (mean(&high_moods), mean(&low_moods))
    else {
        tracing::debug!(
            trigger = %label,
            high = high_moods.len(),
            low = low_moods.len(),
            "Skipping trigger with an empty comparison group"
        );
        return None;
    };

    Some(TriggerInsight {
        trigger_label: label.to_string(),
        frequency: high_moods.len(),
        avg_mood_before,
        avg_mood_after,
        improvement: avg_mood_after - avg_mood_before,
        recommendation: recommendation.to_string(),
    })
}

/// Analyze a configured rule
pub fn analyze_rule(observations: &[Observation], rule: &TriggerRule) -> Option<TriggerInsight> {
    let factor = rule.factor;
    analyze_trigger(
        observations,
        |obs| factor.value(obs),
        rule.high_threshold,
        rule.low_threshold,
        &rule.label,
        &rule.recommendation,
    )
}

/// Analyze every rule, keeping only those with evidence on both sides
///
/// Sorted by absolute improvement, largest first.
pub fn analyze_triggers(
    observations: &[Observation],
    rules: &[TriggerRule],
) -> Vec<TriggerInsight> {
    let mut insights: Vec<TriggerInsight> = rules
        .iter()
        .filter_map(|rule| analyze_rule(observations, rule))
        .collect();

    insights.sort_by(|a, b| {
        b.improvement
            .abs()
            .partial_cmp(&a.improvement.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    insights
}
