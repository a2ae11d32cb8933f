//! Mood analytics engine
//!
//! Pure, synchronous reductions over a slice of [`Observation`]s:
//! - Correlation Engine: Pearson correlation between mood and each factor
//! - Trigger Analyzer: mood on high-factor days vs low-factor days
//! - Seasonal Aggregator: per-month mean, variance and common tags
//! - Categorical Aggregators: weather averages and time-of-day counts
//! - Recommendation Generator: rule-based advice from aggregates
//!
//! No function here fails or mutates its input. Empty or degenerate input
//! yields empty lists or neutral values.
//!
//! [`Observation`]: crate::observation::Observation

mod cache;
mod categorical;
mod correlations;
mod recommendations;
mod report;
mod seasonal;
pub mod stats;
mod triggers;

pub use cache::{CacheStats, ReportCache, SnapshotKey};
pub use categorical::{
    aggregate_by_category, aggregate_by_time_of_day, aggregate_by_weather, CategoricalAggregate,
    CategoryMeasure,
};
pub use correlations::{
    correlate, correlate_all, correlate_factor, CorrelationResult, CorrelationStrength, Impact,
    MAX_CONFIDENCE,
};
pub use recommendations::{
    generate_recommendations, RecommendationRule, RuleContext, MAX_RECOMMENDATIONS, RULES,
};
pub use report::{analyze, MoodReport, MoodSummary};
pub use seasonal::{aggregate_by_month, SeasonalPattern, COMMON_TAG_LIMIT};
pub use triggers::{analyze_rule, analyze_trigger, analyze_triggers, TriggerInsight, TriggerRule};
