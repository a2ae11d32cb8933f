//! # Moodscope
//!
//! Mood journal analytics - turns daily mood check-ins into correlations,
//! trigger comparisons and seasonal patterns.
//!
//! ## Features
//!
//! - **Correlations**: Pearson correlation between mood and sleep, exercise, stress
//! - **Triggers**: mood on high-factor days vs low-factor days
//! - **Seasonal patterns**: per-month averages, variance and common tags
//! - **Categories**: weather averages and time-of-day counts
//! - **Recommendations**: rule-based guidance from the aggregates
//!
//! ## Modules
//!
//! - [`observation`]: The mood check-in record
//! - [`analytics`]: Pure aggregators over observation snapshots
//! - [`journal`]: CSV/JSON journal loading
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moodscope::analytics::{analyze, correlate_factor};
//! use moodscope::config::AnalysisConfig;
//! use moodscope::observation::{Factor, Observation};
//!
//! let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let journal = vec![
//!     Observation::new(date(1), 4.0).sleep_hours(5.0).tag("work"),
//!     Observation::new(date(2), 8.0).sleep_hours(8.5).tag("outdoor"),
//!     Observation::new(date(3), 6.0).sleep_hours(7.0),
//! ];
//!
//! let sleep = correlate_factor(&journal, Factor::Sleep);
//! assert!(sleep.correlation > 0.9);
//!
//! let report = analyze(&journal, &AnalysisConfig::default());
//! assert_eq!(report.seasonal[0].month, "January");
//! ```

pub mod analytics;
pub mod config;
pub mod journal;
pub mod observation;

// Re-export top-level types for convenience
pub use observation::{Factor, Observation, ObservationError, TimeOfDay};

pub use analytics::{
    analyze, CategoricalAggregate, CorrelationResult, Impact, MoodReport, MoodSummary,
    ReportCache, SeasonalPattern, TriggerInsight, TriggerRule,
};

pub use journal::{load_journal, CsvImporter, JournalError, JournalImport};

pub use config::{AnalysisConfig, Config, ConfigDiscovery, ConfigError, LoggingConfig};
