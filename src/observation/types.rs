//! Core data types for mood observations
//!
//! This module defines the record every analytics component consumes:
//! - `Observation`: A single mood check-in with optional context
//! - `TimeOfDay`: The bucket a check-in was made in
//! - `Factor`: The numeric context fields that can be correlated with mood

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ObservationError, ObservationResult};

/// Lowest valid mood score
pub const MOOD_MIN: f64 = 0.0;
/// Highest valid mood score
pub const MOOD_MAX: f64 = 10.0;

/// A single mood check-in
///
/// Optional factors are `None` when they were not recorded. A recorded zero
/// (e.g. no exercise that day) is `Some(0.0)` and is a real sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Calendar date of the check-in
    pub date: NaiveDate,
    /// Mood on a 0-10 scale
    pub mood_score: f64,
    /// Free-text labels, unique within one observation
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

impl Observation {
    /// Create an observation with only the required fields
    pub fn new(date: NaiveDate, mood_score: f64) -> Self {
        Self {
            date,
            mood_score,
            tags: Vec::new(),
            sleep_hours: None,
            exercise_minutes: None,
            stress_level: None,
            weather: None,
            time_of_day: None,
        }
    }

    /// Create an observation, rejecting moods outside 0-10
    pub fn checked(date: NaiveDate, mood_score: f64) -> ObservationResult<Self> {
        let obs = Self::new(date, mood_score);
        obs.validate()?;
        Ok(obs)
    }

    /// Check the mood score is a number within 0-10
    pub fn validate(&self) -> ObservationResult<()> {
        if !self.mood_score.is_finite() || !(MOOD_MIN..=MOOD_MAX).contains(&self.mood_score) {
            return Err(ObservationError::InvalidMood(self.mood_score));
        }
        Ok(())
    }

    /// Builder method: add a tag (duplicates and blanks are ignored)
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    /// Builder method: add multiple tags
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, |obs, t| obs.tag(t))
    }

    /// Builder method: set hours slept
    pub fn sleep_hours(mut self, hours: f64) -> Self {
        self.sleep_hours = Some(hours);
        self
    }

    /// Builder method: set minutes of exercise
    pub fn exercise_minutes(mut self, minutes: f64) -> Self {
        self.exercise_minutes = Some(minutes);
        self
    }

    /// Builder method: set stress level
    pub fn stress_level(mut self, level: f64) -> Self {
        self.stress_level = Some(level);
        self
    }

    /// Builder method: set weather label
    pub fn weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    /// Builder method: set time-of-day bucket
    pub fn time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Check if this observation carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Value of a numeric factor, if recorded
    pub fn factor(&self, factor: Factor) -> Option<f64> {
        factor.value(self)
    }
}

/// Part of the day a check-in was made in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Get all buckets for iteration
    pub fn all() -> &'static [TimeOfDay] {
        &[
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            other => Err(ObservationError::UnknownTimeOfDay(other.to_string())),
        }
    }
}

/// Numeric context recorded alongside mood
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Sleep,
    Exercise,
    Stress,
}

impl Factor {
    /// Get all factors in their canonical order
    pub fn all() -> &'static [Factor] {
        &[Factor::Sleep, Factor::Exercise, Factor::Stress]
    }

    /// Extract this factor from an observation
    pub fn value(&self, observation: &Observation) -> Option<f64> {
        match self {
            Factor::Sleep => observation.sleep_hours,
            Factor::Exercise => observation.exercise_minutes,
            Factor::Stress => observation.stress_level,
        }
    }

    /// Field name used in journals and reports
    pub fn name(&self) -> &'static str {
        match self {
            Factor::Sleep => "sleep_hours",
            Factor::Exercise => "exercise_minutes",
            Factor::Stress => "stress_level",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
