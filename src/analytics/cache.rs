//! Report memoization
//!
//! A view that switches between tabs re-requests analytics over the same
//! snapshot. `ReportCache` keys finished reports by a hash of the snapshot so
//! repeated requests skip the O(n) passes. Purely an optimization: a miss
//! computes exactly what `analyze` would.

use crate::analytics::report::{analyze, MoodReport};
use crate::config::AnalysisConfig;
use crate::observation::Observation;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

/// Fingerprint of an observation snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotKey(u64);

impl SnapshotKey {
    /// Hash every field of every observation, in order
    pub fn of(observations: &[Observation]) -> Self {
        let mut hasher = DefaultHasher::new();
        observations.len().hash(&mut hasher);
        for obs in observations {
            obs.date.hash(&mut hasher);
            obs.mood_score.to_bits().hash(&mut hasher);
            obs.tags.hash(&mut hasher);
            obs.sleep_hours.map(f64::to_bits).hash(&mut hasher);
            obs.exercise_minutes.map(f64::to_bits).hash(&mut hasher);
            obs.stress_level.map(f64::to_bits).hash(&mut hasher);
            obs.weather.hash(&mut hasher);
            obs.time_of_day.hash(&mut hasher);
        }
        Self(hasher.finish())
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded cache of reports computed under one configuration
pub struct ReportCache {
    config: AnalysisConfig,
    capacity: usize,
    entries: HashMap<SnapshotKey, MoodReport>,
    /// Insertion order, oldest first
    order: VecDeque<SnapshotKey>,
    hits: u64,
    misses: u64,
}

impl ReportCache {
    pub fn new(config: AnalysisConfig) -> Self {
        let capacity = config.cache_capacity.max(1);
        Self {
            config,
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached report for this snapshot, computing it on a miss
    pub fn report(&mut self, observations: &[Observation]) -> &MoodReport {
        let key = SnapshotKey::of(observations);

        if self.entries.contains_key(&key) {
            self.hits += 1;
            tracing::debug!(?key, "Report cache hit");
        } else {
            self.misses += 1;
            let report = analyze(observations, &self.config);
            self.insert(key, report);
        }

        &self.entries[&key]
    }

    fn insert(&mut self, key: SnapshotKey, report: MoodReport) {
        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.entries.insert(key, report);
        self.order.push_back(key);
    }

    /// Drop every cached report
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
