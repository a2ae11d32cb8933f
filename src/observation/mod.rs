//! Observation model
//!
//! The normalized mood check-in record consumed by every analytics component.

mod error;
mod types;

pub use error::{ObservationError, ObservationResult};
pub use types::{Factor, Observation, TimeOfDay, MOOD_MAX, MOOD_MIN};
