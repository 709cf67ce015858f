//! Wellness analytics core for a patient-facing health tracking app
//!
//! Two independent, pure, synchronous pieces: a lexicon sentiment scorer
//! for chat messages and a deterministic wellness forecast engine over the
//! daily health-log history (plus optional wearable data). Fetching,
//! storage, and rendering all live in the surrounding app; this crate only
//! turns records into scores.

pub mod models;
pub mod prediction;
pub mod sentiment;
pub mod vitals;

#[cfg(test)]
mod test_utils;

pub use models::{HealthLogEntry, WearableHistory};
pub use prediction::{LogStats, PredictionResult, RiskLevel, WellnessMetrics};
pub use sentiment::{Mood, SentimentResult};
pub use vitals::{HeartRateSessionStats, HeartRateStatus};
