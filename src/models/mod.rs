pub mod health_log;
pub mod wearable;

pub use health_log::{HealthLogEntry, ValidationError};
pub use wearable::{CaloriesSample, HeartRateReading, StepsSample, WearableHistory};
