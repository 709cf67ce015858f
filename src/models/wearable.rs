use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single heart-rate reading from a connected device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateReading {
  /// Beats per minute.
  pub value: i64,
  pub recorded_at: DateTime<Utc>,
}

/// Step count for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsSample {
  pub value: i64,
  pub date: NaiveDate,
}

/// Calories burned for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesSample {
  /// Kilocalories.
  pub value: f64,
  pub date: NaiveDate,
}

/// Recent sensor history from the user's fitness integration.
///
/// The caller owns fetching and ordering; sequences arrive oldest-first.
/// Nothing ties these dates to health-log dates, so a date lookup may
/// legitimately find no match. Calories are modeled for the dashboard but
/// not yet consumed by any scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WearableHistory {
  pub heart_rate: Vec<HeartRateReading>,
  pub steps: Vec<StepsSample>,
  pub calories: Vec<CaloriesSample>,
}

impl WearableHistory {
  /// Check if any sensor data is present
  pub fn has_data(&self) -> bool {
    !self.heart_rate.is_empty() || !self.steps.is_empty() || !self.calories.is_empty()
  }

  /// First step sample recorded for the given day, if any.
  pub fn steps_on(&self, date: NaiveDate) -> Option<&StepsSample> {
    self.steps.iter().find(|s| s.date == date)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
