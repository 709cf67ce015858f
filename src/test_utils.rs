//! Test utilities and helpers
//!
//! Mock data factories and assertion helpers shared by the unit tests.
//! Everything here is deterministic: fixed dates, no clock reads, so
//! scoring tests can pin exact values.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{HealthLogEntry, HeartRateReading, StepsSample, WearableHistory};

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// Shorthand for a calendar date in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed-base timestamp so reading sequences are reproducible.
fn timestamp(minutes_after_base: i64) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes_after_base)
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a log entry with the scored fields set and the free-text ones
/// left empty.
pub fn mock_log(
  log_date: NaiveDate,
  sleep_hours: Option<f64>,
  energy_level: Option<i64>,
  mood: Option<&str>,
) -> HealthLogEntry {
  HealthLogEntry {
    sleep_hours,
    energy_level,
    mood: mood.map(str::to_string),
    ..HealthLogEntry::empty(log_date)
  }
}

/// Create `days` consecutive daily entries with identical values.
pub fn mock_log_series(
  start: NaiveDate,
  days: u64,
  sleep_hours: Option<f64>,
  energy_level: Option<i64>,
  mood: Option<&str>,
) -> Vec<HealthLogEntry> {
  (0..days)
    .map(|i| {
      mock_log(
        start + Duration::days(i as i64),
        sleep_hours,
        energy_level,
        mood,
      )
    })
    .collect()
}

/// Minute-spaced heart-rate readings with the given bpm values.
pub fn mock_heart_rate_readings(bpms: &[i64]) -> Vec<HeartRateReading> {
  bpms
    .iter()
    .enumerate()
    .map(|(i, &value)| HeartRateReading {
      value,
      recorded_at: timestamp(i as i64),
    })
    .collect()
}

/// Wearable history carrying only heart-rate readings.
pub fn mock_wearable_with_heart_rate(bpms: &[i64]) -> WearableHistory {
  WearableHistory {
    heart_rate: mock_heart_rate_readings(bpms),
    ..WearableHistory::default()
  }
}

/// Wearable history carrying only daily step samples.
pub fn mock_wearable_with_steps(samples: &[(NaiveDate, i64)]) -> WearableHistory {
  WearableHistory {
    steps: samples
      .iter()
      .map(|&(date, value)| StepsSample { value, date })
      .collect(),
    ..WearableHistory::default()
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let log = mock_log(date(2025, 6, 1), Some(7.5), Some(8), Some("good"));
    assert!(log.validate().is_ok());
    assert_eq!(log.mood.as_deref(), Some("good"));
    assert!(log.symptoms.is_none());

    let series = mock_log_series(date(2025, 6, 1), 7, Some(8.0), Some(5), None);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].log_date, date(2025, 6, 1));
    assert_eq!(series[6].log_date, date(2025, 6, 7));
  }

  #[test]
  fn test_heart_rate_readings_are_ordered() {
    let readings = mock_heart_rate_readings(&[60, 70, 80]);
    assert_eq!(readings.len(), 3);
    assert!(readings[0].recorded_at < readings[1].recorded_at);
    assert!(readings[1].recorded_at < readings[2].recorded_at);
  }

  #[test]
  fn test_wearable_factories() {
    let with_hr = mock_wearable_with_heart_rate(&[72; 4]);
    assert!(with_hr.has_data());
    assert!(with_hr.steps.is_empty());

    let with_steps = mock_wearable_with_steps(&[(date(2025, 6, 1), 9000)]);
    assert_eq!(with_steps.steps_on(date(2025, 6, 1)).unwrap().value, 9000);
    assert!(with_steps.heart_rate.is_empty());
  }
}
