//! Display heuristics for live wearable readings
//!
//! Small classification and summary helpers the wearable dashboard renders
//! directly: heart-rate band for the latest reading, progress toward the
//! daily step goal, and the summary row for a live monitoring session.

use serde::{Deserialize, Serialize};

use crate::models::HeartRateReading;

/// Daily step goal the progress ring fills toward.
pub const DAILY_STEP_GOAL: i64 = 10_000;

/// ---------------------------------------------------------------------------
/// Heart-Rate Bands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRateStatus {
  Low,    // < 60 bpm
  Normal, // 60-100 bpm
  High,   // > 100 bpm
}

impl HeartRateStatus {
  pub fn from_bpm(bpm: i64) -> Self {
    if bpm < 60 {
      HeartRateStatus::Low
    } else if bpm > 100 {
      HeartRateStatus::High
    } else {
      HeartRateStatus::Normal
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      HeartRateStatus::Low => "Low",
      HeartRateStatus::Normal => "Normal",
      HeartRateStatus::High => "High",
    }
  }

  /// Text color the dashboard renders the reading in.
  pub fn color(&self) -> &'static str {
    match self {
      HeartRateStatus::Low => "text-blue-500",
      HeartRateStatus::Normal => "text-green-500",
      HeartRateStatus::High => "text-red-500",
    }
  }

  /// Background tint behind the reading.
  pub fn background(&self) -> &'static str {
    match self {
      HeartRateStatus::Low => "bg-blue-500/10",
      HeartRateStatus::Normal => "bg-green-500/10",
      HeartRateStatus::High => "bg-red-500/10",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Step Goal
/// ---------------------------------------------------------------------------

/// Percent of the daily step goal reached, clamped at 100.
pub fn step_goal_progress(steps: i64) -> f64 {
  ((steps as f64 / DAILY_STEP_GOAL as f64) * 100.0).min(100.0)
}

/// ---------------------------------------------------------------------------
/// Session Summary
/// ---------------------------------------------------------------------------

/// Average/min/max row for a live heart-rate monitoring session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateSessionStats {
  /// Rounded to the nearest bpm.
  pub average: i64,
  pub min: i64,
  pub max: i64,
}

impl HeartRateSessionStats {
  /// `None` for a session with no readings yet.
  pub fn compute(readings: &[HeartRateReading]) -> Option<Self> {
    if readings.is_empty() {
      return None;
    }

    let sum: i64 = readings.iter().map(|r| r.value).sum();
    let average = (sum as f64 / readings.len() as f64).round() as i64;
    let min = readings.iter().map(|r| r.value).min()?;
    let max = readings.iter().map(|r| r.value).max()?;

    Some(Self { average, min, max })
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
