use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's self-reported wellness record.
///
/// Every wellness field is optional: the daily check-in form lets users
/// log as little or as much as they want, and scoring treats absent values
/// as zero/neutral rather than an error. The free-text fields ride along
/// for the chat intake and export layers; scoring never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLogEntry {
  pub log_date: NaiveDate,
  pub sleep_hours: Option<f64>,
  pub energy_level: Option<i64>,
  pub mood: Option<String>,
  pub symptoms: Option<String>,
  pub medications: Option<String>,
  pub notes: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Boundary Validation
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
  #[error("sleep_hours must be a finite, non-negative number (got {0})")]
  InvalidSleepHours(f64),

  #[error("energy_level must be between 1 and 10 (got {0})")]
  InvalidEnergyLevel(i64),
}

impl HealthLogEntry {
  /// Create an entry for a date with nothing logged yet.
  pub fn empty(log_date: NaiveDate) -> Self {
    Self {
      log_date,
      sleep_hours: None,
      energy_level: None,
      mood: None,
      symptoms: None,
      medications: None,
      notes: None,
    }
  }

  /// Validate caller-supplied values before accepting an entry.
  ///
  /// Scoring itself is total over any entry shape; this check exists for
  /// the intake boundary so nonsense (NaN sleep, energy 47) is rejected
  /// before it ever reaches storage. Absent fields are always valid.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if let Some(hours) = self.sleep_hours {
      if !hours.is_finite() || hours < 0.0 {
        return Err(ValidationError::InvalidSleepHours(hours));
      }
    }

    if let Some(level) = self.energy_level {
      if !(1..=10).contains(&level) {
        return Err(ValidationError::InvalidEnergyLevel(level));
      }
    }

    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
