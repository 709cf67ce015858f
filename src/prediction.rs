//! Deterministic wellness forecast engine
//!
//! Consumes the recent daily health-log history (plus optional wearable
//! sensor history) and produces a current/predicted pair of normalized
//! wellness metrics, a coarse risk tier, and a one-line insight for the
//! dashboard. Pure and synchronous: no I/O, no clock reads, and the output
//! is a function of the inputs alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{HealthLogEntry, WearableHistory};

/// ---------------------------------------------------------------------------
/// Scoring Constants
/// ---------------------------------------------------------------------------

/// At most the last 7 daily entries feed the trend.
const RECENT_WINDOW: usize = 7;

/// Hours of sleep worth a full 100-point sleep score.
const SLEEP_REFERENCE_HOURS: f64 = 8.0;

/// Step count a day must exceed to earn the energy boost.
const ACTIVE_STEPS_THRESHOLD: i64 = 8000;
const ACTIVITY_ENERGY_BOOST: f64 = 10.0;

/// Heart-rate stress term: engaged once more than `HEART_RATE_MIN_READINGS`
/// readings exist, over the mean of the last (up to) `HEART_RATE_WINDOW`.
const HEART_RATE_MIN_READINGS: usize = 5;
const HEART_RATE_WINDOW: usize = 10;
const ELEVATED_HEART_RATE_BPM: f64 = 100.0;
const STRESS_PENALTY_POINTS: f64 = 20.0;

/// Overall score weights: sleep 0.4, energy 0.3, mood 0.3.
const SLEEP_WEIGHT: f64 = 0.4;
const ENERGY_WEIGHT: f64 = 0.3;
const MOOD_WEIGHT: f64 = 0.3;

const INSIGHT_POSITIVE: &str = "Your wellness trend is positive. Keep it up!";
const INSIGHT_PACE_CAUTION: &str = "Caution: fast-paced trend. Consider light activity.";
const INSIGHT_BURNOUT_WARNING: &str =
  "Warning: High risk of burnout detected. Prioritize rest tomorrow.";
const INSIGHT_ELEVATED_HEART_RATE: &str =
  "Warning: Elevated heart rate alongside a declining trend. Prioritize rest and recovery tomorrow.";

/// ---------------------------------------------------------------------------
/// Mood Table
/// ---------------------------------------------------------------------------

/// Map a self-reported mood label to a 0-100 score.
///
/// Independent of the chat sentiment lexicon: this table scores the daily
/// check-in's categorical mood field, and unknown or missing labels land on
/// 50 (neutral) rather than zero. The dashboard's mood chart runs labels
/// through the same table.
pub fn mood_to_number(mood: Option<&str>) -> f64 {
  match mood.map(|m| m.to_lowercase()).as_deref() {
    Some("excellent") => 100.0,
    Some("happy") => 90.0,
    Some("good") => 80.0,
    Some("okay") => 60.0,
    Some("neutral") => 50.0,
    Some("low") => 40.0,
    Some("sad") => 30.0,
    Some("bad") => 20.0,
    Some("terrible") => 10.0,
    _ => 50.0,
  }
}

/// ---------------------------------------------------------------------------
/// Wellness Metrics
/// ---------------------------------------------------------------------------

/// Normalized 0-100 scores for one state (current or predicted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessMetrics {
  pub sleep: f64,
  pub energy: f64,
  pub mood: f64,
  /// Always the weighted combination of the other three, never set
  /// independently.
  pub overall: f64,
}

impl WellnessMetrics {
  fn from_components(sleep: f64, energy: f64, mood: f64) -> Self {
    let overall = (SLEEP_WEIGHT * sleep + ENERGY_WEIGHT * energy + MOOD_WEIGHT * mood).round();
    Self {
      sleep,
      energy,
      mood,
      overall,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Risk Tiers
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
  Low,
  Moderate,
  High,
}

impl RiskLevel {
  /// Classify a (possibly stress-adjusted) overall score.
  fn from_overall(overall: f64) -> Self {
    match overall {
      o if o < 50.0 => RiskLevel::High,
      o if o < 70.0 => RiskLevel::Moderate,
      _ => RiskLevel::Low,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      RiskLevel::Low => "Low",
      RiskLevel::Moderate => "Moderate",
      RiskLevel::High => "High",
    }
  }
}

fn insight_for(risk: RiskLevel, heart_rate_stress: bool) -> &'static str {
  match risk {
    RiskLevel::High if heart_rate_stress => INSIGHT_ELEVATED_HEART_RATE,
    RiskLevel::High => INSIGHT_BURNOUT_WARNING,
    RiskLevel::Moderate => INSIGHT_PACE_CAUTION,
    RiskLevel::Low => INSIGHT_POSITIVE,
  }
}

/// ---------------------------------------------------------------------------
/// Prediction
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
  /// Scores for the most recent log entry.
  pub current: WellnessMetrics,
  /// Recency-weighted forecast over the trend window.
  pub predicted: WellnessMetrics,
  pub risk_level: RiskLevel,
  pub insight: String,
}

impl PredictionResult {
  /// Compute a forecast from the log history and optional wearable data.
  ///
  /// Returns `None` when fewer than 2 entries exist - a trend needs at
  /// least two points. That is insufficient data, not an error; callers
  /// hide the forecast card until enough history accumulates. Missing
  /// entry fields never fail: absent sleep and energy score 0, absent
  /// mood scores 50.
  ///
  /// The heart-rate stress penalty feeds only the risk/insight
  /// classification; `current` and the returned `predicted` metrics stay
  /// unadjusted.
  pub fn compute(logs: &[HealthLogEntry], wearable: Option<&WearableHistory>) -> Option<Self> {
    if logs.len() < 2 {
      debug!(log_count = logs.len(), "not enough history for a forecast");
      return None;
    }

    // Sort ascending by date; stable, so equal dates keep input order
    let mut sorted: Vec<&HealthLogEntry> = logs.iter().collect();
    sorted.sort_by_key(|log| log.log_date);

    let recent = &sorted[sorted.len().saturating_sub(RECENT_WINDOW)..];

    // Linear recency weights: oldest = 1, most recent = N
    let mut total_sleep = 0.0;
    let mut total_energy = 0.0;
    let mut total_mood = 0.0;
    let mut weight_sum = 0.0;

    for (index, log) in recent.iter().enumerate() {
      let weight = (index + 1) as f64;
      weight_sum += weight;

      total_sleep += sleep_score(log.sleep_hours) * weight;
      total_energy +=
        energy_score(log.energy_level, active_day(wearable, log.log_date)) * weight;
      total_mood += mood_to_number(log.mood.as_deref()) * weight;
    }

    let predicted = WellnessMetrics::from_components(
      (total_sleep / weight_sum).round(),
      (total_energy / weight_sum).round(),
      (total_mood / weight_sum).round(),
    );

    // Current state comes from the most recent entry alone, unweighted
    let last = recent[recent.len() - 1];
    let current = WellnessMetrics::from_components(
      sleep_score(last.sleep_hours),
      energy_score(last.energy_level, active_day(wearable, last.log_date)),
      mood_to_number(last.mood.as_deref()),
    );

    let heart_rate_stress = average_recent_heart_rate(wearable)
      .map_or(false, |avg| avg > ELEVATED_HEART_RATE_BPM);

    // TODO: confirm with product whether the penalty should also lower the
    // returned current/predicted overall scores, or keep adjusting only the
    // risk classification as it does today
    let final_overall = if heart_rate_stress {
      debug!(
        predicted_overall = predicted.overall,
        "elevated heart rate, applying stress penalty"
      );
      (predicted.overall - STRESS_PENALTY_POINTS).max(0.0)
    } else {
      predicted.overall
    };

    let risk_level = RiskLevel::from_overall(final_overall);
    let insight = insight_for(risk_level, heart_rate_stress).to_string();

    Some(Self {
      current,
      predicted,
      risk_level,
      insight,
    })
  }

  /// Serialize to pretty JSON for the consuming layer.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// Normalize sleep hours to 0-100, with 8h as the 100-point reference.
/// More than 8h clips at 100; missing sleep scores 0.
fn sleep_score(hours: Option<f64>) -> f64 {
  ((hours.unwrap_or(0.0) / SLEEP_REFERENCE_HOURS) * 100.0).min(100.0)
}

/// Map the 1-10 energy scale to 10-100 (missing scores 0), plus the
/// activity boost, clamped at 100.
fn energy_score(level: Option<i64>, active_day: bool) -> f64 {
  let score = level.unwrap_or(0) as f64 * 10.0;
  if active_day {
    (score + ACTIVITY_ENERGY_BOOST).min(100.0)
  } else {
    score
  }
}

/// A day counts as active when the wearable recorded more than
/// `ACTIVE_STEPS_THRESHOLD` steps on that date.
fn active_day(wearable: Option<&WearableHistory>, date: NaiveDate) -> bool {
  wearable
    .and_then(|w| w.steps_on(date))
    .map_or(false, |s| s.value > ACTIVE_STEPS_THRESHOLD)
}

/// Mean of the last (up to) 10 heart-rate readings, once more than 5
/// exist. With 6-9 readings the window simply under-fills.
fn average_recent_heart_rate(wearable: Option<&WearableHistory>) -> Option<f64> {
  let readings = &wearable?.heart_rate;
  if readings.len() <= HEART_RATE_MIN_READINGS {
    return None;
  }

  let window = &readings[readings.len().saturating_sub(HEART_RATE_WINDOW)..];
  let sum: i64 = window.iter().map(|r| r.value).sum();
  Some(sum as f64 / window.len() as f64)
}

/// ---------------------------------------------------------------------------
/// Dashboard Summary
/// ---------------------------------------------------------------------------

/// Stat-tile summary over the full log history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogStats {
  pub total_logs: usize,
  pub avg_sleep_hours: Option<f64>,
  pub avg_energy: Option<f64>,
}

impl LogStats {
  /// Entries missing a field contribute zero to that sum, while the
  /// divisor counts only entries that logged a non-zero value. A history
  /// where nothing was logged for a field yields `None` for its average.
  pub fn compute(logs: &[HealthLogEntry]) -> Self {
    let sleep_sum: f64 = logs.iter().map(|l| l.sleep_hours.unwrap_or(0.0)).sum();
    let sleep_count = logs
      .iter()
      .filter(|l| l.sleep_hours.map_or(false, |h| h != 0.0))
      .count();

    let energy_sum: f64 = logs
      .iter()
      .map(|l| l.energy_level.unwrap_or(0) as f64)
      .sum();
    let energy_count = logs
      .iter()
      .filter(|l| l.energy_level.map_or(false, |e| e != 0))
      .count();

    Self {
      total_logs: logs.len(),
      avg_sleep_hours: (sleep_count > 0).then(|| sleep_sum / sleep_count as f64),
      avg_energy: (energy_count > 0).then(|| energy_sum / energy_count as f64),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
