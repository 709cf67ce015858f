//! Lexicon-based sentiment scoring for chat messages
//!
//! A fixed dictionary of weighted terms (AFINN-inspired subset covering
//! general affect and physical-symptom vocabulary) summed over whitespace
//! tokens. Cheap and deterministic, so the chat UI can re-score on every
//! message without caching.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Mood Bands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
  Happy,
  Positive,
  Neutral,
  Low,
  #[serde(rename = "Stressed/Sad")]
  StressedSad,
}

impl Mood {
  /// Classify a summed lexicon score into a mood band.
  pub fn from_score(score: i64) -> Self {
    match score {
      s if s >= 3 => Mood::Happy,
      s if s > 0 => Mood::Positive,
      s if s <= -3 => Mood::StressedSad,
      s if s < 0 => Mood::Low,
      _ => Mood::Neutral,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Mood::Happy => "Happy",
      Mood::Positive => "Positive",
      Mood::Neutral => "Neutral",
      Mood::Low => "Low",
      Mood::StressedSad => "Stressed/Sad",
    }
  }

  /// Badge color the UI renders behind the mood label.
  pub fn badge_color(&self) -> &'static str {
    match self {
      Mood::Happy => "bg-green-500",
      Mood::Positive => "bg-green-400",
      Mood::Neutral => "bg-gray-500",
      Mood::Low => "bg-orange-500",
      Mood::StressedSad => "bg-red-500",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Scoring
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
  /// Sum of matched lexicon weights. Not normalized by token count.
  pub score: i64,
  pub mood: Mood,
  pub color: String,
}

impl SentimentResult {
  /// Score a free-text message.
  ///
  /// Never fails: empty or whitespace-only input scores 0 (Neutral), and
  /// unmatched tokens contribute nothing. Tokens are lowercased and split
  /// on whitespace only, so trailing punctuation prevents a match.
  pub fn from_text(text: &str) -> Self {
    let lowered = text.to_lowercase();
    let mut score = 0;

    for word in lowered.split_whitespace() {
      if let Some(weight) = lexicon_weight(word) {
        score += weight;
      } else if let Some(weight) = lexicon_weight(strip_one_suffix(word)) {
        score += weight;
      }
    }

    let mood = Mood::from_score(score);
    Self {
      score,
      mood,
      color: mood.badge_color().to_string(),
    }
  }
}

/// Strip a single trailing suffix ("pains" -> "pain").
///
/// Not a stemmer: exactly one of `s`, `ing`, `ed` is removed and the
/// result is looked up as-is, so "loved" becomes "lov" and matches
/// nothing. Accepted approximation.
fn strip_one_suffix(word: &str) -> &str {
  if let Some(root) = word.strip_suffix('s') {
    root
  } else if let Some(root) = word.strip_suffix("ing") {
    root
  } else if let Some(root) = word.strip_suffix("ed") {
    root
  } else {
    word
  }
}

/// Fixed weighted lexicon. Positive terms +1..+4, negative -1..-4.
fn lexicon_weight(word: &str) -> Option<i64> {
  let weight = match word {
    // Positive
    "amazing" | "wonderful" => 4,
    "happy" | "joy" | "excited" | "excellent" | "great" | "best" | "love" | "energetic" => 3,
    "good" | "better" | "like" | "calm" | "relaxed" | "strong" | "healthy" => 2,
    "fine" | "ok" | "okay" | "thanks" | "thank" => 1,

    // Negative
    "cold" => -1,
    "bad" | "pain" | "hurt" | "hurts" | "ache" | "aching" | "tired" | "fatigue" | "weak"
    | "fever" | "flu" | "worry" | "worried" | "difficult" | "hard" => -2,
    "sad" | "exhausted" | "sick" | "ill" | "stressed" | "anxious" | "angry" | "mad" | "hate" => -3,
    "terrible" | "awful" | "horrible" => -4,

    _ => return None,
  };
  Some(weight)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
