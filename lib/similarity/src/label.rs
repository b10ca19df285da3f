//! Discrete labels for similarity scores

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACCURACY_HIGH: f64 = 0.7;
pub const ACCURACY_MEDIUM: f64 = 0.4;
pub const ACCURACY_ZERO: f64 = 0.0;
pub const ACCURACY_NEGATIVE_MEDIUM: f64 = -ACCURACY_MEDIUM;
pub const ACCURACY_NEGATIVE_HIGH: f64 = -ACCURACY_HIGH;

/// Presentational bucket for a similarity score, ordered from least to most
/// likely duplicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Negative High")]
    NegativeHigh,
    #[serde(rename = "Negative Medium")]
    NegativeMedium,
    #[serde(rename = "Negative Low")]
    NegativeLow,
    Zero,
    Low,
    Medium,
    High,
}

impl ScoreLabel {
    /// Bucket a score. Thresholds are checked top-down, first match wins:
    ///
    /// | score          | label           |
    /// |----------------|-----------------|
    /// | >= 0.7         | High            |
    /// | >= 0.4         | Medium          |
    /// | > 0            | Low             |
    /// | == 0           | Zero            |
    /// | > -0.4         | Negative Low    |
    /// | >= -0.7        | Negative Medium |
    /// | otherwise      | Negative High   |
    pub fn from_score(score: f64) -> Self {
        if score >= ACCURACY_HIGH {
            ScoreLabel::High
        } else if score >= ACCURACY_MEDIUM {
            ScoreLabel::Medium
        } else if score > ACCURACY_ZERO {
            ScoreLabel::Low
        } else if score == ACCURACY_ZERO {
            ScoreLabel::Zero
        } else if score > ACCURACY_NEGATIVE_MEDIUM {
            ScoreLabel::NegativeLow
        } else if score >= ACCURACY_NEGATIVE_HIGH {
            ScoreLabel::NegativeMedium
        } else {
            ScoreLabel::NegativeHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::High => "High",
            ScoreLabel::Medium => "Medium",
            ScoreLabel::Low => "Low",
            ScoreLabel::Zero => "Zero",
            ScoreLabel::NegativeLow => "Negative Low",
            ScoreLabel::NegativeMedium => "Negative Medium",
            ScoreLabel::NegativeHigh => "Negative High",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`ScoreLabel::from_score`]
pub fn label_score(score: f64) -> ScoreLabel {
    ScoreLabel::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_buckets() {
        assert_eq!(label_score(1.0), ScoreLabel::High);
        assert_eq!(label_score(0.7), ScoreLabel::High);
        assert_eq!(label_score(0.69), ScoreLabel::Medium);
        assert_eq!(label_score(0.4), ScoreLabel::Medium);
        assert_eq!(label_score(0.39), ScoreLabel::Low);
        assert_eq!(label_score(0.01), ScoreLabel::Low);
        assert_eq!(label_score(0.0), ScoreLabel::Zero);
        assert_eq!(label_score(-0.0), ScoreLabel::Zero);
    }

    #[test]
    fn test_negative_buckets() {
        assert_eq!(label_score(-0.01), ScoreLabel::NegativeLow);
        assert_eq!(label_score(-0.39), ScoreLabel::NegativeLow);
        assert_eq!(label_score(-0.4), ScoreLabel::NegativeMedium);
        assert_eq!(label_score(-0.55), ScoreLabel::NegativeMedium);
        assert_eq!(label_score(-0.7), ScoreLabel::NegativeMedium);
        assert_eq!(label_score(-0.8), ScoreLabel::NegativeHigh);
        assert_eq!(label_score(-1.0), ScoreLabel::NegativeHigh);
    }

    #[test]
    fn test_labels_are_ordered() {
        let scores = [-1.0, -0.5, -0.2, 0.0, 0.2, 0.5, 1.0];
        let labels: Vec<_> = scores.iter().map(|s| label_score(*s)).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_display_and_serde_agree() {
        for label in [
            ScoreLabel::High,
            ScoreLabel::Medium,
            ScoreLabel::Low,
            ScoreLabel::Zero,
            ScoreLabel::NegativeLow,
            ScoreLabel::NegativeMedium,
            ScoreLabel::NegativeHigh,
        ] {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label));
        }
    }
}
