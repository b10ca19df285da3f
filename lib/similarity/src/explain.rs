//! Explainability for pair scores
//!
//! Exposes the intermediate values that make up a pair score so a reviewer
//! can see why two contacts were (or were not) flagged as duplicates.

use serde::Serialize;

/// Per-component contributions of a single pair score
///
/// Name and address components are already weighted; `email` is the floored
/// elementary value, which enters the total unweighted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Floored email similarity
    pub email: f64,
    /// Whether an exact email match decided the score on its own
    pub email_override: bool,
    /// Weighted first name similarity
    pub first_name: f64,
    /// Weighted last name similarity
    pub last_name: f64,
    /// Full name contribution to the total
    pub full_name: f64,
    /// Whether a single-name mismatch collapsed the full name score
    pub name_mismatch: bool,
    /// Weighted zip code similarity
    pub zip_code: f64,
    /// Weighted street address similarity
    pub address: f64,
    /// Full address contribution to the total
    pub full_address: f64,
    /// Final score
    pub total: f64,
}

impl ScoreBreakdown {
    /// Breakdown of a pair decided by an exact email match
    pub fn email_match(value: f64) -> Self {
        Self {
            email: value,
            email_override: true,
            total: value,
            ..Default::default()
        }
    }

    /// Name of the component with the largest absolute contribution
    pub fn dominant_component(&self) -> &'static str {
        if self.email_override {
            return "email";
        }
        [
            ("full_name", self.full_name),
            ("full_address", self.full_address),
            ("email", self.email),
        ]
        .into_iter()
        .fold(("full_name", f64::NEG_INFINITY), |best, (name, value)| {
            if value.abs() > best.1 {
                (name, value.abs())
            } else {
                best
            }
        })
        .0
    }
}
