//! Similarity weights
//!
//! Defines the immutable weight set used by the pairwise scorer: how much
//! each field contributes and how far a mismatch is allowed to pull a
//! sub-score down (the floors).

use serde::{Deserialize, Serialize};

/// Score tolerance used when checking that a weight set stays in [-1, 1]
const BOUND_EPSILON: f64 = 1e-9;

/// Weights and floors for contact similarity
///
/// The defaults are the values the scoring rules were tuned with. Alternate
/// sets can be deserialized from JSON; missing keys fall back to the default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Value of a name compared on initials only
    pub partial_match: f64,

    /// Weight of the first name inside the full name
    pub first_name: f64,
    /// Weight of the last name inside the full name
    pub last_name: f64,
    /// Weight of the full name in the final score
    pub full_name: f64,

    /// Weight of the zip code inside the full address
    pub zip_code: f64,
    /// Weight of the street address inside the full address
    pub address: f64,
    /// Weight of the full address in the final score
    pub full_address: f64,

    /// Floor on name sub-scores. People rarely change names.
    pub min_name: f64,
    /// Floor on the email sub-score. A person may hold several addresses.
    pub min_email: f64,
    /// Floor on zip/address sub-scores. People move.
    pub min_address: f64,
}

pub const DEFAULT_PARTIAL_MATCH: f64 = 0.75;

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            partial_match: DEFAULT_PARTIAL_MATCH,
            first_name: 0.3,
            last_name: 0.7,
            full_name: 0.4,
            zip_code: 0.1,
            address: 0.9,
            full_address: 0.6,
            min_name: -1.0,
            min_email: -0.2,
            min_address: -(1.0 / 3.0),
        }
    }
}

impl SimilarityWeights {
    /// Validate the weight set
    /// - All values are finite
    /// - Weights are non-negative, floors lie in [-1, 0]
    /// - The partial match value lies in (0, 1]
    /// - The best and worst attainable scores stay within [-1, 1]
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(SchemaError::NonFiniteWeight(name.to_string()));
            }
        }

        for (name, value) in self.named_weights() {
            if value < 0.0 {
                return Err(SchemaError::NegativeWeight(name.to_string()));
            }
        }

        for (name, value) in [
            ("min_name", self.min_name),
            ("min_email", self.min_email),
            ("min_address", self.min_address),
        ] {
            if !(-1.0..=0.0).contains(&value) {
                return Err(SchemaError::InvalidFloor(name.to_string(), value));
            }
        }

        if self.partial_match <= 0.0 || self.partial_match > 1.0 {
            return Err(SchemaError::InvalidPartialMatch(self.partial_match));
        }

        let (min, max) = self.score_bounds();
        if min < -1.0 - BOUND_EPSILON || max > 1.0 + BOUND_EPSILON {
            return Err(SchemaError::UnboundedScore { min, max });
        }

        Ok(())
    }

    /// Lowest and highest aggregate score attainable with these weights
    ///
    /// An exact email match short-circuits to 1.0, so the maximum over the
    /// non-email path is taken with the email unknown.
    pub fn score_bounds(&self) -> (f64, f64) {
        let address_sum = self.zip_code + self.address;
        let name_sum = self.first_name + self.last_name;

        let max = self.full_name * name_sum + self.full_address * address_sum;
        let min = self.full_name * self.min_name
            + self.full_address * address_sum * self.min_address
            + self.min_email;

        (min, max.max(1.0))
    }

    fn named_weights(&self) -> [(&'static str, f64); 6] {
        [
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("full_name", self.full_name),
            ("zip_code", self.zip_code),
            ("address", self.address),
            ("full_address", self.full_address),
        ]
    }

    fn named_values(&self) -> Vec<(&'static str, f64)> {
        let mut values = self.named_weights().to_vec();
        values.extend([
            ("partial_match", self.partial_match),
            ("min_name", self.min_name),
            ("min_email", self.min_email),
            ("min_address", self.min_address),
        ]);
        values
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Weight '{0}' is not a finite number")]
    NonFiniteWeight(String),

    #[error("Weight '{0}' is negative")]
    NegativeWeight(String),

    #[error("Floor '{0}' must lie in [-1, 0], got {1}")]
    InvalidFloor(String, f64),

    #[error("Partial match value must lie in (0, 1], got {0}")]
    InvalidPartialMatch(f64),

    #[error("Weights allow scores outside [-1, 1]: min {min}, max {max}")]
    UnboundedScore { min: f64, max: f64 },
}
