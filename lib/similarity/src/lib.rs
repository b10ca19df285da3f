//! # dedupx Similarity
//!
//! Pairwise similarity scoring for contact records.
//!
//! Every unordered pair of contacts gets a score in `[-1.0, 1.0]` estimating
//! how likely the two records describe the same person.
//!
//! ## Features
//!
//! - **Field comparators**: Exact-match comparison with an "unknown" outcome
//!   for empty values and an initials carve-out for names
//! - **Weights**: Immutable, validated weight set with per-field floors
//! - **Pairwise scoring**: Email short-circuit, all-or-nothing names,
//!   summed address components
//! - **Reports**: Thresholded rows rendered as numbers or labels, with an
//!   optional per-field breakdown
//!
//! ## Example
//!
//! ```rust
//! use dedupx_core::{Contact, ContactCollection};
//! use dedupx_similarity::{PairwiseScorer, ReportConfig, ScoreLabel};
//!
//! let collection = ContactCollection::from_sequence(vec![
//!     Contact::default().with_first_name("baz").with_last_name("foo"),
//!     Contact::default().with_first_name("baz").with_last_name("foo"),
//! ]);
//!
//! let scorer = PairwiseScorer::default();
//! let rows = scorer.generate_report(&collection, &ReportConfig::default()).unwrap();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].accuracy.to_string(), ScoreLabel::Medium.to_string());
//! ```
//!
//! ## Score composition
//!
//! ```text
//!  email ──(exact match)──────────────────────────> 1.0
//!    │
//!    └─ floored ─────────────────────────┐
//!  first ─┐                              │
//!         ├─ full name (0.4) ────────────┼──> total
//!  last  ─┘                              │
//!  zip   ─┐                              │
//!         ├─ full address (0.6) ─────────┘
//!  addr  ─┘
//! ```

pub mod distance;
pub mod explain;
pub mod label;
pub mod report;
pub mod schema;
pub mod scorer;

// Re-export main types for convenience
pub use distance::{
    elementary_similarity,
    name_similarity,
    name_similarity_with_partial,
    VAL_MATCH,
    VAL_MISMATCH,
    VAL_UNKNOWN,
};
pub use explain::ScoreBreakdown;
pub use label::{label_score, ScoreLabel};
pub use report::{RenderedScore, ReportConfig, ReportRow, ReportSummary};
pub use schema::{SchemaError, SimilarityWeights, DEFAULT_PARTIAL_MATCH};
pub use scorer::{ContactScores, PairScores, PairwiseScorer};
