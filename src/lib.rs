//! # dedupx
//!
//! Pairwise contact deduplication.
//!
//! dedupx scores every unordered pair of contact records with a similarity in
//! `[-1.0, 1.0]` and reports the pairs likely to describe the same person.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install dedupx
//! dedupx contacts.csv --threshold 0.4 > report.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use dedupx::prelude::*;
//!
//! let csv = "\
//! name,name1,email,postalZip,address
//! C,F,mollis.lectus.pede@outlook.net,,449-6990 Tellus. Rd.
//! Ciara,F,non.lacinia.at@zoho.ca,39746,
//! ";
//! let collection = ContactLoader::default().load(csv.as_bytes()).unwrap();
//!
//! let scorer = PairwiseScorer::default();
//! let rows = scorer
//!     .generate_report(&collection, &ReportConfig::new(0.0, false))
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! ReportWriter::new(ReportFormat::Csv).write(&rows, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "ContactID Source,ContactID Match,Accuracy\n0,1,0.10\n"
//! );
//! ```
//!
//! ## Crate Structure
//!
//! - `dedupx-core` - Contacts, contact collections and errors
//! - `dedupx-similarity` - Field comparators, weights, pairwise scoring and reports
//! - `dedupx-io` - CSV loading and report writers

// Re-export core types
pub use dedupx_core::{Contact, ContactCollection, ContactField, ContactId, Error, Result};

// Re-export scoring
pub use dedupx_similarity::{
    label_score, PairScores, PairwiseScorer, RenderedScore, ReportConfig, ReportRow,
    ReportSummary, ScoreBreakdown, ScoreLabel, SimilarityWeights,
};

// Re-export IO
pub use dedupx_io::{ColumnMapping, ContactLoader, IoError, ReportFormat, ReportWriter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Contact, ContactCollection, ContactField, ContactId,
        Error, Result,
        PairwiseScorer, SimilarityWeights,
        ReportConfig, ReportRow, RenderedScore, ScoreLabel,
        ContactLoader, ReportFormat, ReportWriter,
    };
}

/// Field comparison functions
pub mod distance {
    pub use dedupx_similarity::distance::{elementary_similarity, name_similarity};
}
