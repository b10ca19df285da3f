//! Report generation
//!
//! Turns pair scores into ordered report rows, filtered by a minimum score
//! and rendered either as a two-decimal number or as a [`ScoreLabel`].

use crate::explain::ScoreBreakdown;
use crate::label::ScoreLabel;
use crate::scorer::{PairScores, PairwiseScorer};
use dedupx_core::{ContactCollection, ContactId, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Report generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows with a score below this value are left out
    pub threshold: f64,
    /// Render scores as labels instead of numbers
    pub use_labels: bool,
    /// Attach a per-field breakdown to every row
    pub explain: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            use_labels: true,
            explain: false,
        }
    }
}

impl ReportConfig {
    pub fn new(threshold: f64, use_labels: bool) -> Self {
        Self {
            threshold,
            use_labels,
            explain: false,
        }
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Render a score according to this configuration
    pub fn render(&self, score: f64) -> RenderedScore {
        if self.use_labels {
            RenderedScore::Label(ScoreLabel::from_score(score))
        } else {
            RenderedScore::Numeric(score)
        }
    }
}

/// A score as it appears in the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum RenderedScore {
    /// Printed with exactly two decimals
    Numeric(f64),
    Label(ScoreLabel),
}

impl fmt::Display for RenderedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedScore::Numeric(score) => write!(f, "{:.2}", score),
            RenderedScore::Label(label) => write!(f, "{}", label),
        }
    }
}

impl From<RenderedScore> for String {
    fn from(rendered: RenderedScore) -> Self {
        rendered.to_string()
    }
}

/// One row of the report: a scored pair with `source < matched`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub source: ContactId,
    #[serde(rename = "match")]
    pub matched: ContactId,
    pub score: f64,
    pub accuracy: RenderedScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl PairwiseScorer {
    /// Generate the report for every unordered pair of the collection
    ///
    /// Rows come in ascending `(source, matched)` order and only pairs with
    /// `score >= threshold` are kept.
    pub fn generate_report(
        &self,
        collection: &ContactCollection,
        config: &ReportConfig,
    ) -> Result<Vec<ReportRow>> {
        config.validate()?;
        let scores = self.all_pair_scores(collection)?;
        self.rows_from_scores(collection, &scores, config)
    }

    /// Same as [`generate_report`](Self::generate_report), scoring in parallel
    pub fn par_generate_report(
        &self,
        collection: &ContactCollection,
        config: &ReportConfig,
    ) -> Result<Vec<ReportRow>> {
        config.validate()?;
        let scores = self.par_all_pair_scores(collection)?;
        self.rows_from_scores(collection, &scores, config)
    }

    fn rows_from_scores(
        &self,
        collection: &ContactCollection,
        scores: &PairScores,
        config: &ReportConfig,
    ) -> Result<Vec<ReportRow>> {
        let mut rows = Vec::new();

        for (&source, matches) in scores {
            for (&matched, &score) in matches {
                if score < config.threshold {
                    continue;
                }

                let breakdown = if config.explain {
                    Some(self.breakdown(collection.contact(source)?, collection.contact(matched)?))
                } else {
                    None
                };

                rows.push(ReportRow {
                    source,
                    matched,
                    score,
                    accuracy: config.render(score),
                    breakdown,
                });
            }
        }

        info!(
            contacts = collection.len(),
            pairs = collection.pair_count(),
            rows = rows.len(),
            threshold = config.threshold,
            "report generated"
        );
        Ok(rows)
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of contacts in the collection
    pub contacts_count: usize,
    /// Number of pairs scored
    pub pairs_count: usize,
    /// Number of rows kept after thresholding
    pub rows_count: usize,
    /// Best score among the kept rows
    pub best_score: Option<f64>,
    /// Kept rows per label
    pub label_counts: BTreeMap<ScoreLabel, usize>,
    /// Largest contributor to the best row's score, when rows carry breakdowns
    pub top_component: Option<&'static str>,
}

impl ReportSummary {
    pub fn compute(collection: &ContactCollection, rows: &[ReportRow]) -> Self {
        let mut label_counts = BTreeMap::new();
        for row in rows {
            *label_counts.entry(ScoreLabel::from_score(row.score)).or_insert(0) += 1;
        }

        // First row wins ties so the result follows report order
        let best_row = rows.iter().fold(None, |best: Option<&ReportRow>, row| match best {
            Some(b) if b.score >= row.score => Some(b),
            _ => Some(row),
        });

        Self {
            contacts_count: collection.len(),
            pairs_count: collection.pair_count(),
            rows_count: rows.len(),
            best_score: best_row.map(|r| r.score),
            label_counts,
            top_component: best_row
                .and_then(|r| r.breakdown.as_ref())
                .map(ScoreBreakdown::dominant_component),
        }
    }
}
