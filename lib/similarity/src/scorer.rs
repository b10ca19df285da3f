//! Pairwise scorer for contact similarity
//!
//! Combines elementary field comparisons into one bounded score per contact
//! pair and enumerates every unordered pair of a collection exactly once.

use crate::distance::{elementary_similarity, name_similarity_with_partial, VAL_MATCH};
use crate::explain::ScoreBreakdown;
use crate::schema::{SchemaError, SimilarityWeights};
use dedupx_core::{Contact, ContactCollection, ContactId, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Scores of one source contact against every contact with a greater ID
pub type ContactScores = BTreeMap<ContactId, f64>;

/// Scores of every unordered pair, keyed by the smaller ID first
pub type PairScores = BTreeMap<ContactId, ContactScores>;

/// Scorer that computes the similarity of contact pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseScorer {
    weights: SimilarityWeights,
}

impl PairwiseScorer {
    /// Create a new scorer, validating the weights
    pub fn new(weights: SimilarityWeights) -> std::result::Result<Self, SchemaError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Get a reference to the weights
    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Similarity of two contacts in [-1.0, 1.0]
    ///
    /// Symmetric in its arguments: every sub-comparison is order independent.
    pub fn similarity(&self, a: &Contact, b: &Contact) -> f64 {
        self.breakdown(a, b).total
    }

    /// Compute the similarity of two contacts with every intermediate value
    ///
    /// - An exact email match returns 1.0 without consulting other fields
    /// - Either name mismatching collapses the full name to its floor
    /// - Zip code and address are simply summed
    pub fn breakdown(&self, a: &Contact, b: &Contact) -> ScoreBreakdown {
        let w = &self.weights;

        let email = w.min_email.max(elementary_similarity(&a.email, &b.email));
        if email == VAL_MATCH {
            return ScoreBreakdown::email_match(VAL_MATCH);
        }

        let first_name = w.first_name
            * w.min_name.max(name_similarity_with_partial(
                &a.first_name,
                &b.first_name,
                w.partial_match,
            ));
        let last_name = w.last_name
            * w.min_name.max(name_similarity_with_partial(
                &a.last_name,
                &b.last_name,
                w.partial_match,
            ));

        // Both names must agree; one mismatch is a full name mismatch
        let name_mismatch = first_name < 0.0 || last_name < 0.0;
        let full_name = if name_mismatch {
            w.full_name * w.min_name
        } else {
            w.full_name * (first_name + last_name)
        };

        let zip_code =
            w.zip_code * w.min_address.max(elementary_similarity(&a.zip_code, &b.zip_code));
        let address =
            w.address * w.min_address.max(elementary_similarity(&a.address, &b.address));
        let full_address = w.full_address * (zip_code + address);

        ScoreBreakdown {
            email,
            email_override: false,
            first_name,
            last_name,
            full_name,
            name_mismatch,
            zip_code,
            address,
            full_address,
            total: full_name + full_address + email,
        }
    }

    /// Score a contact against every contact with a strictly greater ID
    ///
    /// Fails with `ContactNotFound` if `id` is not in the collection.
    pub fn score(&self, collection: &ContactCollection, id: ContactId) -> Result<ContactScores> {
        let source = collection.contact(id)?;
        let scores: ContactScores = collection
            .iter_after(id)
            .map(|(match_id, candidate)| {
                let score = self.similarity(source, candidate);
                trace!(source = id, matched = match_id, score, "scored pair");
                (match_id, score)
            })
            .collect();

        debug!(source = id, pairs = scores.len(), "scored contact");
        Ok(scores)
    }

    /// Score every unordered pair of the collection once
    ///
    /// Every contact ID gets an entry, the greatest one with no scores, for a
    /// total of n(n-1)/2 scored pairs.
    pub fn all_pair_scores(&self, collection: &ContactCollection) -> Result<PairScores> {
        collection
            .ids()
            .map(|id| self.score(collection, id).map(|scores| (id, scores)))
            .collect()
    }

    /// Parallel version of [`all_pair_scores`](Self::all_pair_scores)
    ///
    /// Work is partitioned by source ID; the result is identical.
    pub fn par_all_pair_scores(&self, collection: &ContactCollection) -> Result<PairScores> {
        let ids: Vec<ContactId> = collection.ids().collect();
        ids.into_par_iter()
            .map(|id| self.score(collection, id).map(|scores| (id, scores)))
            .collect()
    }
}
