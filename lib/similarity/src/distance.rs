//! Field comparison functions
//!
//! Elementary per-field comparisons used by the pairwise scorer. Every
//! function returns one of a few fixed values: a match, a mismatch, "unknown"
//! when either side is empty, and for names a partial match on initials.
//! Comparisons are exact: no case folding, no edit distance.

use crate::schema::DEFAULT_PARTIAL_MATCH;

/// Both values are known and equal
pub const VAL_MATCH: f64 = 1.0;
/// Both values are known and differ
pub const VAL_MISMATCH: f64 = -1.0;
/// At least one value is unknown
pub const VAL_UNKNOWN: f64 = 0.0;

/// Compare two field values for exact equality
///
/// # Returns
/// * [`VAL_UNKNOWN`] if either value is empty
/// * [`VAL_MATCH`] if the values are byte-for-byte equal
/// * [`VAL_MISMATCH`] otherwise
pub fn elementary_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return VAL_UNKNOWN;
    }
    if a == b {
        VAL_MATCH
    } else {
        VAL_MISMATCH
    }
}

/// Compare two names, treating single-byte values as initials
///
/// Uses the default partial match value of 0.75.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    name_similarity_with_partial(a, b, DEFAULT_PARTIAL_MATCH)
}

/// Compare two names with an explicit partial match value
///
/// When either name is exactly one byte long only the first bytes are
/// compared: equal initials give `partial`, different ones a mismatch.
/// This applies even when both names are the same initial ("F" vs "F"), since
/// an initial alone is never full evidence. Lengths are UTF-8 byte counts, so
/// a multi-byte name such as "É" is compared as a whole name.
pub fn name_similarity_with_partial(a: &str, b: &str, partial: f64) -> f64 {
    let sim = elementary_similarity(a, b);
    if sim == VAL_UNKNOWN {
        return sim;
    }

    // Neither side is empty past the unknown check
    if a.len() == 1 || b.len() == 1 {
        return if a.as_bytes()[0] == b.as_bytes()[0] {
            partial
        } else {
            VAL_MISMATCH
        };
    }

    sim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementary_similarity() {
        assert_eq!(elementary_similarity("39746", "39746"), VAL_MATCH);
        assert_eq!(elementary_similarity("39746", "39747"), VAL_MISMATCH);
        assert_eq!(elementary_similarity("", "39746"), VAL_UNKNOWN);
        assert_eq!(elementary_similarity("39746", ""), VAL_UNKNOWN);
        assert_eq!(elementary_similarity("", ""), VAL_UNKNOWN);
    }

    #[test]
    fn test_elementary_is_case_sensitive() {
        assert_eq!(
            elementary_similarity("Foo@Gmail.com", "foo@gmail.com"),
            VAL_MISMATCH
        );
    }

    #[test]
    fn test_name_full_match_and_mismatch() {
        assert_eq!(name_similarity("Ciara", "Ciara"), VAL_MATCH);
        assert_eq!(name_similarity("Ciara", "Clara"), VAL_MISMATCH);
        assert_eq!(name_similarity("", "Ciara"), VAL_UNKNOWN);
    }

    #[test]
    fn test_name_initials() {
        assert_eq!(name_similarity("C", "Ciara"), 0.75);
        assert_eq!(name_similarity("Ciara", "C"), 0.75);
        assert_eq!(name_similarity("F", "Ciara"), VAL_MISMATCH);
        assert_eq!(name_similarity("c", "Ciara"), VAL_MISMATCH);
    }

    #[test]
    fn test_identical_initials_are_partial() {
        assert_eq!(name_similarity("F", "F"), 0.75);
    }

    #[test]
    fn test_initial_with_unknown_stays_unknown() {
        assert_eq!(name_similarity("F", ""), VAL_UNKNOWN);
    }

    #[test]
    fn test_multibyte_name_is_not_initial() {
        assert_eq!(name_similarity("É", "Émile"), VAL_MISMATCH);
        assert_eq!(name_similarity("É", "É"), VAL_MATCH);
        assert_eq!(name_similarity("E", "Émile"), VAL_MISMATCH);
        assert_eq!(name_similarity("É", "E"), VAL_MISMATCH);
    }

    #[test]
    fn test_custom_partial_value() {
        assert_eq!(name_similarity_with_partial("J", "John", 0.5), 0.5);
        assert_eq!(name_similarity_with_partial("John", "John", 0.5), VAL_MATCH);
    }

    #[test]
    fn test_order_independent() {
        let values = ["", "F", "French", "Ciara", "C", "f"];
        for a in values {
            for b in values {
                assert_eq!(elementary_similarity(a, b), elementary_similarity(b, a));
                assert_eq!(name_similarity(a, b), name_similarity(b, a));
            }
        }
    }
}
