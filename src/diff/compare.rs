//! Set comparison of two ingredient sequences.

use super::ComparisonResult;
use crate::model::{IngredientSequence, IngredientToken};
use indexmap::IndexSet;

/// Collapse a sequence to its distinct tokens in first-appearance order.
fn distinct(sequence: &IngredientSequence) -> IndexSet<&IngredientToken> {
    sequence.iter().collect()
}

/// Compare two sequences as sets.
///
/// `only_a = distinct(a) - distinct(b)`, `only_b = distinct(b) - distinct(a)`
/// and `shared = distinct(a) ∩ distinct(b)`. Order and duplicates in the
/// inputs only influence the iteration order of the returned sets.
#[must_use]
pub fn compare(a: &IngredientSequence, b: &IngredientSequence) -> ComparisonResult {
    let distinct_a = distinct(a);
    let distinct_b = distinct(b);

    let only_a = distinct_a
        .difference(&distinct_b)
        .map(|t| (*t).clone())
        .collect();
    let only_b = distinct_b
        .difference(&distinct_a)
        .map(|t| (*t).clone())
        .collect();
    let shared = distinct_a
        .intersection(&distinct_b)
        .map(|t| (*t).clone())
        .collect();

    ComparisonResult {
        only_a,
        only_b,
        shared,
    }
}
