//! Spelling-variant detection between the two unique ingredient sets.
//!
//! Labels often disagree on spelling ("glycerin" vs "glycerine"). These
//! suggestions are hints for the reader only; they never move an
//! ingredient into the shared set.

use super::config::VariantConfig;
use crate::model::IngredientToken;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// A pair of unique ingredients that look like the same ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSuggestion {
    /// Ingredient found only in product A
    pub a: IngredientToken,
    /// Ingredient found only in product B
    pub b: IngredientToken,
    /// Jaro-Winkler similarity (0.0 - 1.0)
    pub similarity: f64,
}

/// Find likely spelling variants across the two unique sets.
///
/// Every A-only ingredient is scored against every B-only ingredient. Pairs
/// at or above the threshold are returned, most similar first.
#[must_use]
pub fn suggest_variants(
    only_a: &IndexSet<IngredientToken>,
    only_b: &IndexSet<IngredientToken>,
    config: &VariantConfig,
) -> Vec<VariantSuggestion> {
    if !config.enabled {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    for a in only_a.iter().filter(|t| !t.is_blank()) {
        for b in only_b.iter().filter(|t| !t.is_blank()) {
            let similarity = jaro_winkler(a.as_str(), b.as_str());
            if similarity >= config.threshold {
                suggestions.push(VariantSuggestion {
                    a: a.clone(),
                    b: b.clone(),
                    similarity,
                });
            }
        }
    }

    suggestions.sort_by(|x, y| {
        y.similarity
            .total_cmp(&x.similarity)
            .then_with(|| x.a.cmp(&y.a))
            .then_with(|| x.b.cmp(&y.b))
    });
    suggestions.truncate(config.max_suggestions);

    tracing::debug!("Found {} spelling-variant suggestion(s)", suggestions.len());
    suggestions
}
