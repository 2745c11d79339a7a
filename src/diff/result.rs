//! Comparison result structures.

use crate::matching::VariantSuggestion;
use crate::model::{categorize, IngredientCategory, IngredientToken, ProductLabel, ProductSide};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Set comparison of two ingredient sequences.
///
/// The three sets are pairwise disjoint and together hold every distinct
/// token of both sequences. Each set iterates in first-appearance order of
/// its source sequence (A for `shared`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Ingredients only in product A
    pub only_a: IndexSet<IngredientToken>,
    /// Ingredients only in product B
    pub only_b: IndexSet<IngredientToken>,
    /// Ingredients in both products
    pub shared: IndexSet<IngredientToken>,
}

impl ComparisonResult {
    /// Unique ingredients of one side.
    #[must_use]
    pub const fn only(&self, side: ProductSide) -> &IndexSet<IngredientToken> {
        match side {
            ProductSide::A => &self.only_a,
            ProductSide::B => &self.only_b,
        }
    }

    /// Total distinct ingredients across both products.
    #[must_use]
    pub fn distinct_total(&self) -> usize {
        self.only_a.len() + self.only_b.len() + self.shared.len()
    }

    /// True when neither product has a unique ingredient.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty()
    }
}

/// Position of one ingredient within one product's list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionStat {
    /// Zero-based index of the first occurrence
    pub index: usize,
    /// `1 - index / len`, rounded to 4 decimal places; 1.0 means listed first
    pub percentile: f64,
}

/// Positional statistics keyed by ingredient.
pub type PositionStats = IndexMap<IngredientToken, PositionStat>;

/// One shared ingredient with its position in both products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub ingredient: IngredientToken,
    pub a_index: usize,
    pub a_percentile: f64,
    pub b_index: usize,
    pub b_percentile: f64,
}

impl ComparisonRow {
    /// Index and percentile for one side.
    #[must_use]
    pub const fn stat(&self, side: ProductSide) -> PositionStat {
        match side {
            ProductSide::A => PositionStat {
                index: self.a_index,
                percentile: self.a_percentile,
            },
            ProductSide::B => PositionStat {
                index: self.b_index,
                percentile: self.b_percentile,
            },
        }
    }
}

/// Summary statistics for a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Ingredient entries in A (duplicates counted)
    pub a_length: usize,
    /// Ingredient entries in B (duplicates counted)
    pub b_length: usize,
    pub only_a_count: usize,
    pub only_b_count: usize,
    pub shared_count: usize,
    /// Shared ingredients over all distinct ingredients (Jaccard index)
    pub overlap_ratio: f64,
}

impl ComparisonSummary {
    #[must_use]
    pub fn new(a_length: usize, b_length: usize, result: &ComparisonResult) -> Self {
        let total = result.distinct_total();
        let overlap_ratio = if total == 0 {
            0.0
        } else {
            result.shared.len() as f64 / total as f64
        };
        Self {
            a_length,
            b_length,
            only_a_count: result.only_a.len(),
            only_b_count: result.only_b.len(),
            shared_count: result.shared.len(),
            overlap_ratio,
        }
    }

    /// True when either product has ingredients the other lacks.
    #[must_use]
    pub const fn has_unique(&self) -> bool {
        self.only_a_count > 0 || self.only_b_count > 0
    }
}

/// Complete output of one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonReport {
    /// Display label of product A
    pub product_a: ProductLabel,
    /// Display label of product B
    pub product_b: ProductLabel,
    pub summary: ComparisonSummary,
    /// Ingredients only in product A
    pub only_a: IndexSet<IngredientToken>,
    /// Ingredients only in product B
    pub only_b: IndexSet<IngredientToken>,
    /// Shared ingredients, sorted by product A's index
    pub shared_rows: Vec<ComparisonRow>,
    /// Possible spelling variants between the unique sets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_suggestions: Vec<VariantSuggestion>,
}

impl ComparisonReport {
    /// Label for one side.
    pub const fn label(&self, side: ProductSide) -> &ProductLabel {
        match side {
            ProductSide::A => &self.product_a,
            ProductSide::B => &self.product_b,
        }
    }

    /// Unique ingredients of one side.
    #[must_use]
    pub const fn only(&self, side: ProductSide) -> &IndexSet<IngredientToken> {
        match side {
            ProductSide::A => &self.only_a,
            ProductSide::B => &self.only_b,
        }
    }

    /// Find the row for a shared ingredient.
    #[must_use]
    pub fn row(&self, ingredient: &str) -> Option<&ComparisonRow> {
        self.shared_rows
            .iter()
            .find(|row| row.ingredient.as_str() == ingredient)
    }

    /// Group shared ingredients by functional category.
    ///
    /// Categories appear in enum order; ingredients keep row order.
    #[must_use]
    pub fn categories(&self) -> IndexMap<IngredientCategory, Vec<&ComparisonRow>> {
        let mut grouped: IndexMap<IngredientCategory, Vec<&ComparisonRow>> = IndexMap::new();
        for row in &self.shared_rows {
            grouped
                .entry(categorize(row.ingredient.as_str()))
                .or_default()
                .push(row);
        }
        grouped.sort_keys();
        grouped
    }
}
