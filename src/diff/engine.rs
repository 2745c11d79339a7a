//! Ingredient comparison engine.
//!
//! Runs the four stages in order: normalize both lists, compare them as
//! sets, compute positional statistics for the shared ingredients, and
//! merge those into the final table.

use super::{
    compare, merge, position_stats, ComparisonReport, ComparisonResult, ComparisonSummary,
};
use crate::error::{ErrorContext, Result};
use crate::matching::{suggest_variants, IngredientNormalizer, NormalizerConfig, VariantConfig};
use crate::model::{IngredientSequence, ProductLabel, ProductSide};
use serde::{Deserialize, Serialize};

/// Raw input for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub product_a: ProductLabel,
    pub product_b: ProductLabel,
    /// Comma-separated ingredient text of product A
    pub ingredients_a: String,
    /// Comma-separated ingredient text of product B
    pub ingredients_b: String,
}

impl ComparisonInput {
    /// Create an input with default product labels.
    pub fn new(ingredients_a: impl Into<String>, ingredients_b: impl Into<String>) -> Self {
        Self {
            product_a: ProductLabel::default_for(ProductSide::A),
            product_b: ProductLabel::default_for(ProductSide::B),
            ingredients_a: ingredients_a.into(),
            ingredients_b: ingredients_b.into(),
        }
    }

    /// Set the display names. Blank names fall back to the defaults.
    #[must_use]
    pub fn with_names(mut self, name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        self.product_a = ProductLabel::new(ProductSide::A, name_a);
        self.product_b = ProductLabel::new(ProductSide::B, name_b);
        self
    }
}

/// Engine comparing two ingredient lists.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct IngredientDiffEngine {
    normalizer: IngredientNormalizer,
    variant_config: VariantConfig,
}

impl IngredientDiffEngine {
    /// Create an engine with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization configuration
    pub fn with_normalizer_config(mut self, config: NormalizerConfig) -> Self {
        self.normalizer = IngredientNormalizer::new(config);
        self
    }

    /// Set spelling-variant suggestion configuration
    pub fn with_variant_config(mut self, config: VariantConfig) -> Self {
        self.variant_config = config;
        self
    }

    #[must_use]
    pub const fn normalizer(&self) -> &IngredientNormalizer {
        &self.normalizer
    }

    /// Normalize both raw lists.
    #[must_use]
    pub fn normalize_pair(&self, input: &ComparisonInput) -> (IngredientSequence, IngredientSequence) {
        (
            self.normalizer.normalize(&input.ingredients_a),
            self.normalizer.normalize(&input.ingredients_b),
        )
    }

    /// Run the full comparison.
    pub fn compare(&self, input: &ComparisonInput) -> Result<ComparisonReport> {
        let (seq_a, seq_b) = self.normalize_pair(input);
        tracing::debug!(
            "Normalized {} ingredient(s) for '{}', {} for '{}'",
            seq_a.len(),
            input.product_a,
            seq_b.len(),
            input.product_b
        );

        let mut report = self.compare_sequences(&seq_a, &seq_b)?;
        report.product_a = input.product_a.clone();
        report.product_b = input.product_b.clone();
        Ok(report)
    }

    /// Compare two already-normalized sequences.
    pub fn compare_sequences(
        &self,
        seq_a: &IngredientSequence,
        seq_b: &IngredientSequence,
    ) -> Result<ComparisonReport> {
        let result = compare(seq_a, seq_b);
        let summary = ComparisonSummary::new(seq_a.len(), seq_b.len(), &result);

        let stats_a = position_stats(seq_a, &result.shared).context("product A")?;
        let stats_b = position_stats(seq_b, &result.shared).context("product B")?;
        let shared_rows = merge(&stats_a, &stats_b, &result.shared)?;

        let variant_suggestions =
            suggest_variants(&result.only_a, &result.only_b, &self.variant_config);
        let ComparisonResult { only_a, only_b, .. } = result;

        tracing::debug!(
            "Comparison found {} shared, {} only in A, {} only in B",
            shared_rows.len(),
            only_a.len(),
            only_b.len()
        );

        Ok(ComparisonReport {
            product_a: ProductLabel::default_for(ProductSide::A),
            product_b: ProductLabel::default_for(ProductSide::B),
            summary,
            only_a,
            only_b,
            shared_rows,
            variant_suggestions,
        })
    }
}

/// Compare two raw ingredient strings with default engine settings
/// except for normalization.
pub fn run_comparison(input: &ComparisonInput, config: &NormalizerConfig) -> Result<ComparisonReport> {
    IngredientDiffEngine::new()
        .with_normalizer_config(config.clone())
        .compare(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::EmptyTokenPolicy;

    #[test]
    fn test_engine_labels_report() {
        let input = ComparisonInput::new("water, glycerin", "water").with_names("Cream", "");
        let report = IngredientDiffEngine::new().compare(&input).unwrap();
        assert_eq!(report.product_a.as_str(), "Cream");
        assert_eq!(report.product_b.as_str(), "Product 2");
        assert_eq!(report.summary.shared_count, 1);
        assert_eq!(report.summary.a_length, 2);
    }

    #[test]
    fn test_engine_with_variants() {
        let input = ComparisonInput::new("water, glycerin", "water, glycerine");
        let report = IngredientDiffEngine::new()
            .with_variant_config(VariantConfig {
                enabled: true,
                ..VariantConfig::default()
            })
            .compare(&input)
            .unwrap();
        assert_eq!(report.variant_suggestions.len(), 1);
        // Suggestions never change set membership.
        assert!(report.only_a.contains("glycerin"));
        assert!(report.only_b.contains("glycerine"));
    }

    #[test]
    fn test_literal_empty_input() {
        let config = NormalizerConfig {
            empty_tokens: EmptyTokenPolicy::Keep,
            ..NormalizerConfig::default()
        };
        let report = run_comparison(&ComparisonInput::new("", "water"), &config).unwrap();
        assert!(report.only_a.contains(""));
        assert!(report.only_b.contains("water"));
        assert!(report.shared_rows.is_empty());
    }
}
