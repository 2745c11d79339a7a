//! Comparison stage.
//!
//! Builds the engine from the configured options and runs the four
//! comparison stages over the loaded lists.

use super::LoadedIngredients;
use crate::config::CompareConfig;
use crate::diff::{ComparisonInput, ComparisonReport, IngredientDiffEngine};
use anyhow::{Context, Result};

/// Run the comparison between two loaded ingredient lists.
pub fn compute_comparison(
    config: &CompareConfig,
    a: &LoadedIngredients,
    b: &LoadedIngredients,
) -> Result<ComparisonReport> {
    let quiet = config.behavior.quiet;

    let input = ComparisonInput::new(a.text.as_str(), b.text.as_str()).with_names(
        config.labels.product_a.clone().unwrap_or_default(),
        config.labels.product_b.clone().unwrap_or_default(),
    );

    if !quiet {
        tracing::info!(
            "Comparing '{}' with '{}'",
            input.product_a,
            input.product_b
        );
    }

    let engine = IngredientDiffEngine::new()
        .with_normalizer_config(config.normalization.clone())
        .with_variant_config(config.analysis.variants.clone());

    let report = engine
        .compare(&input)
        .context("Failed to compare ingredient lists")?;

    if !quiet {
        tracing::info!(
            "Comparison complete: {} shared, {} only in {}, {} only in {} ({:.1}% overlap)",
            report.summary.shared_count,
            report.summary.only_a_count,
            report.product_a,
            report.summary.only_b_count,
            report.product_b,
            report.summary.overlap_ratio * 100.0
        );
        if !report.variant_suggestions.is_empty() {
            tracing::info!(
                "{} possible spelling variant(s) found",
                report.variant_suggestions.len()
            );
        }
    }

    Ok(report)
}
