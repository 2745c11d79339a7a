//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonReport, ComparisonRow, ComparisonSummary};
use crate::matching::VariantSuggestion;
use crate::model::IngredientToken;
use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// JSON report generator (pretty-printed)
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        report: &ComparisonReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let generated_at = config
            .metadata
            .generated_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let categories: Option<IndexMap<&'static str, Vec<&IngredientToken>>> =
            config.group_by_category.then(|| {
                report
                    .categories()
                    .into_iter()
                    .map(|(category, rows)| {
                        (
                            category.name(),
                            rows.into_iter().map(|row| &row.ingredient).collect(),
                        )
                    })
                    .collect()
            });

        let json_report = JsonComparisonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "ingredient-diff",
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at,
                product_a: ProductInfo {
                    name: report.product_a.as_str(),
                    source: config.metadata.source_a.as_deref(),
                    ingredient_count: report.summary.a_length,
                },
                product_b: ProductInfo {
                    name: report.product_b.as_str(),
                    source: config.metadata.source_b.as_deref(),
                    ingredient_count: report.summary.b_length,
                },
            },
            summary: &report.summary,
            ingredients: JsonIngredients {
                only_a: &report.only_a,
                only_b: &report.only_b,
                shared: &report.shared_rows,
                categories,
                variant_suggestions: &report.variant_suggestions,
            },
        };

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: &'a ComparisonSummary,
    ingredients: JsonIngredients<'a>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    product_a: ProductInfo<'a>,
    product_b: ProductInfo<'a>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ProductInfo<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    ingredient_count: usize,
}

#[derive(Serialize)]
struct JsonIngredients<'a> {
    only_a: &'a IndexSet<IngredientToken>,
    only_b: &'a IndexSet<IngredientToken>,
    shared: &'a [ComparisonRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<IndexMap<&'static str, Vec<&'a IngredientToken>>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    variant_suggestions: &'a [VariantSuggestion],
}
