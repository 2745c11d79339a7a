//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::summary::display_token;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::ComparisonReport;
use crate::model::ProductSide;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(
        &self,
        report: &ComparisonReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let name_a = escape_markdown_inline(report.product_a.as_str());
        let name_b = escape_markdown_inline(report.product_b.as_str());
        let mut md = String::new();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("{name_a} vs {name_b}"));
        writeln!(md, "# {title}")?;
        writeln!(md)?;

        let s = &report.summary;
        writeln!(md, "## Summary")?;
        writeln!(md)?;
        writeln!(md, "| Metric | Count |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Ingredients in {name_a} | {} |", s.a_length)?;
        writeln!(md, "| Ingredients in {name_b} | {} |", s.b_length)?;
        writeln!(md, "| Only in {name_a} | {} |", s.only_a_count)?;
        writeln!(md, "| Only in {name_b} | {} |", s.only_b_count)?;
        writeln!(md, "| Shared | {} |", s.shared_count)?;
        writeln!(md, "| Overlap | {:.1}% |", s.overlap_ratio * 100.0)?;
        writeln!(md)?;

        for side in [ProductSide::A, ProductSide::B] {
            let name = escape_markdown_inline(report.label(side).as_str());
            writeln!(md, "## Only in {name}")?;
            writeln!(md)?;
            let unique = report.only(side);
            if unique.is_empty() {
                writeln!(md, "_None_")?;
            } else {
                for token in unique {
                    writeln!(md, "- {}", escape_markdown_inline(display_token(token)))?;
                }
            }
            writeln!(md)?;
        }

        writeln!(md, "## Shared Ingredients")?;
        writeln!(md)?;
        if report.shared_rows.is_empty() {
            writeln!(md, "_None_")?;
        } else {
            writeln!(
                md,
                "| Ingredient | {name_a} Index | {name_a} Percentile | {name_b} Index | {name_b} Percentile |"
            )?;
            writeln!(md, "|---|---:|---:|---:|---:|")?;
            for row in &report.shared_rows {
                writeln!(
                    md,
                    "| {} | {} | {:.4} | {} | {:.4} |",
                    escape_markdown_table(display_token(&row.ingredient)),
                    row.a_index,
                    row.a_percentile,
                    row.b_index,
                    row.b_percentile
                )?;
            }
        }

        if config.group_by_category && !report.shared_rows.is_empty() {
            writeln!(md)?;
            writeln!(md, "## Shared by Category")?;
            for (category, rows) in report.categories() {
                writeln!(md)?;
                writeln!(md, "### {}", escape_markdown_inline(category.name()))?;
                writeln!(md)?;
                for row in rows {
                    writeln!(md, "- {}", escape_markdown_inline(display_token(&row.ingredient)))?;
                }
            }
        }

        if !report.variant_suggestions.is_empty() {
            writeln!(md)?;
            writeln!(md, "## Possible Spelling Variants")?;
            writeln!(md)?;
            for suggestion in &report.variant_suggestions {
                writeln!(
                    md,
                    "- {} / {} ({:.0}%)",
                    escape_markdown_inline(suggestion.a.as_str()),
                    escape_markdown_inline(suggestion.b.as_str()),
                    suggestion.similarity * 100.0
                )?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
