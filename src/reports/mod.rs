//! Report generation for comparison results.
//!
//! This module provides multiple output formats for an ingredient comparison:
//! - Summary: Sectioned console output with banners
//! - Table: Aligned tabular terminal output
//! - JSON: Structured data for programmatic integration
//! - CSV: The shared-ingredient table for spreadsheets
//! - Markdown: Human-readable documentation
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Ingredient names and product labels are user input and should be
//! escaped before embedding in CSV or Markdown reports.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::ComparisonReport;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a comparison report
    fn generate_report(
        &self,
        report: &ComparisonReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
///
/// `Auto` should be resolved by the caller; if it reaches here it maps to
/// the summary reporter.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_formats() {
        assert_eq!(
            create_reporter_with_options(ReportFormat::Json, true).format(),
            ReportFormat::Json
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Csv, true).format(),
            ReportFormat::Csv
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Table, false).format(),
            ReportFormat::Table
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Markdown, true).format(),
            ReportFormat::Markdown
        );
    }
}
