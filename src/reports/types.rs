//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table if TTY, summary otherwise
    #[default]
    Auto,
    /// Console summary with section banners
    Summary,
    /// Aligned table of shared ingredients
    Table,
    /// Structured JSON output
    Json,
    /// CSV of the shared-ingredient table
    Csv,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Group shared ingredients by functional category
    pub group_by_category: bool,
    /// Maximum shared rows to print (text formats only)
    pub max_rows: Option<usize>,
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Number of shared rows a text reporter should print.
    #[must_use]
    pub fn row_limit(&self, total: usize) -> usize {
        self.max_rows.map_or(total, |max| max.min(total))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where product A's list came from (file path or "argument")
    pub source_a: Option<String>,
    /// Where product B's list came from
    pub source_b: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
