//! Configuration types for ingredient-diff operations.
//!
//! Provides the file-backed [`AppConfig`] and the per-command
//! [`CompareConfig`] assembled from CLI arguments.

use crate::matching::{EmptyTokenPolicy, NormalizerConfig, VariantConfig};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How raw ingredient text is split into tokens
    pub normalization: NormalizerConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Default product labels
    pub labels: LabelConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Optional analyses layered on the comparison
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the blank-token policy.
    pub const fn empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.config.normalization.empty_tokens = policy;
        self
    }

    /// Strip parenthesized qualifiers before comparing.
    pub const fn strip_parentheticals(mut self, strip: bool) -> Self {
        self.config.normalization.strip_parentheticals = strip;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Cap the shared rows printed by text reports.
    pub const fn max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.config.output.max_rows = max_rows;
        self
    }

    /// Set the report title.
    pub fn title(mut self, title: Option<String>) -> Self {
        self.config.output.title = title;
        self
    }

    /// Enable fail-on-unique mode.
    pub const fn fail_on_unique(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_unique = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Group shared ingredients by category in reports.
    pub const fn group_by_category(mut self, group: bool) -> Self {
        self.config.analysis.group_by_category = group;
        self
    }

    /// Enable spelling-variant suggestions.
    pub const fn suggest_variants(mut self, enabled: bool) -> Self {
        self.config.analysis.variants.enabled = enabled;
        self
    }

    /// Set the similarity threshold for spelling variants.
    pub const fn variant_threshold(mut self, threshold: f64) -> Self {
        self.config.analysis.variants.threshold = threshold;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Maximum shared rows in text reports (None for all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
    /// Report heading (defaults to "A vs B" in Markdown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Product display names used when none are given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LabelConfig {
    /// Name of the first product (defaults to "Product 1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_a: Option<String>,
    /// Name of the second product (defaults to "Product 2")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_b: Option<String>,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when either product has unique ingredients
    pub fail_on_unique: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Optional analyses on top of the core comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Group shared ingredients by functional category
    pub group_by_category: bool,
    /// Spelling-variant suggestions between the unique sets
    pub variants: VariantConfig,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Where an ingredient list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientSource {
    /// Text given directly on the command line
    Inline(String),
    /// Path to a text file holding the list
    File(PathBuf),
}

impl IngredientSource {
    /// Short description used in report metadata.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "argument".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Inputs of a compare operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareInputs {
    pub a: IngredientSource,
    pub b: IngredientSource,
}

/// Configuration for compare operations
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Ingredient lists to compare
    pub inputs: CompareInputs,
    /// Product labels
    pub labels: LabelConfig,
    /// Normalization configuration
    pub normalization: NormalizerConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Optional analyses
    pub analysis: AnalysisConfig,
}

/// Builder for `CompareConfig`
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    a: Option<IngredientSource>,
    b: Option<IngredientSource>,
    base: AppConfig,
}

impl CompareConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing application config (file or preset).
    #[must_use]
    pub fn from_app_config(config: AppConfig) -> Self {
        Self {
            base: config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input_a(mut self, source: IngredientSource) -> Self {
        self.a = Some(source);
        self
    }

    #[must_use]
    pub fn input_b(mut self, source: IngredientSource) -> Self {
        self.b = Some(source);
        self
    }

    #[must_use]
    pub fn name_a(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.base.labels.product_a = name;
        }
        self
    }

    #[must_use]
    pub fn name_b(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.base.labels.product_b = name;
        }
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.base.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.base.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.base.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn fail_on_unique(mut self, fail: bool) -> Self {
        self.base.behavior.fail_on_unique = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.base.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<CompareConfig> {
        let a = self.a.ok_or_else(|| anyhow::anyhow!("ingredients for product A are required"))?;
        let b = self.b.ok_or_else(|| anyhow::anyhow!("ingredients for product B are required"))?;

        Ok(CompareConfig {
            inputs: CompareInputs { a, b },
            labels: self.base.labels,
            normalization: self.base.normalization,
            output: self.base.output,
            behavior: self.base.behavior,
            analysis: self.base.analysis,
        })
    }
}
