//! **Compare the ingredient lists of two products.**
//!
//! `ingredient-diff` takes two comma-separated ingredient lists, as printed
//! on cosmetic or food packaging, and answers two questions:
//!
//! - Which ingredients appear in only one of the products?
//! - For each ingredient they share, how prominent is it on each label?
//!
//! Ingredient lists are ordered by concentration, so position is a useful
//! proxy for how much of an ingredient a product contains. Prominence is
//! reported as a relative percentile, `1 - index / length`, where `1.0`
//! means "listed first".
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`IngredientToken`] and [`IngredientSequence`], the
//!   normalized form of a label, plus product labels and categories.
//! - **[`matching`]**: the normalizer that turns raw text into a sequence,
//!   and spelling-variant suggestions.
//! - **[`diff`]**: the set comparison, positional statistics and table merge,
//!   wired together by [`IngredientDiffEngine`].
//! - **[`reports`]**: summary, table, JSON, CSV and Markdown output.
//! - **[`config`]**, **[`pipeline`]**, **[`cli`]**: configuration files and
//!   the command-line workflow.
//!
//! ## Getting Started
//!
//! ```
//! use ingredient_diff::{ComparisonInput, IngredientDiffEngine};
//!
//! let input = ComparisonInput::new(
//!     "Water, Glycerin, Fragrance",
//!     "water,alcohol , fragrance",
//! )
//! .with_names("Day Cream", "Night Cream");
//!
//! let report = IngredientDiffEngine::new().compare(&input)?;
//!
//! assert_eq!(report.only_a.len(), 1);
//! assert_eq!(report.only_b.len(), 1);
//! for row in &report.shared_rows {
//!     println!(
//!         "{}: {:.4} vs {:.4}",
//!         row.ingredient, row.a_percentile, row.b_percentile
//!     );
//! }
//! # Ok::<(), ingredient_diff::IngredientDiffError>(())
//! ```
//!
//! ### Rendering a Report
//!
//! ```
//! use ingredient_diff::{ComparisonInput, IngredientDiffEngine};
//! use ingredient_diff::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
//!
//! let input = ComparisonInput::new("water, glycerin", "glycerin, water");
//! let report = IngredientDiffEngine::new().compare(&input).unwrap();
//!
//! let csv = create_reporter_with_options(ReportFormat::Csv, false)
//!     .generate_report(&report, &ReportConfig::default())
//!     .unwrap();
//! assert!(csv.contains("water,0,1.0000,1,0.5000"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Index/length to percentile conversions; list lengths are far below 2^52
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    // Names like `seq_a`/`seq_b` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{
    AnalysisConfig, BehaviorConfig, CompareConfig, LabelConfig, OutputConfig,
};
pub use config::{ConfigError, Validatable};
pub use diff::{
    compare, merge, position_stats, run_comparison, ComparisonInput, ComparisonReport,
    ComparisonResult, ComparisonRow, IngredientDiffEngine,
};
pub use error::{ErrorContext, IngredientDiffError, Result};
pub use matching::{normalize, EmptyTokenPolicy, IngredientNormalizer, NormalizerConfig};
pub use model::{IngredientSequence, IngredientToken, ProductLabel, ProductSide};
pub use reports::{ReportFormat, ReportGenerator};
