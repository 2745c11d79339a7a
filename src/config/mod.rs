//! Configuration module for ingredient-diff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use ingredient_diff::config::{AppConfig, ConfigPreset, Validatable};
//! use ingredient_diff::reports::ReportFormat;
//!
//! // Use defaults
//! let config = AppConfig::default();
//! assert!(config.is_valid());
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Label);
//! assert!(config.normalization.strip_parentheticals);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Csv)
//!     .fail_on_unique(true)
//!     .build();
//! assert!(config.behavior.fail_on_unique);
//! ```
//!
//! # Configuration File
//!
//! Place a `.ingredient-diff.yaml` file in your project root or
//! `~/.config/ingredient-diff/`:
//!
//! ```yaml
//! normalization:
//!   strip_parentheticals: true
//! output:
//!   format: table
//! labels:
//!   product_a: Day Cream
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::ConfigPreset;
pub use types::{
    AnalysisConfig, AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig,
    CompareConfigBuilder, CompareInputs, IngredientSource, LabelConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config,
    generate_preset_config, load_config_file, load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.ingredient-diff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
