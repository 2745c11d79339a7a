//! Configuration validation for ingredient-diff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AnalysisConfig, AppConfig, BehaviorConfig, CompareConfig, LabelConfig, OutputConfig};
use crate::matching::{NormalizerConfig, VariantConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.normalization.validate());
        errors.extend(self.output.validate());
        errors.extend(self.labels.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.analysis.validate());
        errors
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.normalization.validate());
        errors.extend(self.output.validate());
        errors.extend(self.labels.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.analysis.validate());
        errors
    }
}

impl Validatable for NormalizerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Both fields are closed enums or flags
        Vec::new()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        if self.max_rows == Some(0) {
            errors.push(ConfigError {
                field: "output.max_rows".to_string(),
                message: "Max rows must be at least 1 (omit it to print every row)".to_string(),
            });
        }

        if let Some(title) = &self.title {
            if title.contains(['\n', '\r']) {
                errors.push(ConfigError {
                    field: "output.title".to_string(),
                    message: "Title must be a single line".to_string(),
                });
            }
        }

        errors
    }
}

impl Validatable for LabelConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, label) in [
            ("labels.product_a", &self.product_a),
            ("labels.product_b", &self.product_b),
        ] {
            if let Some(name) = label {
                if name.contains(['\n', '\r']) {
                    errors.push(ConfigError {
                        field: field.to_string(),
                        message: "Product name must be a single line".to_string(),
                    });
                }
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // BehaviorConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.variants.validate()
    }
}

impl Validatable for VariantConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(ConfigError {
                field: "analysis.variants.threshold".to_string(),
                message: format!(
                    "Threshold must be between 0.0 and 1.0, got {}",
                    self.threshold
                ),
            });
        }

        if self.enabled && self.max_suggestions == 0 {
            errors.push(ConfigError {
                field: "analysis.variants.max_suggestions".to_string(),
                message: "Max suggestions must be at least 1 when suggestions are enabled"
                    .to_string(),
            });
        }

        errors
    }
}
