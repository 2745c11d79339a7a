//! Normalization and variant-suggestion configuration.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do with blank entries such as the one produced by an empty
/// input string or a trailing comma.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTokenPolicy {
    /// Blank entries are removed; an empty list has zero ingredients
    #[default]
    Drop,
    /// Blank entries are kept as the empty ingredient `""`
    Keep,
}

impl std::fmt::Display for EmptyTokenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

/// Configuration for turning raw label text into ingredient tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Handling of blank entries
    pub empty_tokens: EmptyTokenPolicy,
    /// Remove parenthesized qualifiers, e.g. "aqua (water)" becomes "aqua"
    pub strip_parentheticals: bool,
}

impl NormalizerConfig {
    /// Reproduce the plain split behaviour: blank entries are kept and
    /// parentheses are left untouched.
    #[must_use]
    pub const fn literal() -> Self {
        Self {
            empty_tokens: EmptyTokenPolicy::Keep,
            strip_parentheticals: false,
        }
    }
}

/// Default Jaro-Winkler similarity above which two unique ingredients are
/// reported as possible spelling variants.
pub const DEFAULT_VARIANT_THRESHOLD: f64 = 0.9;

/// Configuration for spelling-variant suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VariantConfig {
    /// Whether suggestions are computed at all
    pub enabled: bool,
    /// Minimum Jaro-Winkler similarity (0.0 - 1.0)
    pub threshold: f64,
    /// Maximum number of suggestions to report
    pub max_suggestions: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: DEFAULT_VARIANT_THRESHOLD,
            max_suggestions: 20,
        }
    }
}
