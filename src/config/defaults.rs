//! Default configurations and presets for ingredient-diff.
//!
//! Provides named presets for common use cases.

use super::types::{AnalysisConfig, AppConfig};
use crate::matching::{NormalizerConfig, VariantConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Balanced settings: blank entries dropped, nothing else altered
    Default,
    /// Literal splitting: blank entries kept as the empty ingredient
    Literal,
    /// Product-label cleanup: strip qualifiers, group and suggest variants
    Label,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Literal => "literal",
            Self::Label => "label",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "literal" | "raw" => Some(Self::Literal),
            "label" | "labels" | "cosmetic" => Some(Self::Label),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Case-insensitive comparison with blank entries dropped",
            Self::Literal => "Plain comma split; blank entries count as an ingredient",
            Self::Label => {
                "Strips parenthesized qualifiers, groups by category and flags likely misspellings"
            }
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Literal, Self::Label]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Literal => Self::literal_preset(),
            ConfigPreset::Label => Self::label_preset(),
        }
    }

    /// Literal preset.
    ///
    /// An empty list compares as the single ingredient `""`.
    #[must_use]
    pub fn literal_preset() -> Self {
        Self {
            normalization: NormalizerConfig::literal(),
            ..Self::default()
        }
    }

    /// Product-label preset.
    ///
    /// - "aqua (water)" compares as "aqua"
    /// - Shared ingredients grouped by category
    /// - Spelling-variant hints at the default threshold
    #[must_use]
    pub fn label_preset() -> Self {
        Self {
            normalization: NormalizerConfig {
                strip_parentheticals: true,
                ..NormalizerConfig::default()
            },
            analysis: AnalysisConfig {
                group_by_category: true,
                variants: VariantConfig {
                    enabled: true,
                    ..VariantConfig::default()
                },
            },
            ..Self::default()
        }
    }
}
