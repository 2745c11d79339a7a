//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::matching::{EmptyTokenPolicy, DEFAULT_VARIANT_THRESHOLD};
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".ingredient-diff.yaml",
    ".ingredient-diff.yml",
    "ingredient-diff.yaml",
    "ingredient-diff.yml",
];

/// Directory under the user config dir holding the global config.
const CONFIG_DIR_NAME: &str = "ingredient-diff";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/ingredient-diff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Global config directory, e.g. `~/.config/ingredient-diff`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a CLI config
    /// built from unset flags leaves the file values alone.
    pub fn merge(&mut self, other: &Self) {
        // Normalization
        if other.normalization.empty_tokens != EmptyTokenPolicy::default() {
            self.normalization.empty_tokens = other.normalization.empty_tokens;
        }
        if other.normalization.strip_parentheticals {
            self.normalization.strip_parentheticals = true;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.max_rows.is_some() {
            self.output.max_rows = other.output.max_rows;
        }
        if other.output.title.is_some() {
            self.output.title.clone_from(&other.output.title);
        }

        // Labels
        if other.labels.product_a.is_some() {
            self.labels.product_a.clone_from(&other.labels.product_a);
        }
        if other.labels.product_b.is_some() {
            self.labels.product_b.clone_from(&other.labels.product_b);
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_unique {
            self.behavior.fail_on_unique = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }

        // Analysis
        if other.analysis.group_by_category {
            self.analysis.group_by_category = true;
        }
        if other.analysis.variants.enabled {
            self.analysis.variants.enabled = true;
        }
        if (other.analysis.variants.threshold - DEFAULT_VARIANT_THRESHOLD).abs() > f64::EPSILON {
            self.analysis.variants.threshold = other.analysis.variants.threshold;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    generate_preset_config(&AppConfig::default())
}

/// Render a config as YAML under the standard header.
#[must_use]
pub fn generate_preset_config(config: &AppConfig) -> String {
    format!(
        r"# Ingredient Diff Configuration
# Place this file at .ingredient-diff.yaml in your project root or ~/.config/ingredient-diff/

{}",
        serde_yaml::to_string(config).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Ingredient Diff Configuration File
# ==================================
#
# This file configures ingredient-diff behavior. Place it at:
#   - .ingredient-diff.yaml in your project root
#   - ~/.config/ingredient-diff/ingredient-diff.yaml for global config
#
# CLI arguments always override file settings.

# How raw ingredient text is split into tokens
normalization:
  # Blank entries (empty input, trailing commas): drop or keep
  empty_tokens: drop
  # Compare 'aqua (water)' as 'aqua'
  strip_parentheticals: false

# Output configuration
output:
  # Format: auto, summary, table, json, csv, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: comparison.csv
  # Disable colored output
  no_color: false
  # Limit shared rows in text reports
  # max_rows: 50
  # Report heading
  # title: Day vs Night

# Default product names
# labels:
#   product_a: Day Cream
#   product_b: Night Cream

# Behavior flags
behavior:
  # Exit with code 1 if either product has unique ingredients
  fail_on_unique: false
  # Suppress non-essential output
  quiet: false

# Optional analyses
analysis:
  # Group shared ingredients by functional category
  group_by_category: false
  # Flag likely misspellings between the unique lists
  variants:
    enabled: false
    threshold: 0.9
    max_suggestions: 20
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
