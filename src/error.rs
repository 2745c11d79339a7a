//! Unified error types for ingredient-diff.
//!
//! In the core pipeline only the positional statistics and the table merge
//! can fail; normalization and set comparison are total. Reading list files
//! and validating configuration add the `Io` and `Config` kinds. Errors carry
//! a context string describing which product or stage was being processed.

use crate::model::ProductSide;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ingredient-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngredientDiffError {
    /// Errors while computing positional statistics
    #[error("Position statistics failed: {context}")]
    Stats {
        context: String,
        #[source]
        source: StatsErrorKind,
    },

    /// Errors while merging per-product statistics into rows
    #[error("Table merge failed: {context}")]
    Merge {
        context: String,
        #[source]
        source: MergeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {}: {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific position statistics error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatsErrorKind {
    /// Percentiles requested against a sequence with no ingredients
    #[error("ingredient sequence is empty but {targets} target(s) were requested")]
    EmptySequence { targets: usize },

    /// A requested ingredient does not occur in the sequence
    #[error("ingredient '{ingredient}' not found in sequence")]
    MissingIngredient { ingredient: String },
}

/// Specific merge error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeErrorKind {
    /// A shared ingredient has no statistics for one product
    #[error("no statistics for '{ingredient}' in product {side}")]
    MissingStat {
        ingredient: String,
        side: ProductSide,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ingredient-diff operations
pub type Result<T> = std::result::Result<T, IngredientDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl IngredientDiffError {
    /// Create a stats error with context
    pub fn stats(context: impl Into<String>, source: StatsErrorKind) -> Self {
        Self::Stats {
            context: context.into(),
            source,
        }
    }

    /// Stats requested against an empty sequence
    pub fn empty_sequence(targets: usize) -> Self {
        Self::stats(String::new(), StatsErrorKind::EmptySequence { targets })
    }

    /// Target ingredient absent from the scanned sequence
    pub fn missing_ingredient(ingredient: impl Into<String>) -> Self {
        Self::stats(
            String::new(),
            StatsErrorKind::MissingIngredient {
                ingredient: ingredient.into(),
            },
        )
    }

    /// Shared ingredient absent from one product's statistics
    pub fn missing_stat(ingredient: impl Into<String>, side: ProductSide) -> Self {
        Self::Merge {
            context: String::new(),
            source: MergeErrorKind::MissingStat {
                ingredient: ingredient.into(),
                side,
            },
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The stats error kind, if this is a stats error
    #[must_use]
    pub const fn stats_kind(&self) -> Option<&StatsErrorKind> {
        match self {
            Self::Stats { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is chained rather than replaced, so an error raised deep in the
/// stats calculator reads like "product A: computing percentiles: ...".
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<IngredientDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: IngredientDiffError, new_ctx: &str) -> IngredientDiffError {
    match err {
        IngredientDiffError::Stats {
            context: existing,
            source,
        } => IngredientDiffError::Stats {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IngredientDiffError::Merge {
            context: existing,
            source,
        } => IngredientDiffError::Merge {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IngredientDiffError::Io {
            path,
            message,
            source,
        } => IngredientDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        IngredientDiffError::Config(msg) => {
            IngredientDiffError::Config(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
