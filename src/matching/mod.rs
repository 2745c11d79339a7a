//! Ingredient name normalization and variant matching.
//!
//! Ingredient equality is exact string equality on normalized tokens. This
//! module owns the normalization step that makes that equality meaningful
//! (case, spacing, optional parenthetical qualifiers) and the similarity
//! scoring used to flag probable spelling variants.
//!
//! # Example
//!
//! ```
//! use ingredient_diff::matching::{IngredientNormalizer, NormalizerConfig};
//!
//! let normalizer = IngredientNormalizer::new(NormalizerConfig::default());
//! let seq = normalizer.normalize("Water, Glycerin, Fragrance");
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.tokens()[1].as_str(), "glycerin");
//! ```

mod config;
mod normalizer;
pub mod string_similarity;

pub use config::{EmptyTokenPolicy, NormalizerConfig, VariantConfig, DEFAULT_VARIANT_THRESHOLD};
pub use normalizer::{normalize, IngredientNormalizer};
pub use string_similarity::{suggest_variants, VariantSuggestion};
