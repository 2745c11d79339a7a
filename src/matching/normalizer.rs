//! Ingredient list normalization.
//!
//! Turns free-text, comma-separated label text into an ordered
//! [`IngredientSequence`]. Normalization never fails.

use super::config::{EmptyTokenPolicy, NormalizerConfig};
use crate::model::{IngredientSequence, IngredientToken};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a parenthesized qualifier together with the whitespace before it.
fn parenthetical_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\([^()]*\)").expect("parenthetical pattern is valid"))
}

/// Remove every parenthesized qualifier, innermost first.
///
/// Runs on the whole list so commas inside a qualifier never split an entry.
fn strip_parentheticals(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = parenthetical_regex().replace_all(&current, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Normalizer for raw ingredient lists.
#[derive(Debug, Clone, Default)]
pub struct IngredientNormalizer {
    config: NormalizerConfig,
}

impl IngredientNormalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a raw comma-separated ingredient string.
    ///
    /// The whole string is lowercased and split on commas. Each entry is
    /// trimmed, so `"a, b"`, `"a,b"` and `"a ,  b"` all yield `["a", "b"]`.
    /// Order and duplicates are preserved. Qualifiers are stripped before
    /// splitting when `strip_parentheticals` is set.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> IngredientSequence {
        let mut lowered = raw.to_lowercase();
        if self.config.strip_parentheticals {
            lowered = strip_parentheticals(&lowered);
        }
        let tokens: IngredientSequence = lowered
            .split(',')
            .map(|entry| IngredientToken::new(entry.trim()))
            .filter(|token| match self.config.empty_tokens {
                EmptyTokenPolicy::Keep => true,
                EmptyTokenPolicy::Drop => !token.is_blank(),
            })
            .collect();

        tracing::debug!(
            "Normalized {} bytes into {} ingredient(s)",
            raw.len(),
            tokens.len()
        );
        tokens
    }
}

/// Normalize with the default configuration.
#[must_use]
pub fn normalize(raw: &str) -> IngredientSequence {
    IngredientNormalizer::default().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(seq: &IngredientSequence) -> Vec<&str> {
        seq.iter().map(IngredientToken::as_str).collect()
    }

    #[test]
    fn test_lowercases_and_splits() {
        let seq = normalize("Water, Glycerin, Fragrance");
        assert_eq!(tokens(&seq), vec!["water", "glycerin", "fragrance"]);
    }

    #[test]
    fn test_spacing_variants_are_equivalent() {
        assert_eq!(normalize("Water, Glycerin"), normalize("water,glycerin"));
        assert_eq!(normalize("water ,  glycerin"), normalize("water,glycerin"));
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let seq = normalize("water, water, glycerin");
        assert_eq!(tokens(&seq), vec!["water", "water", "glycerin"]);
    }

    #[test]
    fn test_empty_input_drop_policy() {
        let seq = normalize("");
        assert!(seq.is_empty());
    }

    #[test]
    fn test_empty_input_keep_policy() {
        let normalizer = IngredientNormalizer::new(NormalizerConfig::literal());
        let seq = normalizer.normalize("");
        assert_eq!(seq.len(), 1);
        assert!(seq.tokens()[0].is_blank());
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(tokens(&normalize("water, glycerin,")), vec!["water", "glycerin"]);

        let literal = IngredientNormalizer::new(NormalizerConfig::literal());
        assert_eq!(
            tokens(&literal.normalize("water, glycerin,")),
            vec!["water", "glycerin", ""]
        );
    }

    #[test]
    fn test_whitespace_only_entries_are_blank() {
        let seq = normalize("water,   , glycerin");
        assert_eq!(tokens(&seq), vec!["water", "glycerin"]);
    }

    #[test]
    fn test_strip_parentheticals() {
        let normalizer = IngredientNormalizer::new(NormalizerConfig {
            strip_parentheticals: true,
            ..NormalizerConfig::default()
        });
        let seq = normalizer.normalize("Aqua (Water), Parfum (Fragrance), Glycerin");
        assert_eq!(tokens(&seq), vec!["aqua", "parfum", "glycerin"]);
    }

    #[test]
    fn test_parentheticals_kept_by_default() {
        let seq = normalize("Aqua (Water)");
        assert_eq!(tokens(&seq), vec!["aqua (water)"]);
    }

    #[test]
    fn test_comma_inside_qualifier_stays_one_entry() {
        let normalizer = IngredientNormalizer::new(NormalizerConfig {
            strip_parentheticals: true,
            ..NormalizerConfig::default()
        });
        let seq = normalizer.normalize("Aqua (Water, Eau), Parfum (Fragrance, Linalool), Glycerin");
        assert_eq!(tokens(&seq), vec!["aqua", "parfum", "glycerin"]);
    }

    #[test]
    fn test_nested_qualifiers_fully_stripped() {
        assert_eq!(strip_parentheticals("a (b (c))"), "a");
        let normalizer = IngredientNormalizer::new(NormalizerConfig {
            strip_parentheticals: true,
            ..NormalizerConfig::default()
        });
        let seq = normalizer.normalize("Tocopherol (Vitamin E (Natural)), Water");
        assert_eq!(tokens(&seq), vec!["tocopherol", "water"]);
    }
}
