//! Ingredient tokens and ordered ingredient sequences.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// A single normalized ingredient name.
///
/// Tokens are compared by exact string equality. Normalization (lowercasing,
/// trimming) happens once in the normalizer; the token itself never alters
/// its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientToken(String);

impl IngredientToken {
    /// Wrap an already-normalized ingredient name.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty token produced by blank list entries.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IngredientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for IngredientToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IngredientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IngredientToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered ingredients of one product, as they appeared on the label.
///
/// Duplicates are retained. The position of a token in the sequence is its
/// rank on the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSequence {
    tokens: Vec<IngredientToken>,
}

impl IngredientSequence {
    #[must_use]
    pub fn new(tokens: Vec<IngredientToken>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[IngredientToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientToken> {
        self.tokens.iter()
    }

    /// Build a lookup of each distinct token to its first position.
    ///
    /// Later duplicates never overwrite an earlier entry.
    #[must_use]
    pub fn first_positions(&self) -> HashMap<&str, usize> {
        let mut positions = HashMap::with_capacity(self.tokens.len());
        for (idx, token) in self.tokens.iter().enumerate() {
            positions.entry(token.as_str()).or_insert(idx);
        }
        positions
    }
}

impl<'a> IntoIterator for &'a IngredientSequence {
    type Item = &'a IngredientToken;
    type IntoIter = std::slice::Iter<'a, IngredientToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<IngredientToken> for IngredientSequence {
    fn from_iter<I: IntoIterator<Item = IngredientToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for IngredientSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(IngredientToken::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_positions_ignores_later_duplicates() {
        let seq: IngredientSequence = ["a", "b", "a", "c", "b"].into_iter().collect();
        let positions = seq.first_positions();
        assert_eq!(positions["a"], 0);
        assert_eq!(positions["b"], 1);
        assert_eq!(positions["c"], 3);
        assert_eq!(positions.len(), 3);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_blank_token() {
        assert!(IngredientToken::from("").is_blank());
        assert!(!IngredientToken::from("water").is_blank());
    }

    #[test]
    fn test_token_serializes_as_plain_string() {
        let token = IngredientToken::from("aqua");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"aqua\"");
    }
}
