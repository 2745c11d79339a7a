//! Product identity and display labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared products a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductSide {
    A,
    B,
}

impl ProductSide {
    /// Fallback display name used when no name is supplied.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::A => "Product 1",
            Self::B => "Product 2",
        }
    }
}

impl fmt::Display for ProductSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Display name of a product. Used for labeling output only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLabel {
    pub side: ProductSide,
    pub name: String,
}

impl ProductLabel {
    /// Create a label, falling back to the side's default name when `name`
    /// is blank.
    pub fn new(side: ProductSide, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            side.default_name().to_string()
        } else {
            trimmed.to_string()
        };
        Self { side, name }
    }

    #[must_use]
    pub fn default_for(side: ProductSide) -> Self {
        Self {
            side,
            name: side.default_name().to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProductLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
