//! Keyword-based grouping of ingredients into functional categories.
//!
//! Matching is substring containment against a fixed keyword table, tried
//! longest keyword first so that "cetearyl alcohol" lands in emulsifiers
//! before the bare "alcohol" keyword is considered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Functional category of a cosmetic ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientCategory {
    Water,
    Humectants,
    OilsAndButters,
    Waxes,
    Silicones,
    EmulsifiersAndSurfactants,
    Preservatives,
    Fragrance,
    Actives,
    Colorants,
    Other,
}

impl IngredientCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Humectants => "Humectants",
            Self::OilsAndButters => "Oils & Butters",
            Self::Waxes => "Waxes",
            Self::Silicones => "Silicones",
            Self::EmulsifiersAndSurfactants => "Emulsifiers & Surfactants",
            Self::Preservatives => "Preservatives",
            Self::Fragrance => "Fragrance",
            Self::Actives => "Actives",
            Self::Colorants => "Colorants",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const KEYWORDS: &[(&str, IngredientCategory)] = &[
    ("water", IngredientCategory::Water),
    ("aqua", IngredientCategory::Water),
    ("glycerin", IngredientCategory::Humectants),
    ("glycerol", IngredientCategory::Humectants),
    ("hyaluron", IngredientCategory::Humectants),
    ("propanediol", IngredientCategory::Humectants),
    ("butylene glycol", IngredientCategory::Humectants),
    ("propylene glycol", IngredientCategory::Humectants),
    ("sorbitol", IngredientCategory::Humectants),
    ("urea", IngredientCategory::Humectants),
    ("panthenol", IngredientCategory::Humectants),
    ("oil", IngredientCategory::OilsAndButters),
    ("butter", IngredientCategory::OilsAndButters),
    ("squalane", IngredientCategory::OilsAndButters),
    ("triglyceride", IngredientCategory::OilsAndButters),
    ("lanolin", IngredientCategory::OilsAndButters),
    ("petrolatum", IngredientCategory::OilsAndButters),
    ("wax", IngredientCategory::Waxes),
    ("cera", IngredientCategory::Waxes),
    ("ozokerite", IngredientCategory::Waxes),
    ("paraffin", IngredientCategory::Waxes),
    ("dimethicone", IngredientCategory::Silicones),
    ("cyclopentasiloxane", IngredientCategory::Silicones),
    ("siloxane", IngredientCategory::Silicones),
    ("silicone", IngredientCategory::Silicones),
    ("methicone", IngredientCategory::Silicones),
    ("cetearyl alcohol", IngredientCategory::EmulsifiersAndSurfactants),
    ("cetyl alcohol", IngredientCategory::EmulsifiersAndSurfactants),
    ("stearyl alcohol", IngredientCategory::EmulsifiersAndSurfactants),
    ("glyceryl stearate", IngredientCategory::EmulsifiersAndSurfactants),
    ("polysorbate", IngredientCategory::EmulsifiersAndSurfactants),
    ("lecithin", IngredientCategory::EmulsifiersAndSurfactants),
    ("sulfate", IngredientCategory::EmulsifiersAndSurfactants),
    ("betaine", IngredientCategory::EmulsifiersAndSurfactants),
    ("glucoside", IngredientCategory::EmulsifiersAndSurfactants),
    ("peg-", IngredientCategory::EmulsifiersAndSurfactants),
    ("ceteareth", IngredientCategory::EmulsifiersAndSurfactants),
    ("paraben", IngredientCategory::Preservatives),
    ("phenoxyethanol", IngredientCategory::Preservatives),
    ("benzoate", IngredientCategory::Preservatives),
    ("sorbate", IngredientCategory::Preservatives),
    ("ethylhexylglycerin", IngredientCategory::Preservatives),
    ("benzyl alcohol", IngredientCategory::Preservatives),
    ("chlorphenesin", IngredientCategory::Preservatives),
    ("tocopherol", IngredientCategory::Actives),
    ("retinol", IngredientCategory::Actives),
    ("retinyl", IngredientCategory::Actives),
    ("niacinamide", IngredientCategory::Actives),
    ("ascorbic", IngredientCategory::Actives),
    ("ascorbyl", IngredientCategory::Actives),
    ("peptide", IngredientCategory::Actives),
    ("salicylic", IngredientCategory::Actives),
    ("glycolic", IngredientCategory::Actives),
    ("lactic acid", IngredientCategory::Actives),
    ("ceramide", IngredientCategory::Actives),
    ("extract", IngredientCategory::Actives),
    ("fragrance", IngredientCategory::Fragrance),
    ("parfum", IngredientCategory::Fragrance),
    ("perfume", IngredientCategory::Fragrance),
    ("linalool", IngredientCategory::Fragrance),
    ("limonene", IngredientCategory::Fragrance),
    ("citronellol", IngredientCategory::Fragrance),
    ("geraniol", IngredientCategory::Fragrance),
    ("coumarin", IngredientCategory::Fragrance),
    ("alcohol", IngredientCategory::Fragrance),
    ("ci ", IngredientCategory::Colorants),
    ("iron oxide", IngredientCategory::Colorants),
    ("titanium dioxide", IngredientCategory::Colorants),
    ("mica", IngredientCategory::Colorants),
];

fn keywords_by_length() -> &'static [(&'static str, IngredientCategory)] {
    static SORTED: OnceLock<Vec<(&'static str, IngredientCategory)>> = OnceLock::new();
    SORTED.get_or_init(|| {
        let mut sorted = KEYWORDS.to_vec();
        // Longest first, then alphabetical for a deterministic order.
        sorted.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        sorted
    })
}

/// Categorize a normalized ingredient name.
///
/// Returns [`IngredientCategory::Other`] when no keyword matches.
#[must_use]
pub fn categorize(ingredient: &str) -> IngredientCategory {
    let lower = ingredient.to_lowercase();
    keywords_by_length()
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(IngredientCategory::Other, |(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_variants() {
        assert_eq!(categorize("water"), IngredientCategory::Water);
        assert_eq!(categorize("aqua"), IngredientCategory::Water);
    }

    #[test]
    fn test_longer_keyword_wins() {
        assert_eq!(
            categorize("cetearyl alcohol"),
            IngredientCategory::EmulsifiersAndSurfactants
        );
        assert_eq!(categorize("benzyl alcohol"), IngredientCategory::Preservatives);
        assert_eq!(categorize("alcohol denat."), IngredientCategory::Fragrance);
    }

    #[test]
    fn test_oils_and_waxes() {
        assert_eq!(
            categorize("simmondsia chinensis seed oil"),
            IngredientCategory::OilsAndButters
        );
        assert_eq!(categorize("beeswax"), IngredientCategory::Waxes);
        assert_eq!(categorize("dimethicone"), IngredientCategory::Silicones);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("GLYCERIN"), IngredientCategory::Humectants);
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(categorize("xanthan gum"), IngredientCategory::Other);
        assert_eq!(categorize(""), IngredientCategory::Other);
    }
}
