//! Ingredient list comparison.
//!
//! The comparison is a single forward pass over four stages:
//!
//! 1. **Normalize** each raw list into an [`IngredientSequence`](crate::model::IngredientSequence)
//!    (see [`crate::matching`]).
//! 2. **Compare** the two sequences as sets ([`compare`]).
//! 3. **Position statistics** for every shared ingredient in each sequence
//!    ([`position_stats`]).
//! 4. **Merge** both statistic maps into rows sorted by product A's index
//!    ([`merge`]).
//!
//! [`IngredientDiffEngine`] wires the stages together.
//!
//! # Example
//!
//! ```
//! use ingredient_diff::diff::{ComparisonInput, IngredientDiffEngine};
//!
//! let input = ComparisonInput::new(
//!     "water, glycerin, fragrance",
//!     "water, alcohol, fragrance",
//! );
//! let report = IngredientDiffEngine::new().compare(&input).unwrap();
//!
//! assert!(report.only_a.contains("glycerin"));
//! assert!(report.only_b.contains("alcohol"));
//! assert_eq!(report.shared_rows[0].ingredient.as_str(), "water");
//! assert_eq!(report.shared_rows[1].a_percentile, 0.3333);
//! ```

mod compare;
mod engine;
mod merge;
mod result;
mod stats;

pub use compare::compare;
pub use engine::{run_comparison, ComparisonInput, IngredientDiffEngine};
pub use merge::merge;
pub use result::{
    ComparisonReport, ComparisonResult, ComparisonRow, ComparisonSummary, PositionStat,
    PositionStats,
};
pub use stats::{percentile, position_stats, round_percentile, PERCENTILE_PRECISION};
