//! Pipeline orchestration for ingredient comparisons.
//!
//! This module provides the load → compare → report workflow used by the
//! CLI command handlers.

mod compare_stage;
mod input;
mod output;
mod report_stage;

pub use compare_stage::compute_comparison;
pub use input::{load_ingredients, read_ingredient_file, LoadedIngredients};
pub use output::{color_allowed, OutputTarget};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - lists compared (and no unique ingredients, or --fail-on-unique unset)
    pub const SUCCESS: i32 = 0;
    /// Unique ingredients were found and --fail-on-unique is set
    pub const UNIQUE_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
