//! Compare command handler.
//!
//! Implements the `compare` subcommand for comparing two ingredient lists.

use crate::config::{CompareConfig, Validatable};
use crate::diff::ComparisonReport;
use crate::error::IngredientDiffError;
use crate::pipeline::{compute_comparison, exit_codes, load_ingredients, output_report};
use anyhow::Result;

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(IngredientDiffError::config(messages.join("; ")).into());
    }

    let quiet = config.behavior.quiet;

    let a = load_ingredients(&config.inputs.a, quiet)?;
    let b = load_ingredients(&config.inputs.b, quiet)?;

    let report = compute_comparison(&config, &a, &b)?;
    let exit_code = determine_exit_code(&config, &report);

    output_report(&config, &report, &a, &b)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on the comparison and config flags.
const fn determine_exit_code(config: &CompareConfig, report: &ComparisonReport) -> i32 {
    if config.behavior.fail_on_unique && report.summary.has_unique() {
        return exit_codes::UNIQUE_FOUND;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompareConfigBuilder, IngredientSource};
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn config(a: &str, b: &str, dir: &TempDir) -> CompareConfigBuilder {
        CompareConfigBuilder::new()
            .input_a(IngredientSource::Inline(a.to_string()))
            .input_b(IngredientSource::Inline(b.to_string()))
            .output_format(ReportFormat::Csv)
            .output_file(Some(dir.path().join("out.csv")))
            .quiet(true)
    }

    #[test]
    fn test_identical_lists_succeed_with_fail_on_unique() {
        let tmp = TempDir::new().unwrap();
        let config = config("Water, Glycerin", "water,glycerin", &tmp)
            .fail_on_unique(true)
            .build()
            .unwrap();
        assert_eq!(run_compare(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_unique_ingredients_exit_code() {
        let tmp = TempDir::new().unwrap();
        let with_flag = config("water, glycerin", "water", &tmp)
            .fail_on_unique(true)
            .build()
            .unwrap();
        assert_eq!(run_compare(with_flag).unwrap(), exit_codes::UNIQUE_FOUND);

        let without_flag = config("water, glycerin", "water", &tmp).build().unwrap();
        assert_eq!(run_compare(without_flag).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_report_written_to_file() {
        let tmp = TempDir::new().unwrap();
        let config = config("water, glycerin, fragrance", "water, alcohol, fragrance", &tmp)
            .build()
            .unwrap();
        run_compare(config).unwrap();
        let csv = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        assert!(csv.contains("fragrance,2,0.3333,2,0.3333"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut config = config("water", "water", &tmp).build().unwrap();
        config.analysis.variants.threshold = 2.0;
        let err = run_compare(config).unwrap_err();
        assert!(err.to_string().contains("analysis.variants.threshold"));
        assert!(matches!(
            err.downcast_ref::<IngredientDiffError>(),
            Some(IngredientDiffError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let config = config("water", "water", &tmp)
            .input_a(IngredientSource::File(tmp.path().join("missing.txt")))
            .build()
            .unwrap();
        let err = run_compare(config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IngredientDiffError>(),
            Some(IngredientDiffError::Io { .. })
        ));
    }
}
