//! CSV report generator.
//!
//! Emits the shared-ingredient table followed by the unique ingredients of
//! each product, suitable for spreadsheet import.

use super::escape::escape_csv;
use super::summary::display_token;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::ComparisonReport;
use crate::model::ProductSide;
use std::fmt::Write;

/// Header row of the shared-ingredient table.
pub const SHARED_HEADER: &str = "ingredient,a_index,a_percentile,b_index,b_percentile";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_report(
        &self,
        report: &ComparisonReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();

        writeln!(content, "# Shared")?;
        writeln!(content, "{SHARED_HEADER}")?;
        for row in &report.shared_rows {
            writeln!(
                content,
                "{},{},{:.4},{},{:.4}",
                escape_csv(row.ingredient.as_str()),
                row.a_index,
                row.a_percentile,
                row.b_index,
                row.b_percentile
            )?;
        }

        writeln!(content)?;
        writeln!(content, "# Unique")?;
        writeln!(content, "product,ingredient")?;
        for side in [ProductSide::A, ProductSide::B] {
            let label = escape_csv(report.label(side).as_str());
            for token in report.only(side) {
                writeln!(content, "{label},{}", escape_csv(display_token(token)))?;
            }
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ComparisonInput, IngredientDiffEngine};

    #[test]
    fn test_csv_shared_table() {
        let input = ComparisonInput::new("water, glycerin, fragrance", "water, alcohol, fragrance")
            .with_names("Cream, Rich", "Lotion");
        let report = IngredientDiffEngine::new().compare(&input).unwrap();
        let csv = CsvReporter::new()
            .generate_report(&report, &ReportConfig::default())
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "# Shared");
        assert_eq!(lines[1], SHARED_HEADER);
        assert_eq!(lines[2], "water,0,1.0000,0,1.0000");
        assert_eq!(lines[3], "fragrance,2,0.3333,2,0.3333");
        assert!(csv.contains("\"Cream, Rich\",glycerin"));
        assert!(csv.contains("Lotion,alcohol"));
    }
}
