//! Report output stage.
//!
//! Handles generating and writing comparison reports.

use crate::config::CompareConfig;
use crate::diff::ComparisonReport;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::Result;

use super::{LoadedIngredients, OutputTarget};

/// Output a comparison report to the configured destination.
///
/// Handles format auto-detection and writing to file or stdout.
pub fn output_report(
    config: &CompareConfig,
    report: &ComparisonReport,
    a: &LoadedIngredients,
    b: &LoadedIngredients,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = output_target.resolve_format(config.output.format);

    let report_config = ReportConfig {
        group_by_category: config.analysis.group_by_category,
        max_rows: config.output.max_rows,
        title: config.output.title.clone(),
        metadata: ReportMetadata {
            source_a: Some(a.source.clone()),
            source_b: Some(b.source.clone()),
            ..ReportMetadata::new()
        },
    };

    let use_color = output_target.use_color(config.output.no_color);
    let reporter = create_reporter_with_options(effective_output, use_color);
    tracing::debug!("Rendering {} report", reporter.format());
    let text = reporter.generate_report(report, &report_config)?;

    output_target.write(&text, config.behavior.quiet)
}
