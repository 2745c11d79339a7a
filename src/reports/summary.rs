//! Console reporters: banner-style summary and aligned table.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonReport, ComparisonRow};
use crate::model::{IngredientToken, ProductSide};
use indexmap::IndexSet;
use unicode_width::UnicodeWidthStr;

const BANNER_WIDTH: usize = 60;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Printable form of a token; the blank token would otherwise vanish.
pub(crate) fn display_token(token: &IngredientToken) -> &str {
    if token.is_blank() {
        "(blank)"
    } else {
        token.as_str()
    }
}

fn join_tokens(set: &IndexSet<IngredientToken>) -> String {
    set.iter().map(display_token).collect::<Vec<_>>().join(", ")
}

/// Pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(used)))
}

/// Truncate to at most `max_width` display columns, marking the cut with "...".
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Render shared rows as an aligned text table.
///
/// Column headers use the product labels; the ingredient column is sized to
/// the widest name (capped at 40 columns).
fn render_rows(report: &ComparisonReport, rows: &[&ComparisonRow], colored: bool) -> Vec<String> {
    let name_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(display_token(&r.ingredient)))
        .max()
        .unwrap_or(0)
        .clamp("INGREDIENT".len(), 40);
    let label_a = truncate(report.product_a.as_str(), 24);
    let label_b = truncate(report.product_b.as_str(), 24);
    let col_a = UnicodeWidthStr::width(label_a.as_str()).max(16);
    let col_b = UnicodeWidthStr::width(label_b.as_str()).max(16);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(format!(
        "{}  {}  {}",
        ansi_color(&pad("", name_width), "bold", colored),
        ansi_color(&pad(&label_a, col_a), "bold", colored),
        ansi_color(&pad(&label_b, col_b), "bold", colored),
    ));
    lines.push(format!(
        "{}  {}  {}",
        ansi_color(&pad("INGREDIENT", name_width), "bold", colored),
        ansi_color(&pad("IDX   PERCENTILE", col_a), "bold", colored),
        ansi_color(&pad("IDX   PERCENTILE", col_b), "bold", colored),
    ));
    lines.push("─".repeat(name_width + col_a + col_b + 4));

    for row in rows {
        let a = format!("{:<5} {:.4}", row.a_index, row.a_percentile);
        let b = format!("{:<5} {:.4}", row.b_index, row.b_percentile);
        lines.push(format!(
            "{}  {}  {}",
            pad(&truncate(display_token(&row.ingredient), name_width), name_width),
            pad(&a, col_a),
            pad(&b, col_b),
        ));
    }
    lines
}

/// Row subset honoring the configured limit.
fn limited_rows<'r>(report: &'r ComparisonReport, config: &ReportConfig) -> Vec<&'r ComparisonRow> {
    let limit = config.row_limit(report.shared_rows.len());
    report.shared_rows.iter().take(limit).collect()
}

fn category_lines(report: &ComparisonReport, colored: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for (category, rows) in report.categories() {
        let names: Vec<&str> = rows.iter().map(|r| display_token(&r.ingredient)).collect();
        lines.push(format!(
            "  {} {}",
            ansi_color(&format!("{category}:"), "cyan", colored),
            names.join(", ")
        ));
    }
    lines
}

/// Summary reporter: sectioned console output with banners.
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn banner(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(&"=".repeat(BANNER_WIDTH), "dim"));
        lines.push(self.color(title, "bold"));
        lines.push(self.color(&"=".repeat(BANNER_WIDTH), "dim"));
    }

    fn unique_section(&self, lines: &mut Vec<String>, report: &ComparisonReport, side: ProductSide) {
        let unique = report.only(side);
        let color = match side {
            ProductSide::A => "green",
            ProductSide::B => "yellow",
        };
        lines.push(format!(
            "Ingredients in ONLY {} ({}):",
            self.color(report.label(side).as_str(), color),
            unique.len()
        ));
        if unique.is_empty() {
            lines.push(format!("  {}", self.color("none", "dim")));
        } else {
            lines.push(format!("  {}", join_tokens(unique)));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        report: &ComparisonReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let name_a = report.product_a.as_str();
        let name_b = report.product_b.as_str();
        let mut lines = Vec::new();

        if let Some(title) = &config.title {
            lines.push(self.color(title, "bold"));
            lines.push(String::new());
        }

        self.banner(
            &mut lines,
            &format!("Comparing UNIQUE ingredients for {name_a} and {name_b}"),
        );
        lines.push(String::new());
        self.unique_section(&mut lines, report, ProductSide::A);
        lines.push(String::new());
        lines.push(self.color(&"-".repeat(BANNER_WIDTH), "dim"));
        lines.push(String::new());
        self.unique_section(&mut lines, report, ProductSide::B);
        lines.push(String::new());

        self.banner(
            &mut lines,
            &format!("Comparing SHARED ingredients for {name_a} and {name_b}"),
        );
        lines.push(String::new());
        lines.push(format!(
            "Ingredients in BOTH {name_a} and {name_b} ({}):",
            report.shared_rows.len()
        ));
        if report.shared_rows.is_empty() {
            lines.push(format!("  {}", self.color("none", "dim")));
        } else {
            let names: Vec<&str> = report
                .shared_rows
                .iter()
                .map(|r| display_token(&r.ingredient))
                .collect();
            lines.push(format!("  {}", names.join(", ")));
        }
        lines.push(String::new());

        if !report.shared_rows.is_empty() {
            self.banner(&mut lines, "Index & Relative Percentile of Shared Ingredients");
            lines.push(String::new());
            let rows = limited_rows(report, config);
            lines.extend(render_rows(report, &rows, self.colored));
            if rows.len() < report.shared_rows.len() {
                lines.push(self.color(
                    &format!("  ... {} more", report.shared_rows.len() - rows.len()),
                    "dim",
                ));
            }
            lines.push(String::new());
        }

        if config.group_by_category && !report.shared_rows.is_empty() {
            lines.push(self.color("Shared ingredients by category:", "bold"));
            lines.extend(category_lines(report, self.colored));
            lines.push(String::new());
        }

        if !report.variant_suggestions.is_empty() {
            lines.push(self.color("Possible spelling variants:", "bold"));
            for suggestion in &report.variant_suggestions {
                lines.push(format!(
                    "  {} ~ {} ({:.0}%)",
                    suggestion.a,
                    suggestion.b,
                    suggestion.similarity * 100.0
                ));
            }
            lines.push(String::new());
        }

        let overlap = report.summary.overlap_ratio * 100.0;
        let overlap_color = if overlap >= 75.0 {
            "green"
        } else if overlap >= 40.0 {
            "yellow"
        } else {
            "red"
        };
        lines.push(format!(
            "{}  {}",
            self.color("Overlap:", "cyan"),
            self.color(&format!("{overlap:.1}%"), overlap_color)
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output with aligned columns
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_report(
        &self,
        report: &ComparisonReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if let Some(title) = &config.title {
            lines.push(self.color(title, "bold"));
        }
        lines.push(format!(
            "{} {}  {} {}  {} {}",
            self.color("+", "green"),
            report.summary.only_a_count,
            self.color("-", "yellow"),
            report.summary.only_b_count,
            self.color("=", "cyan"),
            report.summary.shared_count,
        ));
        lines.push(String::new());

        if report.shared_rows.is_empty() {
            lines.push(self.color("No shared ingredients", "dim"));
        } else {
            let rows = limited_rows(report, config);
            lines.extend(render_rows(report, &rows, self.colored));
        }

        for side in [ProductSide::A, ProductSide::B] {
            let unique = report.only(side);
            if unique.is_empty() {
                continue;
            }
            lines.push(String::new());
            let marker = match side {
                ProductSide::A => self.color("+ only", "green"),
                ProductSide::B => self.color("- only", "yellow"),
            };
            lines.push(format!("{marker} {}", report.label(side)));
            for token in unique {
                lines.push(format!("  {}", display_token(token)));
            }
        }

        if config.group_by_category && !report.shared_rows.is_empty() {
            lines.push(String::new());
            lines.extend(category_lines(report, self.colored));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ComparisonInput, IngredientDiffEngine};

    fn scenario() -> ComparisonReport {
        let input = ComparisonInput::new("water, glycerin, fragrance", "water, alcohol, fragrance")
            .with_names("Day Cream", "Night Cream");
        IngredientDiffEngine::new().compare(&input).unwrap()
    }

    #[test]
    fn test_summary_sections() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_report(&scenario(), &ReportConfig::default())
            .unwrap();
        assert!(text.contains("Comparing UNIQUE ingredients for Day Cream and Night Cream"));
        assert!(text.contains("Ingredients in ONLY Day Cream (1):\n  glycerin"));
        assert!(text.contains("Ingredients in ONLY Night Cream (1):\n  alcohol"));
        assert!(text.contains("Ingredients in BOTH Day Cream and Night Cream (2):\n  water, fragrance"));
        assert!(text.contains("0.3333"));
        assert!(text.contains("Overlap:  50.0%"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_summary_category_grouping() {
        let config = ReportConfig {
            group_by_category: true,
            ..Default::default()
        };
        let text = SummaryReporter::new()
            .no_color()
            .generate_report(&scenario(), &config)
            .unwrap();
        assert!(text.contains("Water: water"));
        assert!(text.contains("Fragrance: fragrance"));
    }

    #[test]
    fn test_table_rows_in_a_order() {
        let text = TableReporter::new()
            .no_color()
            .generate_report(&scenario(), &ReportConfig::default())
            .unwrap();
        let water = text.find("water").unwrap();
        let fragrance = text.rfind("fragrance").unwrap();
        assert!(water < fragrance);
        assert!(text.contains("+ only Day Cream"));
        assert!(text.contains("- only Night Cream"));
    }

    #[test]
    fn test_table_row_limit() {
        let config = ReportConfig {
            max_rows: Some(1),
            ..Default::default()
        };
        let text = TableReporter::new()
            .no_color()
            .generate_report(&scenario(), &config)
            .unwrap();
        assert!(!text.contains("0.3333"));
        assert!(text.contains("1.0000"));
    }

    #[test]
    fn test_title_heads_text_reports() {
        let config = ReportConfig {
            title: Some("Day vs Night".to_string()),
            ..Default::default()
        };
        let summary = SummaryReporter::new()
            .no_color()
            .generate_report(&scenario(), &config)
            .unwrap();
        assert!(summary.starts_with("Day vs Night\n"));

        let table = TableReporter::new()
            .no_color()
            .generate_report(&scenario(), &config)
            .unwrap();
        assert!(table.starts_with("Day vs Night\n"));
    }

    #[test]
    fn test_blank_token_is_visible() {
        assert_eq!(display_token(&IngredientToken::from("")), "(blank)");
    }

    #[test]
    fn test_truncate_and_pad() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long ingredient", 10), "a very ...");
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
