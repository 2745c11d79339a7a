//! Golden tests over the label fixtures in `tests/fixtures/`.

use ingredient_diff::config::{CompareConfigBuilder, IngredientSource};
use ingredient_diff::pipeline::{compute_comparison, load_ingredients, read_ingredient_file};
use ingredient_diff::reports::{CsvReporter, ReportConfig, ReportGenerator};
use ingredient_diff::{ComparisonInput, IngredientDiffEngine, NormalizerConfig};
use ingredient_diff::matching::VariantConfig;
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_input() -> ComparisonInput {
    let a = read_ingredient_file(&fixture_path("day_cream.txt")).expect("day cream fixture");
    let b = read_ingredient_file(&fixture_path("night_cream.txt")).expect("night cream fixture");
    ComparisonInput::new(a, b).with_names("Day Cream", "Night Cream")
}

#[test]
fn golden_csv_day_vs_night() {
    let report = IngredientDiffEngine::new()
        .compare(&fixture_input())
        .expect("comparison should succeed");
    let csv = CsvReporter::new()
        .generate_report(&report, &ReportConfig::default())
        .expect("csv rendering should succeed");

    let expected = std::fs::read_to_string(fixture_path("day_vs_night.csv")).unwrap();
    assert_eq!(csv, expected);
}

#[test]
fn golden_summary_counts() {
    let report = IngredientDiffEngine::new().compare(&fixture_input()).unwrap();

    assert_eq!(report.summary.a_length, 9);
    // "linalool" is listed twice on the night cream
    assert_eq!(report.summary.b_length, 10);
    assert_eq!(report.summary.shared_count, 6);
    assert_eq!(report.summary.only_a_count, 3);
    assert_eq!(report.summary.only_b_count, 3);
    assert!((report.summary.overlap_ratio - 0.5).abs() < 1e-12);
}

#[test]
fn golden_strip_parentheticals() {
    let report = IngredientDiffEngine::new()
        .with_normalizer_config(NormalizerConfig {
            strip_parentheticals: true,
            ..NormalizerConfig::default()
        })
        .compare(&fixture_input())
        .unwrap();

    let shared: Vec<&str> = report
        .shared_rows
        .iter()
        .map(|row| row.ingredient.as_str())
        .collect();
    assert_eq!(
        shared,
        vec![
            "aqua",
            "cetearyl alcohol",
            "butyrospermum parkii butter",
            "phenoxyethanol",
            "parfum",
            "linalool"
        ]
    );
}

#[test]
fn golden_variant_suggestion() {
    let report = IngredientDiffEngine::new()
        .with_variant_config(VariantConfig {
            enabled: true,
            ..VariantConfig::default()
        })
        .compare(&fixture_input())
        .unwrap();

    let top = report
        .variant_suggestions
        .first()
        .expect("glycerin/glycerine should be suggested");
    assert_eq!(top.a.as_str(), "glycerin");
    assert_eq!(top.b.as_str(), "glycerine");
    // Suggestions leave set membership untouched
    assert!(report.only_a.contains("glycerin"));
    assert!(report.only_b.contains("glycerine"));
}

#[test]
fn golden_pipeline_from_files() {
    let config = CompareConfigBuilder::new()
        .input_a(IngredientSource::File(fixture_path("day_cream.txt")))
        .input_b(IngredientSource::File(fixture_path("night_cream.txt")))
        .quiet(true)
        .build()
        .unwrap();
    let a = load_ingredients(&config.inputs.a, true).unwrap();
    let b = load_ingredients(&config.inputs.b, true).unwrap();
    let report = compute_comparison(&config, &a, &b).unwrap();

    assert_eq!(report.product_a.as_str(), "Product 1");
    let row = report.row("butyrospermum parkii (shea) butter").unwrap();
    assert_eq!((row.a_index, row.b_index), (4, 1));
    assert!((row.a_percentile - 0.5556).abs() < 1e-12);
    assert!((row.b_percentile - 0.9).abs() < 1e-12);
}
