#![no_main]
use ingredient_diff::{ComparisonInput, IngredientDiffEngine};
use libfuzzer_sys::fuzz_target;

/// Fuzz the full comparison pipeline.
///
/// The input is split on the first newline into the two product lists.
/// Every shared ingredient must produce a row, so the pipeline never errors.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (a, b) = s.split_once('\n').unwrap_or((s, ""));
        let input = ComparisonInput::new(a, b);
        let report = IngredientDiffEngine::new()
            .compare(&input)
            .expect("comparison of normalized input cannot fail");
        assert_eq!(report.shared_rows.len(), report.summary.shared_count);
    }
});
