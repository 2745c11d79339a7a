//! Property-based tests for the comparison pipeline.
//!
//! Ensures the pipeline handles arbitrary input without panicking,
//! and that the set and positional invariants hold across random lists.

use indexmap::IndexSet;
use ingredient_diff::{
    compare, normalize, position_stats, ComparisonInput, IngredientDiffEngine, IngredientToken,
};
use proptest::prelude::*;

/// Ingredient lists drawn from a small vocabulary so that overlaps and
/// duplicates are common. Names carry random case and padding.
fn ingredient_list() -> impl Strategy<Value = String> {
    let name = prop::sample::select(vec![
        "Water", "glycerin", "FRAGRANCE", "shea butter", "Niacinamide", "retinol", "alcohol",
        "cetyl alcohol", "tocopherol", "citric acid",
    ]);
    let padded = (name, " {0,2}", " {0,2}").prop_map(|(n, l, r)| format!("{l}{n}{r}"));
    prop::collection::vec(padded, 0..25).prop_map(|names| names.join(","))
}

fn distinct(raw: &str) -> IndexSet<IngredientToken> {
    normalize(raw).iter().cloned().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn pipeline_doesnt_panic(a in "\\PC{0,200}", b in "\\PC{0,200}") {
        let input = ComparisonInput::new(a, b);
        prop_assert!(IngredientDiffEngine::new().compare(&input).is_ok());
    }

    #[test]
    fn sets_partition_all_distinct_ingredients(a in ingredient_list(), b in ingredient_list()) {
        let result = compare(&normalize(&a), &normalize(&b));

        let union: IndexSet<IngredientToken> = distinct(&a).union(&distinct(&b)).cloned().collect();
        prop_assert_eq!(result.distinct_total(), union.len());
        for token in &union {
            let hits = [&result.only_a, &result.only_b, &result.shared]
                .iter()
                .filter(|set| set.contains(token))
                .count();
            prop_assert_eq!(hits, 1, "{} must be in exactly one set", token);
        }
    }

    #[test]
    fn compare_is_deterministic(a in ingredient_list(), b in ingredient_list()) {
        let seq_a = normalize(&a);
        let seq_b = normalize(&b);
        prop_assert_eq!(compare(&seq_a, &seq_b), compare(&seq_a, &seq_b));
    }

    #[test]
    fn normalization_is_idempotent(raw in ingredient_list()) {
        let once = normalize(&raw);
        let joined = once.iter().map(IngredientToken::as_str).collect::<Vec<_>>().join(", ");
        prop_assert_eq!(normalize(&joined), once);
    }

    #[test]
    fn percentiles_are_bounded(raw in ingredient_list()) {
        let seq = normalize(&raw);
        let targets = distinct(&raw);
        let stats = position_stats(&seq, &targets).unwrap();
        for stat in stats.values() {
            prop_assert!(stat.percentile > 0.0 && stat.percentile <= 1.0);
            prop_assert_eq!(stat.percentile == 1.0, stat.index == 0);
        }
    }

    #[test]
    fn percentile_recovers_index(raw in ingredient_list()) {
        let seq = normalize(&raw);
        let len = seq.len() as f64;
        let stats = position_stats(&seq, &distinct(&raw)).unwrap();
        for (token, stat) in &stats {
            let recovered = (len * (1.0 - stat.percentile)).round() as usize;
            prop_assert_eq!(recovered, stat.index);
            prop_assert_eq!(seq.tokens()[stat.index].as_str(), token.as_str());
        }
    }

    #[test]
    fn rows_sorted_by_a_index(a in ingredient_list(), b in ingredient_list()) {
        let report = IngredientDiffEngine::new()
            .compare(&ComparisonInput::new(a, b))
            .unwrap();
        prop_assert_eq!(report.shared_rows.len(), report.summary.shared_count);
        for pair in report.shared_rows.windows(2) {
            prop_assert!(pair[0].a_index <= pair[1].a_index);
        }
    }
}
