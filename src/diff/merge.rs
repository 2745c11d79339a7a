//! Merging per-product statistics into the comparison table.

use super::{ComparisonRow, PositionStats};
use crate::error::{IngredientDiffError, Result};
use crate::model::{IngredientToken, ProductSide};

/// Join both products' statistics on ingredient name.
///
/// One row is produced per shared ingredient. Rows are sorted by product A's
/// index with a stable sort, so ties keep the iteration order of `shared`.
///
/// # Errors
///
/// Returns [`MergeErrorKind::MissingStat`](crate::error::MergeErrorKind) if
/// either map lacks an entry for a shared ingredient.
pub fn merge<'a, I>(
    stats_a: &PositionStats,
    stats_b: &PositionStats,
    shared: I,
) -> Result<Vec<ComparisonRow>>
where
    I: IntoIterator<Item = &'a IngredientToken>,
{
    let mut rows = shared
        .into_iter()
        .map(|ingredient| {
            let a = stats_a
                .get(ingredient)
                .ok_or_else(|| IngredientDiffError::missing_stat(ingredient.as_str(), ProductSide::A))?;
            let b = stats_b
                .get(ingredient)
                .ok_or_else(|| IngredientDiffError::missing_stat(ingredient.as_str(), ProductSide::B))?;
            Ok(ComparisonRow {
                ingredient: ingredient.clone(),
                a_index: a.index,
                a_percentile: a.percentile,
                b_index: b.index,
                b_percentile: b.percentile,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by_key(|row| row.a_index);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::PositionStat;
    use crate::error::MergeErrorKind;

    fn stats(entries: &[(&str, usize, f64)]) -> PositionStats {
        entries
            .iter()
            .map(|(name, index, percentile)| {
                (
                    IngredientToken::from(*name),
                    PositionStat {
                        index: *index,
                        percentile: *percentile,
                    },
                )
            })
            .collect()
    }

    fn tokens(items: &[&str]) -> Vec<IngredientToken> {
        items.iter().map(|s| IngredientToken::from(*s)).collect()
    }

    #[test]
    fn test_rows_sorted_by_a_index() {
        let a = stats(&[("fragrance", 2, 0.3333), ("water", 0, 1.0)]);
        let b = stats(&[("fragrance", 0, 1.0), ("water", 1, 0.6667)]);
        let shared = tokens(&["fragrance", "water"]);

        let rows = merge(&a, &b, &shared).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ingredient.as_str(), "water");
        assert_eq!(rows[0].b_index, 1);
        assert_eq!(rows[1].ingredient.as_str(), "fragrance");
        assert_eq!(rows[1].b_index, 0);
    }

    #[test]
    fn test_ties_keep_shared_order() {
        // Ties cannot occur from a real sequence, but the sort must stay stable.
        let a = stats(&[("x", 1, 0.5), ("y", 1, 0.5)]);
        let b = stats(&[("x", 0, 1.0), ("y", 1, 0.5)]);
        let rows = merge(&a, &b, &tokens(&["y", "x"])).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.ingredient.as_str()).collect();
        assert_eq!(names, vec!["y", "x"]);
    }

    #[test]
    fn test_missing_stat_reports_side() {
        let a = stats(&[("water", 0, 1.0)]);
        let b = stats(&[]);
        let err = merge(&a, &b, &tokens(&["water"])).unwrap_err();
        match err {
            IngredientDiffError::Merge { source, .. } => assert_eq!(
                source,
                MergeErrorKind::MissingStat {
                    ingredient: "water".to_string(),
                    side: ProductSide::B,
                }
            ),
            other => panic!("Expected Merge error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_shared_gives_empty_table() {
        let rows = merge(&stats(&[]), &stats(&[]), &tokens(&[])).unwrap();
        assert!(rows.is_empty());
    }
}
