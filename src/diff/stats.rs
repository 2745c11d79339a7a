//! Positional statistics for shared ingredients.
//!
//! An ingredient's percentile is `1 - index / len`, where `index` is its
//! first occurrence. The first ingredient on a label scores 1.0 and scores
//! fall toward 0.0 at the end of the list. Scores are rounded to four
//! places, so the last entry of a list longer than 20,000 rounds to 0.0.

use super::{PositionStat, PositionStats};
use crate::error::{IngredientDiffError, Result};
use crate::model::{IngredientSequence, IngredientToken};

/// Decimal places kept in a percentile.
pub const PERCENTILE_PRECISION: i32 = 4;

/// Round to [`PERCENTILE_PRECISION`] decimal places, halves away from zero.
#[must_use]
pub fn round_percentile(value: f64) -> f64 {
    let scale = 10f64.powi(PERCENTILE_PRECISION);
    (value * scale).round() / scale
}

/// Percentile of a zero-based `index` within a list of `len` entries.
///
/// Callers guarantee `len > 0` and `index < len`.
#[must_use]
pub fn percentile(index: usize, len: usize) -> f64 {
    round_percentile(1.0 - index as f64 / len as f64)
}

/// Compute first index and percentile of each target within `sequence`.
///
/// Targets are passed explicitly; the returned map iterates in target order.
///
/// # Errors
///
/// - [`StatsErrorKind::EmptySequence`](crate::error::StatsErrorKind) when
///   `sequence` is empty and `targets` is not.
/// - [`StatsErrorKind::MissingIngredient`](crate::error::StatsErrorKind)
///   when a target does not occur in `sequence`.
pub fn position_stats<'a, I>(sequence: &IngredientSequence, targets: I) -> Result<PositionStats>
where
    I: IntoIterator<Item = &'a IngredientToken>,
{
    let targets: Vec<&IngredientToken> = targets.into_iter().collect();
    if targets.is_empty() {
        return Ok(PositionStats::new());
    }

    let len = sequence.len();
    if len == 0 {
        return Err(IngredientDiffError::empty_sequence(targets.len()));
    }

    let first_positions = sequence.first_positions();
    let mut stats = PositionStats::with_capacity(targets.len());
    for target in targets {
        let index = first_positions
            .get(target.as_str())
            .copied()
            .ok_or_else(|| IngredientDiffError::missing_ingredient(target.as_str()))?;
        stats.insert(
            target.clone(),
            PositionStat {
                index,
                percentile: percentile(index, len),
            },
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsErrorKind;

    fn seq(items: &[&str]) -> IngredientSequence {
        items.iter().copied().collect()
    }

    fn tokens(items: &[&str]) -> Vec<IngredientToken> {
        items.iter().map(|s| IngredientToken::from(*s)).collect()
    }

    #[test]
    fn test_first_position_scores_one() {
        let sequence = seq(&["water", "glycerin", "fragrance"]);
        let targets = tokens(&["water", "fragrance"]);
        let stats = position_stats(&sequence, &targets).unwrap();

        assert_eq!(stats["water"].index, 0);
        assert!((stats["water"].percentile - 1.0).abs() < f64::EPSILON);
        assert_eq!(stats["fragrance"].index, 2);
        assert!((stats["fragrance"].percentile - 0.3333).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_uses_first_occurrence() {
        let sequence = seq(&["water", "water", "glycerin"]);
        let targets = tokens(&["water"]);
        let stats = position_stats(&sequence, &targets).unwrap();
        assert_eq!(stats["water"].index, 0);
    }

    #[test]
    fn test_empty_sequence_with_targets_fails() {
        let targets = tokens(&["water"]);
        let err = position_stats(&IngredientSequence::default(), &targets).unwrap_err();
        assert_eq!(
            err.stats_kind(),
            Some(&StatsErrorKind::EmptySequence { targets: 1 })
        );
    }

    #[test]
    fn test_empty_sequence_without_targets_succeeds() {
        let targets: Vec<IngredientToken> = Vec::new();
        let stats = position_stats(&IngredientSequence::default(), &targets).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_missing_target_fails() {
        let sequence = seq(&["water"]);
        let targets = tokens(&["glycerin"]);
        let err = position_stats(&sequence, &targets).unwrap_err();
        assert_eq!(
            err.stats_kind(),
            Some(&StatsErrorKind::MissingIngredient {
                ingredient: "glycerin".to_string()
            })
        );
    }

    #[test]
    fn test_rounding() {
        assert!((percentile(1, 3) - 0.6667).abs() < 1e-12);
        assert!((percentile(2, 3) - 0.3333).abs() < 1e-12);
        assert!((percentile(1, 7) - 0.8571).abs() < 1e-12);
        // 1 - 1/16 = 0.9375 exactly; 1 - 1/32 = 0.96875 rounds half away from zero
        assert!((percentile(1, 16) - 0.9375).abs() < 1e-12);
        assert!((percentile(1, 32) - 0.9688).abs() < 1e-12);
    }

    #[test]
    fn test_last_position_is_positive() {
        let p = percentile(9_999, 10_000);
        assert!(p > 0.0);
        assert!((p - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn test_stats_preserve_target_order() {
        let sequence = seq(&["a", "b", "c"]);
        let targets = tokens(&["c", "a"]);
        let stats = position_stats(&sequence, &targets).unwrap();
        let keys: Vec<&str> = stats.keys().map(IngredientToken::as_str).collect();
        assert_eq!(keys, vec!["c", "a"]);
    }
}
