//! Descriptive statistics summarizing a numeric dataset.
//!
//! Every function here degrades to a sentinel (`0.0`, or [`Mode::None`]) on
//! an empty dataset instead of failing; that is the engine's deliberate
//! empty-input contract, not an omission. The one exception is
//! [`sample_std_dev`], which signals [`StatsError::InsufficientSample`] for a
//! single-value dataset because the `n - 1` divisor would be zero.

use crate::StatsError;

/// Arithmetic mean of a dataset.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::mean;
///
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of a dataset.
///
/// Sorts a copy of the input; returns the middle element for an odd number
/// of values, the average of the two middle elements for an even number,
/// and `0.0` for an empty dataset.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::median;
///
/// assert_eq!(median(&[1.0, 3.0, 2.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len().is_multiple_of(2) {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// How [`mode`] treats a dataset in which every value occurs exactly once.
///
/// The two policies reproduce the two historical variants of this engine;
/// neither is silently "fixed" into the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllUniquePolicy {
    /// Report every value as a tied mode.
    ListAll,
    /// Report that the dataset has no mode.
    #[default]
    NoMode,
}

/// Result of a [`mode`] computation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Mode {
    /// No value qualifies as a mode.
    None,
    /// Exactly one value attains the maximum frequency.
    Single(f64),
    /// Several values tie for the maximum frequency, in first-encounter order.
    Ties(Vec<f64>),
}

/// Mode of a dataset: the value(s) attaining the maximum frequency.
///
/// Frequencies are counted per distinct value in first-encounter order, and
/// tied modes are reported in that order. The all-values-unique case is
/// resolved by `policy`; an empty dataset always yields [`Mode::None`].
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::{AllUniquePolicy, Mode, mode};
///
/// assert_eq!(mode(&[1.0, 1.0, 2.0], AllUniquePolicy::NoMode), Mode::Single(1.0));
/// assert_eq!(
///     mode(&[1.0, 1.0, 2.0, 2.0], AllUniquePolicy::NoMode),
///     Mode::Ties(vec![1.0, 2.0]),
/// );
/// assert_eq!(mode(&[1.0, 2.0, 3.0], AllUniquePolicy::NoMode), Mode::None);
/// ```
#[expect(clippy::float_cmp)]
#[must_use]
pub fn mode(values: &[f64], policy: AllUniquePolicy) -> Mode {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let Some(max_freq) = counts.iter().map(|&(_, count)| count).max() else {
        return Mode::None;
    };
    if max_freq == 1 && policy == AllUniquePolicy::NoMode {
        return Mode::None;
    }

    let tied = counts
        .iter()
        .filter(|&&(_, count)| count == max_freq)
        .map(|&(value, _)| value)
        .collect::<Vec<_>>();
    if let [single] = tied.as_slice() {
        Mode::Single(*single)
    } else {
        Mode::Ties(tied)
    }
}

/// Range of a dataset, `max - min`. Returns `0.0` for an empty dataset.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::range;
///
/// assert_eq!(range(&[5.0, 1.0, 9.0]), 8.0);
/// ```
#[must_use]
pub fn range(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

/// Population standard deviation, `sqrt(sum((x - mean)^2) / n)`.
///
/// Returns `0.0` for an empty dataset.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation, `sqrt(sum((x - mean)^2) / (n - 1))`.
///
/// Returns `Ok(0.0)` for an empty dataset (the engine-wide empty-input
/// sentinel) and [`StatsError::InsufficientSample`] for a single value,
/// where the `n - 1` divisor would be zero.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::sample_std_dev;
///
/// let spread = sample_std_dev(&[2.0, 4.0]).unwrap();
/// assert!((spread - 2.0_f64.sqrt()).abs() < 1e-12);
/// assert!(sample_std_dev(&[7.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Ok(0.0);
    }
    if values.len() < 2 {
        return Err(StatsError::InsufficientSample { len: values.len() });
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Ok(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(mean(&[1.5, 2.5]), 2.0);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[1.0, 3.0, 2.0]), 2.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn mode_single_winner() {
        assert_eq!(
            mode(&[1.0, 1.0, 2.0], AllUniquePolicy::NoMode),
            Mode::Single(1.0)
        );
    }

    #[test]
    fn mode_tie_preserves_first_encounter_order() {
        assert_eq!(
            mode(&[2.0, 1.0, 1.0, 2.0], AllUniquePolicy::NoMode),
            Mode::Ties(vec![2.0, 1.0])
        );
    }

    #[test]
    fn mode_all_unique_follows_policy() {
        assert_eq!(mode(&[1.0, 2.0, 3.0], AllUniquePolicy::NoMode), Mode::None);
        assert_eq!(
            mode(&[1.0, 2.0, 3.0], AllUniquePolicy::ListAll),
            Mode::Ties(vec![1.0, 2.0, 3.0])
        );
        // a single-value dataset is all-unique but has a lone max-frequency value
        assert_eq!(
            mode(&[5.0], AllUniquePolicy::ListAll),
            Mode::Single(5.0)
        );
    }

    #[test]
    fn mode_of_empty_is_none_for_both_policies() {
        assert_eq!(mode(&[], AllUniquePolicy::NoMode), Mode::None);
        assert_eq!(mode(&[], AllUniquePolicy::ListAll), Mode::None);
    }

    #[test]
    fn mode_serializes_as_bare_value_list_or_null() {
        assert_eq!(serde_json::to_string(&Mode::Single(2.0)).unwrap(), "2.0");
        assert_eq!(
            serde_json::to_string(&Mode::Ties(vec![1.0, 2.0])).unwrap(),
            "[1.0,2.0]"
        );
        assert_eq!(serde_json::to_string(&Mode::None).unwrap(), "null");
    }

    #[test]
    fn range_of_values() {
        assert_eq!(range(&[5.0, 1.0, 9.0]), 8.0);
        assert_eq!(range(&[]), 0.0);
    }

    #[test]
    fn population_std_dev_known_value() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn population_std_dev_of_empty_is_zero() {
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn sample_std_dev_known_value() {
        let spread = sample_std_dev(&[2.0, 4.0]).unwrap();
        assert!((spread - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sample_std_dev_rejects_single_value() {
        assert!(matches!(
            sample_std_dev(&[7.0]),
            Err(StatsError::InsufficientSample { len: 1 })
        ));
    }

    #[test]
    fn sample_std_dev_of_empty_is_zero_sentinel() {
        assert_eq!(sample_std_dev(&[]).unwrap(), 0.0);
    }
}
