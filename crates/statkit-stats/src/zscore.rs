//! Standard scores.
//!
//! [`z_score`] is the plain entry point. [`z_score_cached`] behaves
//! identically but reuses a caller-owned [`MeanCache`] so that repeated
//! scores against the same dataset skip the mean recomputation.

use std::hash::{DefaultHasher, Hash, Hasher as _};

use crate::descriptive::{mean, population_std_dev};

/// Caller-owned cache for the dataset mean used by [`z_score_cached`].
///
/// The cache is keyed by a hash of the dataset's bit patterns and
/// self-invalidates when the dataset changes, so it must be scoped to one
/// logical dataset by the caller, never shared across unrelated datasets.
/// It is a pure optimization with no observable behavioral difference.
#[derive(Debug, Clone, Default)]
pub struct MeanCache {
    entry: Option<(u64, f64)>,
}

impl MeanCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn mean_for(&mut self, values: &[f64]) -> f64 {
        let key = dataset_key(values);
        if let Some((cached_key, cached_mean)) = self.entry
            && cached_key == key
        {
            return cached_mean;
        }
        let mean = mean(values);
        self.entry = Some((key, mean));
        mean
    }
}

fn dataset_key(values: &[f64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    values.len().hash(&mut hasher);
    for value in values {
        value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// Z-score of `value` within the dataset.
///
/// Returns `None` when the score is undefined: an empty dataset, or a
/// population standard deviation of exactly zero (division is never
/// attempted).
///
/// # Examples
///
/// ```
/// use statkit_stats::zscore::z_score;
///
/// let z = z_score(&[10.0, 20.0, 30.0], 25.0).unwrap();
/// assert!((z - 0.612_372_435_695_794_5).abs() < 1e-12);
///
/// assert_eq!(z_score(&[5.0, 5.0, 5.0], 5.0), None);
/// ```
#[must_use]
pub fn z_score(values: &[f64], value: f64) -> Option<f64> {
    score_with_mean(values, value, mean(values))
}

/// Z-score of `value` within the dataset, reusing a cached mean.
///
/// Observable behavior is identical to [`z_score`]; the cache only avoids
/// recomputing the mean while the dataset is unchanged.
#[must_use]
pub fn z_score_cached(values: &[f64], value: f64, cache: &mut MeanCache) -> Option<f64> {
    let mean = cache.mean_for(values);
    score_with_mean(values, value, mean)
}

#[expect(clippy::float_cmp)]
fn score_with_mean(values: &[f64], value: f64, mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let std_dev = population_std_dev(values);
    if std_dev == 0.0 {
        return None;
    }
    Some((value - mean) / std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_score() {
        let z = z_score(&[10.0, 20.0, 30.0], 25.0).unwrap();
        let expected = 5.0 / (200.0_f64 / 3.0).sqrt();
        assert!((z - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_is_undefined() {
        assert_eq!(z_score(&[5.0, 5.0, 5.0], 5.0), None);
    }

    #[test]
    fn empty_dataset_is_undefined() {
        assert_eq!(z_score(&[], 1.0), None);
    }

    #[test]
    fn cached_matches_uncached() {
        let values = [10.0, 20.0, 30.0];
        let mut cache = MeanCache::new();
        assert_eq!(
            z_score_cached(&values, 25.0, &mut cache),
            z_score(&values, 25.0)
        );
        // second call hits the cache
        assert_eq!(
            z_score_cached(&values, 12.0, &mut cache),
            z_score(&values, 12.0)
        );
    }

    #[test]
    fn cache_invalidates_when_dataset_changes() {
        let mut cache = MeanCache::new();
        let first = [10.0, 20.0, 30.0];
        let second = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            z_score_cached(&first, 25.0, &mut cache),
            z_score(&first, 25.0)
        );
        assert_eq!(
            z_score_cached(&second, 2.0, &mut cache),
            z_score(&second, 2.0)
        );
    }
}
