use crate::descriptive::median;

/// Quartile summary of a dataset with IQR-based outlier analysis.
///
/// All eight values are computed atomically from one snapshot of the
/// dataset; the struct is never partially updated.
///
/// Quartile halves split around the middle element, excluding the middle
/// element itself when the dataset length is odd (the exclusive-median
/// method, not Tukey's inclusive method).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct QuartileSummary {
    /// First quartile: median of the lower half.
    pub q1: f64,
    /// Second quartile: median of the whole dataset.
    pub q2: f64,
    /// Third quartile: median of the upper half.
    pub q3: f64,
    /// Fourth quartile: maximum of the dataset.
    pub q4: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// Lower outlier bound, `q1 - 1.5 * iqr`.
    pub lower_bound: f64,
    /// Upper outlier bound, `q3 + 1.5 * iqr`.
    pub upper_bound: f64,
    /// Values outside `[lower_bound, upper_bound]`, ascending.
    pub outliers: Vec<f64>,
}

impl QuartileSummary {
    /// Computes the quartile summary from unsorted values.
    ///
    /// Returns `None` for an empty dataset (the "no data" marker) instead of
    /// a degenerate summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use statkit_stats::quartiles::QuartileSummary;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    /// let summary = QuartileSummary::from_values(&values).unwrap();
    /// assert_eq!(summary.q1, 2.5);
    /// assert_eq!(summary.q2, 4.5);
    /// assert_eq!(summary.q3, 6.5);
    /// assert_eq!(summary.q4, 8.0);
    /// assert!(summary.outliers.is_empty());
    ///
    /// assert!(QuartileSummary::from_values(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let q2 = median(&sorted);
        let (lower_half, upper_half) = if n.is_multiple_of(2) {
            (&sorted[..n / 2], &sorted[n / 2..])
        } else {
            // odd length: the middle element belongs to neither half
            (&sorted[..n / 2], &sorted[n / 2 + 1..])
        };
        let q1 = median(lower_half);
        let q3 = median(upper_half);
        let q4 = sorted[n - 1];

        let iqr = q3 - q1;
        let lower_bound = q1 - 1.5 * iqr;
        let upper_bound = q3 + 1.5 * iqr;
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_bound || v > upper_bound)
            .collect();

        Some(Self {
            q1,
            q2,
            q3,
            q4,
            iqr,
            lower_bound,
            upper_bound,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_length_dataset() {
        let summary =
            QuartileSummary::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(summary.q1, 2.5);
        assert_eq!(summary.q2, 4.5);
        assert_eq!(summary.q3, 6.5);
        assert_eq!(summary.q4, 8.0);
        assert_eq!(summary.iqr, 4.0);
        assert_eq!(summary.lower_bound, -3.5);
        assert_eq!(summary.upper_bound, 12.5);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn odd_length_excludes_middle_element_from_halves() {
        // halves are [1, 2] and [4, 5]; 3 belongs to neither
        let summary = QuartileSummary::from_values(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert_eq!(summary.q1, 1.5);
        assert_eq!(summary.q2, 3.0);
        assert_eq!(summary.q3, 4.5);
        assert_eq!(summary.q4, 5.0);
        assert_eq!(summary.iqr, 3.0);
    }

    #[test]
    fn detects_outliers_in_ascending_order() {
        let summary =
            QuartileSummary::from_values(&[100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -50.0]).unwrap();
        assert_eq!(summary.outliers, vec![-50.0, 100.0]);
    }

    #[test]
    fn empty_dataset_has_no_summary() {
        assert!(QuartileSummary::from_values(&[]).is_none());
    }

    #[test]
    fn input_order_is_irrelevant() {
        let a = QuartileSummary::from_values(&[8.0, 1.0, 5.0, 2.0, 7.0, 3.0, 6.0, 4.0]).unwrap();
        let b = QuartileSummary::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(a, b);
    }
}
