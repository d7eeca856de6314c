use std::fmt::Write as _;

use crate::StatsError;

/// A single class interval of a [`FrequencyTable`].
///
/// Every class except the last is half-open, `[lower, upper)`; the last
/// class includes both bounds.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrequencyClass {
    /// Inclusive lower class limit.
    pub lower: f64,
    /// Upper class limit; exclusive except for the last class.
    pub upper: f64,
    /// Number of dataset values falling inside this class.
    pub count: u64,
}

/// Fixed-width frequency distribution over a dataset.
///
/// Classes start at the caller-supplied lowest class limit and share a
/// uniform width, except the final class, which is widened rather than left
/// short should the uniform grid fail to reach the dataset maximum.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrequencyTable {
    /// Class intervals in ascending order.
    pub classes: Vec<FrequencyClass>,
}

impl FrequencyTable {
    /// Bins a dataset into fixed-width classes.
    ///
    /// The number of classes is `ceil((max - lowest_class_limit) / width)`,
    /// clamped to at least one so a degenerate grid (every value at or below
    /// the lowest class limit) can never fault. Each value increments the
    /// first class containing it; values below the lowest class limit fall
    /// into no class and are not counted.
    ///
    /// Returns `Ok(None)` for an empty dataset (the "no data" sentinel) and
    /// [`StatsError::InvalidClassWidth`] for a non-positive or non-finite
    /// width.
    ///
    /// # Examples
    ///
    /// ```
    /// use statkit_stats::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_values(&[1.0, 2.0, 3.0, 9.0], 0.0, 5.0)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(table.classes.len(), 2);
    /// assert_eq!(table.classes[0].count, 3);
    /// assert_eq!(table.classes[1].count, 1);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_values(
        values: &[f64],
        lowest_class_limit: f64,
        class_width: f64,
    ) -> Result<Option<Self>, StatsError> {
        if !class_width.is_finite() || class_width <= 0.0 {
            return Err(StatsError::InvalidClassWidth { width: class_width });
        }
        if values.is_empty() {
            return Ok(None);
        }

        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let num_classes = class_count((max_value - lowest_class_limit) / class_width);
        let mut classes = (0..num_classes)
            .map(|i| {
                let lower = lowest_class_limit + (i as f64) * class_width;
                FrequencyClass {
                    lower,
                    upper: lower + class_width,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        // widen the last class if the uniform grid undershoots the maximum
        let last = num_classes - 1;
        if classes[last].upper < max_value {
            classes[last].upper = max_value;
        }

        for &value in values {
            for (idx, class) in classes.iter_mut().enumerate() {
                let contains = if idx == last {
                    class.lower <= value && value <= class.upper
                } else {
                    class.lower <= value && value < class.upper
                };
                if contains {
                    class.count += 1;
                    break;
                }
            }
        }

        Ok(Some(Self { classes }))
    }

    /// Renders the table as a two-column text report.
    ///
    /// ```text
    /// Class Interval           Frequency
    /// -----------------------------------
    /// 0.00 - 5.00              3
    /// 5.00 - 10.00             1
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<25}{:<10}", "Class Interval", "Frequency");
        let _ = writeln!(out, "{}", "-".repeat(35));
        for class in &self.classes {
            let interval = format!("{:.2} - {:.2}", class.lower, class.upper);
            let _ = writeln!(out, "{interval:<25}{:<10}", class.count);
        }
        out
    }
}

#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn class_count(raw_classes: f64) -> usize {
    let ceil = raw_classes.ceil();
    if ceil < 1.0 { 1 } else { ceil as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_with_closed_final_class() {
        let table = FrequencyTable::from_values(&[1.0, 2.0, 3.0, 9.0], 0.0, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(table.classes.len(), 2);
        assert_eq!(table.classes[0].lower, 0.0);
        assert_eq!(table.classes[0].upper, 5.0);
        assert_eq!(table.classes[0].count, 3);
        // the final class includes its upper bound
        assert_eq!(table.classes[1].upper, 10.0);
        assert_eq!(table.classes[1].count, 1);
    }

    #[test]
    fn value_on_interior_boundary_goes_to_the_higher_class() {
        let table = FrequencyTable::from_values(&[5.0, 4.9, 10.0], 0.0, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(table.classes[0].count, 1);
        assert_eq!(table.classes[1].count, 2);
    }

    #[test]
    fn no_value_is_double_counted() {
        let table = FrequencyTable::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 0.0, 1.0)
            .unwrap()
            .unwrap();
        let total: u64 = table.classes.iter().map(|c| c.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn degenerate_grid_still_produces_one_class() {
        // every value sits at or below the lowest class limit
        let table = FrequencyTable::from_values(&[1.0, 2.0], 5.0, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(table.classes.len(), 1);
        assert_eq!(table.classes[0].count, 0);
    }

    #[test]
    fn values_below_the_lowest_limit_are_not_counted() {
        let table = FrequencyTable::from_values(&[-3.0, 1.0, 2.0], 0.0, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(table.classes.len(), 1);
        assert_eq!(table.classes[0].count, 2);
    }

    #[test]
    fn empty_dataset_is_no_data() {
        assert!(FrequencyTable::from_values(&[], 0.0, 5.0).unwrap().is_none());
    }

    #[test]
    fn non_positive_width_is_invalid() {
        assert!(matches!(
            FrequencyTable::from_values(&[1.0], 0.0, 0.0),
            Err(StatsError::InvalidClassWidth { .. })
        ));
        assert!(matches!(
            FrequencyTable::from_values(&[1.0], 0.0, -2.0),
            Err(StatsError::InvalidClassWidth { .. })
        ));
    }

    #[test]
    fn renders_two_column_report() {
        let table = FrequencyTable::from_values(&[1.0, 2.0, 3.0, 9.0], 0.0, 5.0)
            .unwrap()
            .unwrap();
        let report = table.render();
        assert!(report.starts_with("Class Interval"));
        assert!(report.contains("0.00 - 5.00"));
        assert!(report.contains("5.00 - 10.00"));
    }
}
