//! Statistics engine for the statkit project.
//!
//! This crate provides the numeric half of statkit: pure functions over an
//! ordered sequence of `f64` values, plus a fixed-width binning routine that
//! produces a renderable frequency table.
//!
//! - **Descriptive statistics**: mean, median, mode, range, population and
//!   sample standard deviation
//! - **Quartile analysis**: quartiles, IQR, outlier bounds and outliers
//! - **Z-scores**: standard scores with an optional caller-owned mean cache
//! - **Frequency distributions**: fixed-width class binning with a rendered
//!   two-column report
//!
//! # Modules
//!
//! - [`descriptive`]: scalar statistics summarizing a dataset
//! - [`quartiles`]: quartile/IQR summary with outlier detection
//! - [`zscore`]: standard scores and the mean cache
//! - [`frequency`]: frequency-distribution binning and rendering
//!
//! # Empty-input contract
//!
//! Scalar statistics degrade to `0.0` on an empty dataset rather than
//! failing; composite results ([`quartiles::QuartileSummary`],
//! [`frequency::FrequencyTable`]) signal "no data" with `None`. Structurally
//! invalid arguments signal [`StatsError`]. No input can provoke a division
//! fault or an out-of-bounds access.
//!
//! # Examples
//!
//! ## Scalar statistics
//!
//! ```
//! use statkit_stats::descriptive;
//!
//! let values = [2.0, 4.0, 6.0];
//! assert_eq!(descriptive::mean(&values), 4.0);
//! assert_eq!(descriptive::range(&values), 4.0);
//! ```
//!
//! ## Quartile analysis
//!
//! ```
//! use statkit_stats::quartiles::QuartileSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let summary = QuartileSummary::from_values(&values).unwrap();
//! assert_eq!(summary.q1, 2.5);
//! assert_eq!(summary.iqr, 4.0);
//! ```
//!
//! ## Frequency distribution
//!
//! ```
//! use statkit_stats::frequency::FrequencyTable;
//!
//! let values = [1.0, 2.0, 3.0, 9.0];
//! let table = FrequencyTable::from_values(&values, 0.0, 5.0).unwrap().unwrap();
//! assert_eq!(table.classes[0].count, 3);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod quartiles;
pub mod zscore;

/// Structurally invalid arguments to an engine function.
///
/// Degenerate-but-valid numeric input (empty dataset, zero variance) never
/// produces this error; those cases yield sentinel return values instead.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// Sample standard deviation is undefined for fewer than two values.
    #[display("sample standard deviation needs at least two values, got {len}")]
    InsufficientSample { len: usize },
    /// Frequency classes require a positive, finite width.
    #[display("class width must be a positive finite number, got {width}")]
    InvalidClassWidth { width: f64 },
}
