//! Text-to-dataset conversion for the statkit project.
//!
//! This crate turns raw text typed by a user into ordered numeric sequences
//! for the statistics engine:
//!
//! - [`dataset_to_list`]: delimited dataset strings (`"1, 2.5, 3"`)
//! - [`stem_leaf_to_list`]: stem-and-leaf plot text
//! - [`DatasetSource`]: pass-through wrapper for input that is already
//!   numeric
//!
//! The converter never computes statistics; it only produces sequences for
//! the engine to consume.
//!
//! # Examples
//!
//! ```
//! use statkit_convert::{dataset_to_list, stem_leaf_to_list};
//!
//! let values = dataset_to_list("1, 2, 3", ",")?;
//! assert_eq!(values, vec![1.0, 2.0, 3.0]);
//!
//! let values = stem_leaf_to_list("5|8\n6|2 5")?;
//! assert_eq!(values, vec![58, 62, 65]);
//! # Ok::<(), statkit_convert::ConvertError>(())
//! ```

pub use self::{dataset::*, stem_leaf::*};

pub mod dataset;
pub mod stem_leaf;

/// Malformed input text.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConvertError {
    /// A dataset field survived neither the float pass nor the integer
    /// fallback.
    #[display("field {index} ({field:?}) is not numeric")]
    NonNumericField { index: usize, field: String },
    /// A stem and leaf that do not concatenate into an integer.
    #[display("stem {stem:?} and leaf {leaf:?} do not form an integer")]
    MalformedStem { stem: String, leaf: String },
}
