use crate::ConvertError;

/// Delimiter used by callers that do not supply their own.
pub const DEFAULT_DELIMITER: &str = ",";

/// Parses a delimited dataset string into numbers.
///
/// Fields are split on `delimiter` and trimmed. Every field is first parsed
/// as a float; if any single field fails, the whole string is re-parsed with
/// every field as an integer instead. The fallback is all-or-nothing per
/// representation, never a per-field mix. A field that survives neither
/// pass fails the whole conversion.
///
/// # Examples
///
/// ```
/// use statkit_convert::dataset_to_list;
///
/// assert_eq!(dataset_to_list("1,2,3", ",")?, vec![1.0, 2.0, 3.0]);
/// assert_eq!(dataset_to_list("1.5, 2, 3", ",")?, vec![1.5, 2.0, 3.0]);
/// assert_eq!(dataset_to_list("4; 5", ";")?, vec![4.0, 5.0]);
/// assert!(dataset_to_list("a,b", ",").is_err());
/// # Ok::<(), statkit_convert::ConvertError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn dataset_to_list(text: &str, delimiter: &str) -> Result<Vec<f64>, ConvertError> {
    let fields = text.split(delimiter).map(str::trim).collect::<Vec<_>>();

    let floats = fields
        .iter()
        .map(|field| field.parse::<f64>())
        .collect::<Result<Vec<_>, _>>();
    if let Ok(values) = floats {
        return Ok(values);
    }

    // fallback: every field as an integer
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field
                .parse::<i64>()
                .map(|value| value as f64)
                .map_err(|_| ConvertError::NonNumericField {
                    index,
                    field: (*field).to_owned(),
                })
        })
        .collect()
}

/// Dataset input as the presentation layer hands it over: either raw text
/// still to be parsed, or a sequence that is already numeric (for example
/// the output of a numeric tokenization run).
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum DatasetSource {
    /// Raw delimited text.
    Text(String),
    /// An already-numeric sequence, passed through unchanged.
    Values(Vec<f64>),
}

impl DatasetSource {
    /// Resolves the source into a numeric sequence.
    ///
    /// Text is parsed with [`dataset_to_list`]; numeric input passes
    /// through untouched.
    pub fn resolve(self, delimiter: &str) -> Result<Vec<f64>, ConvertError> {
        match self {
            DatasetSource::Text(text) => dataset_to_list(&text, delimiter),
            DatasetSource::Values(values) => Ok(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(
            dataset_to_list("1,2,3", DEFAULT_DELIMITER).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn float_parse_covers_the_whole_set() {
        assert_eq!(
            dataset_to_list("1.5,2,3", DEFAULT_DELIMITER).unwrap(),
            vec![1.5, 2.0, 3.0]
        );
    }

    #[test]
    fn trims_whitespace_around_fields() {
        assert_eq!(
            dataset_to_list("  1 , 2 ,  3 ", DEFAULT_DELIMITER).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn honors_custom_delimiters() {
        assert_eq!(
            dataset_to_list("4; 5; 6", ";").unwrap(),
            vec![4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = dataset_to_list("1,b", DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::NonNumericField { index: 1, .. }
        ));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(dataset_to_list("", DEFAULT_DELIMITER).is_err());
    }

    #[test]
    fn source_passes_numeric_input_through() {
        let source = DatasetSource::from(vec![1.0, 2.0]);
        assert_eq!(source.resolve(DEFAULT_DELIMITER).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn source_parses_text_input() {
        let source = DatasetSource::from("7, 8".to_owned());
        assert_eq!(source.resolve(DEFAULT_DELIMITER).unwrap(), vec![7.0, 8.0]);
    }
}
