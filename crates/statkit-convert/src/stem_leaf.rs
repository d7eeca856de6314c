use crate::ConvertError;

/// Decodes stem-and-leaf plot text into the numbers it encodes.
///
/// The parser is line-oriented. Each line splits at its first `|` into a
/// stem (trimmed text on the left) and leaves (whitespace-separated tokens
/// on the right); for every leaf, stem and leaf concatenate into one
/// integer, appended in encounter order. Lines without a `|`, lines with an
/// empty stem, and leaves that are not pure digit strings are skipped
/// silently. A stem that keeps the concatenation from parsing as an integer
/// fails the conversion.
///
/// # Examples
///
/// ```
/// use statkit_convert::stem_leaf_to_list;
///
/// let plot = "5|8\n6|2 5";
/// assert_eq!(stem_leaf_to_list(plot)?, vec![58, 62, 65]);
///
/// // separator-less lines and non-digit leaves are skipped, not errors
/// let plot = "header\n5 | 8 x\n";
/// assert_eq!(stem_leaf_to_list(plot)?, vec![58]);
/// # Ok::<(), statkit_convert::ConvertError>(())
/// ```
pub fn stem_leaf_to_list(text: &str) -> Result<Vec<i64>, ConvertError> {
    let mut values = Vec::new();
    for line in text.trim().lines() {
        let Some((stem_part, leaf_part)) = line.split_once('|') else {
            continue;
        };
        let stem = stem_part.trim();
        if stem.is_empty() {
            continue;
        }
        for leaf in leaf_part.split_whitespace() {
            if !leaf.chars().all(|ch| ch.is_ascii_digit()) {
                continue;
            }
            let value = format!("{stem}{leaf}").parse::<i64>().map_err(|_| {
                ConvertError::MalformedStem {
                    stem: stem.to_owned(),
                    leaf: leaf.to_owned(),
                }
            })?;
            values.push(value);
        }
    }
    Ok(values)
}
