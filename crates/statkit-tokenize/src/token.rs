use crate::model::SubwordModel;

/// The three-way classification dial supplied by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::FromStr)]
pub enum TokenFilter {
    /// Keep every reassembled token, unfiltered, as text.
    #[default]
    All,
    /// Keep only purely alphabetic tokens.
    Alphabetic,
    /// Keep only integer-shaped tokens, converted to floating point.
    Numeric,
}

/// A classified atom produced by tokenization. Tokens retain source order.
#[derive(Debug, Clone, PartialEq, derive_more::Display, serde::Serialize)]
#[serde(untagged)]
pub enum Token {
    /// A textual token.
    #[display("{_0}")]
    Word(String),
    /// A numeric token, produced only under [`TokenFilter::Numeric`].
    #[display("{_0}")]
    Number(f64),
}

/// Tokenizes free text: splits on whitespace, then decomposes, reassembles
/// and filters each component like [`tokenize_components`].
pub fn tokenize_text<M>(model: &M, text: &str, filter: TokenFilter) -> Vec<Token>
where
    M: SubwordModel + ?Sized,
{
    tokenize_components(model, text.split_whitespace(), filter)
}

/// Tokenizes pre-split components.
///
/// Each component decomposes through the model. A single-atom decomposition
/// is kept as that atom; a multi-atom decomposition reassembles by
/// concatenating only the alphanumeric and hyphen characters of every atom,
/// dropping other punctuation the decomposition produced. Components that
/// reassemble to nothing vanish. The filter then classifies: `Alphabetic`
/// keeps purely alphabetic tokens, `Numeric` keeps tokens shaped as an
/// optional single leading `-` followed by digits (converted to `f64`), and
/// `All` keeps everything as text.
///
/// # Examples
///
/// ```
/// use statkit_tokenize::{BasicWordpiece, Token, TokenFilter, tokenize_components};
///
/// let tokens = tokenize_components(
///     &BasicWordpiece,
///     ["it's", "42"],
///     TokenFilter::All,
/// );
/// assert_eq!(
///     tokens,
///     vec![Token::Word("its".to_owned()), Token::Word("42".to_owned())],
/// );
/// ```
pub fn tokenize_components<M, I, S>(model: &M, components: I, filter: TokenFilter) -> Vec<Token>
where
    M: SubwordModel + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for component in components {
        let atoms = model.decompose(component.as_ref());
        let reassembled = match atoms.as_slice() {
            [] => continue,
            [single] => single.clone(),
            _ => atoms
                .iter()
                .flat_map(|atom| atom.chars())
                .filter(|&ch| ch.is_alphanumeric() || ch == '-')
                .collect(),
        };
        if reassembled.is_empty() {
            continue;
        }
        match filter {
            TokenFilter::All => tokens.push(Token::Word(reassembled)),
            TokenFilter::Alphabetic => {
                if reassembled.chars().all(char::is_alphabetic) {
                    tokens.push(Token::Word(reassembled));
                }
            }
            TokenFilter::Numeric => {
                if let Some(number) = parse_integer_token(&reassembled) {
                    tokens.push(Token::Number(number));
                }
            }
        }
    }
    tokens
}

/// Accepts an optional single leading `-` followed by one or more ASCII
/// digits; anything else is not a numeric token.
fn parse_integer_token(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok()
}
