//! Free-text tokenization and classification for the statkit project.
//!
//! Input text splits into whitespace components, each component decomposes
//! into sub-word atoms through a [`SubwordModel`], and the atoms reassemble
//! into clean tokens: a component that decomposes into a single atom is kept
//! as that atom, while a multi-atom decomposition is reassembled from only
//! the alphanumeric and hyphen characters of its atoms. A [`TokenFilter`]
//! then classifies the result as unfiltered text, alphabetic-only text, or
//! numeric values.
//!
//! The sub-word model is an injected capability. [`BasicWordpiece`] is the
//! bundled rule-based model; a caller holding a heavier pretrained model can
//! implement [`SubwordModel`] on it and pass that instead, since nothing in
//! the reassembly or filtering depends on a particular segmentation.
//!
//! # Examples
//!
//! ```
//! use statkit_tokenize::{BasicWordpiece, Token, TokenFilter, tokenize_text};
//!
//! let tokens = tokenize_text(&BasicWordpiece, "Hello, world!", TokenFilter::All);
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Word("hello".to_owned()),
//!         Token::Word("world".to_owned()),
//!     ],
//! );
//!
//! let tokens = tokenize_text(&BasicWordpiece, "wind -5 knots", TokenFilter::Numeric);
//! assert_eq!(tokens, vec![Token::Number(-5.0)]);
//! ```

pub use self::{model::*, token::*};

pub mod model;
pub mod token;
