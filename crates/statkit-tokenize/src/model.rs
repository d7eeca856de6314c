/// Sub-word decomposition capability behind the tokenizer.
///
/// Implementations split one whitespace-delimited component into sub-word
/// atoms. The tokenizer only relies on two properties: a component that
/// needs no splitting comes back as a single atom, and punctuation the
/// model separates out appears in atoms of its own.
pub trait SubwordModel {
    /// Splits one component into sub-word atoms, in source order.
    fn decompose(&self, component: &str) -> Vec<String>;
}

/// Rule-based stand-in for a pretrained word-piece model.
///
/// Lowercases the component and isolates every character that is neither
/// alphanumeric nor a hyphen into an atom of its own; runs of word
/// characters stay together. Deterministic, no model files, no load time.
///
/// # Examples
///
/// ```
/// use statkit_tokenize::{BasicWordpiece, SubwordModel as _};
///
/// assert_eq!(BasicWordpiece.decompose("Hello"), vec!["hello"]);
/// assert_eq!(BasicWordpiece.decompose("don't"), vec!["don", "'", "t"]);
/// assert_eq!(BasicWordpiece.decompose("x-ray"), vec!["x-ray"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicWordpiece;

impl SubwordModel for BasicWordpiece {
    fn decompose(&self, component: &str) -> Vec<String> {
        let mut atoms = Vec::new();
        let mut run = String::new();
        for ch in component.to_lowercase().chars() {
            if ch.is_alphanumeric() || ch == '-' {
                run.push(ch);
            } else {
                if !run.is_empty() {
                    atoms.push(std::mem::take(&mut run));
                }
                atoms.push(ch.to_string());
            }
        }
        if !run.is_empty() {
            atoms.push(run);
        }
        atoms
    }
}
