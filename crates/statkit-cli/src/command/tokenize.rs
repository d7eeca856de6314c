use statkit_tokenize::{BasicWordpiece, TokenFilter, tokenize_text};

use super::RenderArg;
use crate::util::comma_join;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TokenizeArg {
    /// Text to tokenize
    text: String,
    /// Token classification: all, alphabetic or numeric
    #[arg(long, default_value = "all")]
    filter: TokenFilter,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &TokenizeArg) -> anyhow::Result<()> {
    let tokens = tokenize_text(&BasicWordpiece, &arg.text, arg.filter);
    let body = format!("Tokens: {}", comma_join(&tokens));
    let json = serde_json::json!({ "tokens": tokens });
    arg.render.emit(&arg.text, &body, &json)
}
