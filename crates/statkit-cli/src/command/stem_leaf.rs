use std::path::PathBuf;

use anyhow::Context as _;
use statkit_convert::stem_leaf_to_list;

use super::RenderArg;
use crate::util::{self, comma_join};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StemLeafArg {
    /// Stem-and-leaf plot text; read from --input or stdin when omitted
    plot: Option<String>,
    /// Read the plot from a file
    #[arg(long)]
    input: Option<PathBuf>,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &StemLeafArg) -> anyhow::Result<()> {
    let text = match &arg.plot {
        Some(plot) => plot.clone(),
        None => util::read_text_input(arg.input.as_deref())?,
    };
    let values = stem_leaf_to_list(&text).context("Invalid stem-and-leaf plot")?;
    let body = format!("List: {}", comma_join(&values));
    let json = serde_json::json!({ "values": values });
    arg.render.emit(text.trim(), &body, &json)
}
