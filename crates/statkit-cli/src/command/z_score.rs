use statkit_stats::zscore::z_score;

use super::{DatasetArg, RenderArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ZScoreArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Value to score against the dataset
    value: f64,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &ZScoreArg) -> anyhow::Result<()> {
    let values = arg.dataset.values()?;
    let score = z_score(&values, arg.value);
    let body = match score {
        Some(z) => format!("Z-Score: {z}"),
        None => "Z-Score: undefined (zero variance or no data)".to_owned(),
    };
    let json = serde_json::json!({ "value": arg.value, "z_score": score });
    arg.render.emit(arg.dataset.text(), &body, &json)
}
