use anyhow::Context as _;
use statkit_stats::quartiles::QuartileSummary;

use super::{DatasetArg, RenderArg};
use crate::util::comma_join;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct QuartilesArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &QuartilesArg) -> anyhow::Result<()> {
    let values = arg.dataset.values()?;
    let Some(summary) = QuartileSummary::from_values(&values) else {
        return arg
            .render
            .emit(arg.dataset.text(), "No data provided.", &serde_json::Value::Null);
    };

    let outliers = if summary.outliers.is_empty() {
        "none".to_owned()
    } else {
        comma_join(&summary.outliers)
    };
    let body = format!(
        "Q1: {}\n\
         Q2 (Median): {}\n\
         Q3: {}\n\
         Q4 (Max): {}\n\
         IQR: {}\n\
         Lower Bound: {}\n\
         Upper Bound: {}\n\
         Outliers: {outliers}",
        summary.q1,
        summary.q2,
        summary.q3,
        summary.q4,
        summary.iqr,
        summary.lower_bound,
        summary.upper_bound,
    );
    let json = serde_json::to_value(&summary).context("Failed to render quartile summary")?;
    arg.render.emit(arg.dataset.text(), &body, &json)
}
