use anyhow::Context as _;
use statkit_stats::frequency::FrequencyTable;

use super::{DatasetArg, RenderArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FrequencyArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Lowest class limit of the first interval
    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(i32).range(-100_000..=100_000)
    )]
    lowest_class_limit: i32,
    /// Uniform class width
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..=100_000)
    )]
    class_width: u32,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &FrequencyArg) -> anyhow::Result<()> {
    let values = arg.dataset.values()?;
    let table = FrequencyTable::from_values(
        &values,
        f64::from(arg.lowest_class_limit),
        f64::from(arg.class_width),
    )
    .context("Failed to build frequency distribution")?;

    let Some(table) = table else {
        return arg
            .render
            .emit(arg.dataset.text(), "No data provided.", &serde_json::Value::Null);
    };
    let json = serde_json::to_value(&table).context("Failed to render frequency table")?;
    arg.render.emit(arg.dataset.text(), &table.render(), &json)
}
