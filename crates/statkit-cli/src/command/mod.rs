use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use statkit_convert::DatasetSource;

use self::{
    frequency::FrequencyArg, quartiles::QuartilesArg, stem_leaf::StemLeafArg, summary::SummaryArg,
    tokenize::TokenizeArg, z_score::ZScoreArg,
};
use crate::util::Output;

mod frequency;
mod quartiles;
mod stem_leaf;
mod summary;
mod tokenize;
mod z_score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Mean, median, mode, range and standard deviations of a dataset
    Summary(#[clap(flatten)] SummaryArg),
    /// Quartiles, IQR, outlier bounds and outliers of a dataset
    Quartiles(#[clap(flatten)] QuartilesArg),
    /// Z-score of a value within a dataset
    ZScore(#[clap(flatten)] ZScoreArg),
    /// Frequency distribution table of a dataset
    Frequency(#[clap(flatten)] FrequencyArg),
    /// Convert a stem-and-leaf plot to a number list
    StemLeaf(#[clap(flatten)] StemLeafArg),
    /// Tokenize free text into classified tokens
    Tokenize(#[clap(flatten)] TokenizeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.command {
        Command::Summary(arg) => summary::run(&arg),
        Command::Quartiles(arg) => quartiles::run(&arg),
        Command::ZScore(arg) => z_score::run(&arg),
        Command::Frequency(arg) => frequency::run(&arg),
        Command::StemLeaf(arg) => stem_leaf::run(&arg),
        Command::Tokenize(arg) => tokenize::run(&arg),
    }
}

/// Dataset text as the user typed it, plus its field delimiter.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DatasetArg {
    /// Dataset values, e.g. "1, 2.5, 3"
    dataset: String,
    /// Field delimiter within the dataset string
    #[arg(long, default_value = statkit_convert::DEFAULT_DELIMITER)]
    delimiter: String,
}

impl DatasetArg {
    pub fn text(&self) -> &str {
        &self.dataset
    }

    pub fn values(&self) -> anyhow::Result<Vec<f64>> {
        DatasetSource::from(self.dataset.clone())
            .resolve(&self.delimiter)
            .context("Invalid dataset")
    }
}

/// Output options shared by every subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct RenderArg {
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
    /// Save the dataset and output to a file instead of printing
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RenderArg {
    pub fn emit(&self, dataset: &str, body: &str, json: &serde_json::Value) -> anyhow::Result<()> {
        let body = if self.json {
            serde_json::to_string_pretty(json).context("Failed to render JSON output")?
        } else {
            body.trim_end().to_owned()
        };
        match &self.output {
            Some(path) => Output::open(path.clone())?.write_report(dataset, &body),
            None => Output::stdout().write_body(&body),
        }
    }
}
