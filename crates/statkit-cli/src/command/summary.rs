use statkit_stats::descriptive::{self, AllUniquePolicy, Mode};

use super::{DatasetArg, RenderArg};
use crate::util::comma_join;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Report every value of an all-unique dataset as a tied mode instead
    /// of "no mode"
    #[arg(long)]
    list_all_unique: bool,
    #[clap(flatten)]
    render: RenderArg,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let values = arg.dataset.values()?;
    let policy = if arg.list_all_unique {
        AllUniquePolicy::ListAll
    } else {
        AllUniquePolicy::NoMode
    };

    let mean = descriptive::mean(&values);
    let median = descriptive::median(&values);
    let mode = descriptive::mode(&values, policy);
    let range = descriptive::range(&values);
    let population_std_dev = descriptive::population_std_dev(&values);
    // undefined for a single value; shown as such rather than aborting
    let sample_std_dev = descriptive::sample_std_dev(&values);
    let sample_text = match &sample_std_dev {
        Ok(value) => value.to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let body = format!(
        "Mean: {mean}\n\
         Median: {median}\n\
         Mode: {}\n\
         Range: {range}\n\
         Population Standard Deviation: {population_std_dev}\n\
         Sample Standard Deviation: {sample_text}",
        render_mode(&mode),
    );
    let json = serde_json::json!({
        "mean": mean,
        "median": median,
        "mode": mode,
        "range": range,
        "population_std_dev": population_std_dev,
        "sample_std_dev": sample_std_dev.ok(),
    });
    arg.render.emit(arg.dataset.text(), &body, &json)
}

fn render_mode(mode: &Mode) -> String {
    match mode {
        Mode::None => "no mode".to_owned(),
        Mode::Single(value) => value.to_string(),
        Mode::Ties(values) => comma_join(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_mode_variants() {
        assert_eq!(render_mode(&Mode::None), "no mode");
        assert_eq!(render_mode(&Mode::Single(2.0)), "2");
        assert_eq!(render_mode(&Mode::Ties(vec![1.0, 2.5])), "1, 2.5");
    }
}
