use anyhow::Result;
use popstats::Report;

use super::{load_dataset, print_report, resolve_config};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let dataset = load_dataset(args)?;

    let report = Report::compute(&dataset, config.top_counties, &config.quiz_options()?)?;
    print_report(&report, args, &config.number_format()?)
}
