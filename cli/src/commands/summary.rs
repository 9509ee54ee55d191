use anyhow::Result;
use popstats::{Report, Summary};

use super::{load_dataset, print_report, resolve_config};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let dataset = load_dataset(args)?;

    let summary = Summary::compute(&dataset, config.top_counties)?;
    print_report(&Report::summary_only(summary), args, &config.number_format()?)
}
