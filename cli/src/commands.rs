pub(crate) mod quiz;
pub(crate) mod report;
pub(crate) mod summary;

use anyhow::Result;
use popstats::{Config, Dataset, NumberFormat, OutputFormat, Report};

use crate::cli::{Format, RunArgs};

/// Layer flags over the config file (if any) over defaults.
pub(crate) fn resolve_config(args: &RunArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    if args.include_dc { config.include_dc = true }
    if args.exclude_dc { config.include_dc = false }
    if let Some(lower) = args.lower_bound { config.lower_bound = lower }
    if let Some(upper) = args.upper_bound { config.upper_bound = upper }
    if let Some(top) = args.top_counties { config.top_counties = top }
    if let Some(locale) = &args.locale { config.locale = locale.clone() }

    config.validate()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

pub(crate) fn load_dataset(args: &RunArgs) -> Result<Dataset> {
    tracing::info!(states = %args.states.display(), counties = %args.counties.display(), "loading records");
    Dataset::load(&args.states, &args.counties)
}

pub(crate) fn print_report(report: &Report, args: &RunArgs, number_format: &NumberFormat) -> Result<()> {
    let format = match args.format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };
    let rendered = report.render(format, number_format)?;
    if rendered.ends_with('\n') { print!("{rendered}") } else { println!("{rendered}") }
    Ok(())
}
