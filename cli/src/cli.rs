use std::path::PathBuf;

/// Population statistics CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "popstats", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print summary statistics followed by the quiz answers
    Report(RunArgs),

    /// Print summary statistics only
    Summary(RunArgs),

    /// Print the quiz answers only
    Quiz(RunArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// State and territory records (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath, default_value = "data/us_states.csv")]
    pub states: PathBuf,

    /// California county records (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath, default_value = "data/ca_counties.csv")]
    pub counties: PathBuf,

    /// TOML config file; flags override its values
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Count the District of Columbia as a state in quiz answers
    #[arg(long, conflicts_with = "exclude_dc")]
    pub include_dc: bool,

    /// Leave the District of Columbia out of quiz answers (default)
    #[arg(long)]
    pub exclude_dc: bool,

    /// Lowest combined population for the quiz window
    #[arg(long)]
    pub lower_bound: Option<u64>,

    /// Highest combined population for the quiz window
    #[arg(long)]
    pub upper_bound: Option<u64>,

    /// Number of most-populous counties in the summary
    #[arg(long)]
    pub top_counties: Option<usize>,

    /// Locale for number rendering, e.g. en_US.UTF-8, de_DE, C
    #[arg(long)]
    pub locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
