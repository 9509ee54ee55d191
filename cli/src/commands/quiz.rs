use anyhow::Result;
use popstats::{QuizAnswers, Report};

use super::{load_dataset, print_report, resolve_config};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let dataset = load_dataset(args)?;

    let quiz = QuizAnswers::compute(&dataset, &config.quiz_options()?)?;
    print_report(&Report::quiz_only(quiz), args, &config.number_format()?)
}
