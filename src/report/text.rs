//! Plain-text rendering of statistics and quiz answers.

use std::fmt::Write;

use anyhow::Result;

use crate::{quiz::QuizAnswers, stats::Summary};
use super::NumberFormat;

pub(crate) fn write_summary(out: &mut String, summary: &Summary, fmt: &NumberFormat) -> Result<()> {
    writeln!(out, "The largest state or territory by area is {} and the smallest one is {}.",
        summary.states_by_area.largest, summary.states_by_area.smallest)?;
    writeln!(out, "The largest CA county by area is {} and the smallest one is {}.",
        summary.counties_by_area.largest, summary.counties_by_area.smallest)?;

    writeln!(out, "The total US population is {}.", fmt.count(summary.total_population))?;
    writeln!(out, "The total US population from states is {}.", fmt.count(summary.states_only_population))?;
    writeln!(out, "This means that there are {} people who live in US territories.",
        fmt.count(summary.territory_population))?;
    writeln!(out, "The total number of Electoral College votes is {}.", summary.total_ec_votes)?;

    writeln!(out, "The total population of California is {}.", fmt.count(summary.ca_population))?;
    writeln!(out, "California is {}% of the US total population.", fmt.percent(summary.ca_share_of_us_pct))?;

    let top = &summary.top_counties;
    writeln!(out,
        "The population of the largest {} counties ({}) in CA is {} which is {}% of CA total population or {}% of the US population.",
        top.names.len(),
        top.joined_names(),
        fmt.count(top.population),
        fmt.percent(top.share_of_ca_pct),
        fmt.percent(top.share_of_us_pct),
    )?;
    Ok(())
}

pub(crate) fn write_quiz(out: &mut String, quiz: &QuizAnswers, fmt: &NumberFormat) -> Result<()> {
    writeln!(out, "-----Quiz 8-----")?;
    let scope = if quiz.options.include_dc { "counted" } else { "not counted" };
    writeln!(out, "District of Columbia is {scope} as a state.")?;

    let population = &quiz.population_count;
    writeln!(out, "1. {} (states with population below {}, the combined population of {})",
        population.count, fmt.count(population.threshold), population.counties.join(", "))?;

    let area = &quiz.area_count;
    writeln!(out, "2. {} (states with land area at most {} sq mi, the area of {})",
        area.count, area.threshold_sq_mi, area.county)?;

    let window = &quiz.electoral_window;
    writeln!(out, "3. ec_sum = {}, {} ec votes: {}, ec_sum - {} ec votes = {}",
        window.ec_sum, window.anchor, window.anchor_ec_votes, window.anchor, fmt.signed(window.difference))?;
    if window.members.is_empty() {
        writeln!(out, "   no jurisdictions combine to between {} and {} people",
            fmt.count(quiz.options.window.lower), fmt.count(quiz.options.window.upper))?;
    } else {
        writeln!(out, "   {} jurisdictions totaling {} people: {}",
            window.members.len(), fmt.count(window.population), window.members.join(", "))?;
    }
    Ok(())
}
