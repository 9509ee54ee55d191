//! The three quiz queries over a dataset.
//!
//! All queries are pure functions of the dataset and a [`QuizOptions`]; each
//! one establishes the ordering it needs over borrowed records.

mod threshold;
mod window;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{dataset::Dataset, stats::order::ascending_by_count, types::State};

pub use threshold::{
    AreaCount, PopulationCount, THRESHOLD_RANKS,
    count_land_area_at_most, count_population_below, population_threshold,
};
pub use window::{
    DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND,
    WindowBounds, WindowPhase, WindowSelection, WindowStop, select_prefix,
};

/// Inputs that change quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizOptions {
    /// Count the District of Columbia as a state.
    pub include_dc: bool,
    pub window: WindowBounds,
}

/// Answer to the windowed population sum query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectoralWindow {
    /// Selected jurisdictions, least to most populous.
    pub members: Vec<String>,
    pub population: u64,
    pub phase: WindowPhase,
    pub stop: WindowStop,
    pub ec_sum: u64,
    /// Most-populous candidate jurisdiction.
    pub anchor: String,
    pub anchor_ec_votes: u32,
    /// `ec_sum - anchor_ec_votes`.
    pub difference: i64,
}

/// Answers to all three queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizAnswers {
    pub options: QuizOptions,
    pub population_count: PopulationCount,
    pub area_count: AreaCount,
    pub electoral_window: ElectoralWindow,
}

impl QuizAnswers {
    pub fn compute(dataset: &Dataset, options: &QuizOptions) -> Result<Self> {
        tracing::info!(include_dc = options.include_dc, "running quiz queries");

        Ok(Self {
            options: *options,
            population_count: threshold::population_count(candidates(dataset, options), dataset.counties())?,
            area_count: threshold::area_count(candidates(dataset, options), dataset.counties())?,
            electoral_window: electoral_window(dataset, options)?,
        })
    }
}

/// Voting jurisdictions the quiz counts over, in load order.
pub fn candidates<'a>(dataset: &'a Dataset, options: &QuizOptions) -> impl Iterator<Item = &'a State> + use<'a> {
    let include_dc = options.include_dc;
    dataset.voting_states().filter(move |s| include_dc || !s.is_district_of_columbia())
}

/// Select the least-populous candidates whose combined population lands in the
/// window bounds, and compare their Electoral College votes with the most
/// populous candidate's.
pub fn electoral_window(dataset: &Dataset, options: &QuizOptions) -> Result<ElectoralWindow> {
    let ascending = ascending_by_count(candidates(dataset, options), |s| s.population);
    let anchor = *ascending.last()
        .ok_or_else(|| anyhow!("[quiz] No voting jurisdictions to compare Electoral College votes against"))?;

    let selection = select_prefix(ascending.iter().map(|s| s.population), options.window);
    let members = &ascending[..selection.len];
    let ec_sum: u64 = members.iter().map(|s| s.n_ec_votes as u64).sum();
    tracing::debug!(len = selection.len, population = selection.population, ec_sum, "selected population window");

    Ok(ElectoralWindow {
        members: members.iter().map(|s| s.name.clone()).collect(),
        population: selection.population,
        phase: selection.phase,
        stop: selection.stop,
        ec_sum,
        anchor: anchor.name.clone(),
        anchor_ec_votes: anchor.n_ec_votes,
        difference: ec_sum as i64 - anchor.n_ec_votes as i64,
    })
}
