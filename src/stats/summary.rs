use anyhow::{Result, ensure};
use serde::Serialize;

use crate::{dataset::Dataset, types::{County, State}};
use super::order::{ascending_by, descending_by_count, percent};

/// Default number of most-populous counties reported in the summary.
pub const DEFAULT_TOP_COUNTIES: usize = 3;

/// Largest and smallest record of a sequence by area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaExtremes {
    pub largest: String,
    pub smallest: String,
}

/// The most-populous counties and their combined share of CA and US population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCounties {
    pub names: Vec<String>,
    pub population: u64,
    pub share_of_ca_pct: f64,
    pub share_of_us_pct: f64,
}

impl TopCounties {
    /// County names joined for display.
    pub fn joined_names(&self) -> String { self.names.join(", ") }
}

/// Descriptive statistics over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub states_by_area: AreaExtremes,
    pub counties_by_area: AreaExtremes,
    pub total_population: u64,
    pub states_only_population: u64,
    pub territory_population: u64,
    pub voting_count: usize,
    pub territory_count: usize,
    pub total_ec_votes: u64,
    pub ca_population: u64,
    pub ca_share_of_us_pct: f64,
    pub top_counties: TopCounties,
}

impl Summary {
    /// Compute the summary, reporting the `top_n` most-populous counties.
    pub fn compute(dataset: &Dataset, top_n: usize) -> Result<Self> {
        ensure!(top_n > 0, "[stats::summary] top_n must be at least 1");

        let states = dataset.states();
        let counties = dataset.counties();

        let total_population: u64 = states.iter().map(|s| s.population).sum();
        let states_only_population: u64 = dataset.voting_states().map(|s| s.population).sum();
        let voting_count = dataset.voting_states().count();
        let total_ec_votes: u64 = states.iter().map(|s| s.n_ec_votes as u64).sum();
        let ca_population: u64 = counties.iter().map(|c| c.population).sum();

        let by_population = descending_by_count(counties, |c| c.population);
        let top: Vec<&County> = by_population.into_iter().take(top_n).collect();
        let top_population: u64 = top.iter().map(|c| c.population).sum();

        tracing::debug!(total_population, states_only_population, ca_population, "computed population totals");

        Ok(Self {
            states_by_area: area_extremes(states, |s: &State| s.area_sq_mi, |s| s.name.clone()),
            counties_by_area: area_extremes(counties, |c: &County| c.area_sq_mi, |c| c.name.clone()),
            total_population,
            states_only_population,
            territory_population: total_population - states_only_population,
            voting_count,
            territory_count: states.len() - voting_count,
            total_ec_votes,
            ca_population,
            ca_share_of_us_pct: percent(ca_population, total_population),
            top_counties: TopCounties {
                names: top.iter().map(|c| c.name.clone()).collect(),
                population: top_population,
                share_of_ca_pct: percent(top_population, ca_population),
                share_of_us_pct: percent(top_population, total_population),
            },
        })
    }
}

// Dataset guarantees both sequences are non-empty.
fn area_extremes<T>(items: &[T], area: impl Fn(&T) -> f64, name: impl Fn(&T) -> String) -> AreaExtremes {
    let sorted = ascending_by(items, area);
    AreaExtremes {
        largest: sorted.last().map(|t| name(t)).unwrap_or_default(),
        smallest: sorted.first().map(|t| name(t)).unwrap_or_default(),
    }
}
