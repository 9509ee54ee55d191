use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::{stats::order::{ascending_by, descending_by_count}, types::{County, State}};

/// 0-indexed positions, by descending population, of the counties summed into the threshold.
pub const THRESHOLD_RANKS: std::ops::Range<usize> = 2..5;

/// Answer to "how many states have fewer people than counties 3-5 combined?".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationCount {
    pub counties: Vec<String>,
    pub threshold: u64,
    pub count: usize,
}

/// Answer to "how many states have no more land than the largest county?".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaCount {
    pub county: String,
    pub threshold_sq_mi: f64,
    pub count: usize,
}

/// Sum of the populations of the 3rd, 4th and 5th most-populous counties.
pub fn population_threshold(counties: &[County]) -> Result<(Vec<&County>, u64)> {
    let ranked = descending_by_count(counties, |c| c.population);
    let picked = ranked.get(THRESHOLD_RANKS)
        .ok_or_else(|| anyhow!("[quiz::threshold] Need at least {} counties, found {}", THRESHOLD_RANKS.end, counties.len()))?
        .to_vec();
    let threshold = picked.iter().map(|c| c.population).sum();
    Ok((picked, threshold))
}

/// Number of `states` with population strictly below `threshold`.
pub fn count_population_below<'a>(states: impl IntoIterator<Item = &'a State>, threshold: u64) -> usize {
    states.into_iter().filter(|s| s.population < threshold).count()
}

/// Number of `states` with land area at most `threshold_sq_mi`.
pub fn count_land_area_at_most<'a>(states: impl IntoIterator<Item = &'a State>, threshold_sq_mi: f64) -> usize {
    states.into_iter().filter(|s| s.land_area_sq_mi <= threshold_sq_mi).count()
}

pub(crate) fn population_count<'a>(states: impl IntoIterator<Item = &'a State>, counties: &[County]) -> Result<PopulationCount> {
    let (picked, threshold) = population_threshold(counties)?;
    tracing::debug!(threshold, "population threshold from counties ranked 3-5");

    Ok(PopulationCount {
        counties: picked.iter().map(|c| c.name.clone()).collect(),
        threshold,
        count: count_population_below(states, threshold),
    })
}

pub(crate) fn area_count<'a>(states: impl IntoIterator<Item = &'a State>, counties: &[County]) -> Result<AreaCount> {
    let largest = ascending_by(counties, |c| c.area_sq_mi).last().copied()
        .ok_or_else(|| anyhow!("[quiz::threshold] No counties to take an area threshold from"))?;
    tracing::debug!(county = %largest, threshold_sq_mi = largest.area_sq_mi, "area threshold from largest county");

    Ok(AreaCount {
        county: largest.name.clone(),
        threshold_sq_mi: largest.area_sq_mi,
        count: count_land_area_at_most(states, largest.area_sq_mi),
    })
}
