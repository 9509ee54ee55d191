use std::path::Path;

use anyhow::{Context, Result, ensure};

use crate::{io, types::{County, RecordKind, State}};

/// Fewest counties the quiz queries can work with (positions 2..=4 by population).
pub const MIN_COUNTIES: usize = 5;

/// Fewest state records the summary can work with.
pub const MIN_STATES: usize = 1;

/// The validated pair of record sequences, in load order.
#[derive(Debug, Clone)]
pub struct Dataset {
    states: Vec<State>,
    counties: Vec<County>,
}

impl Dataset {
    /// Build a dataset, failing fast if either sequence is too short to report on.
    pub fn new(states: Vec<State>, counties: Vec<County>) -> Result<Self> {
        ensure!(states.len() >= MIN_STATES,
            "[dataset] Need at least {MIN_STATES} state record, found {}", states.len());
        ensure!(counties.len() >= MIN_COUNTIES,
            "[dataset] Need at least {MIN_COUNTIES} county records, found {}", counties.len());

        Ok(Self { states, counties })
    }

    /// Load both sequences from disk, choosing the reader by file extension.
    pub fn load(states_path: &Path, counties_path: &Path) -> Result<Self> {
        let states = io::read_states(states_path)
            .with_context(|| format!("[dataset] Failed to load states from {}", states_path.display()))?;
        tracing::debug!(count = states.len(), kind = %RecordKind::State, "loaded records");

        let counties = io::read_counties(counties_path)
            .with_context(|| format!("[dataset] Failed to load counties from {}", counties_path.display()))?;
        tracing::debug!(count = counties.len(), kind = %RecordKind::County, "loaded records");

        Self::new(states, counties)
    }

    #[inline] pub fn states(&self) -> &[State] { &self.states }

    #[inline] pub fn counties(&self) -> &[County] { &self.counties }

    /// Iterator over the records that cast Electoral College votes.
    #[inline]
    pub fn voting_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(|s| s.is_voting())
    }
}
