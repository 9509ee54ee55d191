use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Default lower bound on the window's combined population.
pub const DEFAULT_LOWER_BOUND: u64 = 37_956_694;

/// Default upper bound on the window's combined population.
pub const DEFAULT_UPPER_BOUND: u64 = 41_119_752;

/// Inclusive population range a window must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub lower: u64,
    pub upper: u64,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self { lower: DEFAULT_LOWER_BOUND, upper: DEFAULT_UPPER_BOUND }
    }
}

impl WindowBounds {
    pub fn new(lower: u64, upper: u64) -> Result<Self> {
        ensure!(lower <= upper, "[quiz::window] lower bound {lower} exceeds upper bound {upper}");
        Ok(Self { lower, upper })
    }

    #[inline] pub fn contains(&self, population: u64) -> bool { (self.lower..=self.upper).contains(&population) }
}

/// Phase of the prefix walk.
///
/// The walk is always done once a [`WindowSelection`] exists; the selection
/// keeps the phase the walk was in on entering done, and [`WindowStop`] says
/// why it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPhase {
    /// Running sum has not reached the lower bound yet.
    AccumulatingToLowerBound,
    /// Running sum is within bounds; further records are added while they fit.
    ExtendingToUpperBound,
}

/// Why the prefix walk finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStop {
    /// The next record would have pushed the sum past the upper bound; it is excluded.
    UpperBound,
    /// Every record fit under the upper bound.
    Exhausted,
}

/// Result of walking an ascending population sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSelection {
    /// Number of leading records selected; 0 if no valid window exists.
    pub len: usize,
    /// Combined population of the selected records.
    pub population: u64,
    /// Phase the walk was in when it finished.
    pub phase: WindowPhase,
    pub stop: WindowStop,
}

impl WindowSelection {
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }
}

/// Select the longest prefix of `populations` whose running sum never exceeds
/// `bounds.upper`, provided that sum reaches `bounds.lower`.
///
/// The walk adds records one at a time and stops at the first record that
/// would push the sum past the upper bound (that record is excluded). If the
/// walk stops before the sum reaches the lower bound, no window exists and an
/// empty selection is returned.
pub fn select_prefix(populations: impl IntoIterator<Item = u64>, bounds: WindowBounds) -> WindowSelection {
    let mut len = 0;
    let mut sum: u64 = 0;
    let mut phase = WindowPhase::AccumulatingToLowerBound;
    let mut stop = WindowStop::Exhausted;

    for population in populations {
        let next = sum.saturating_add(population);
        if next > bounds.upper {
            stop = WindowStop::UpperBound;
            break;
        }

        sum = next;
        len += 1;
        if sum >= bounds.lower { phase = WindowPhase::ExtendingToUpperBound }
    }

    match phase {
        WindowPhase::ExtendingToUpperBound => WindowSelection { len, population: sum, phase, stop },
        WindowPhase::AccumulatingToLowerBound => WindowSelection { len: 0, population: 0, phase, stop },
    }
}
