#![doc = "popstats public API"]
mod config;
mod dataset;
mod io;
mod quiz;
mod report;
mod stats;
mod types;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use dataset::{Dataset, MIN_COUNTIES, MIN_STATES};

#[doc(inline)]
pub use io::{RecordFormat, read_counties, read_states};

#[doc(inline)]
pub use quiz::{
    AreaCount, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, ElectoralWindow, PopulationCount,
    QuizAnswers, QuizOptions, THRESHOLD_RANKS, WindowBounds, WindowPhase, WindowSelection, WindowStop,
    candidates, count_land_area_at_most, count_population_below, electoral_window,
    population_threshold, select_prefix,
};

#[doc(inline)]
pub use report::{NumberFormat, OutputFormat, Report};

#[doc(inline)]
pub use stats::{AreaExtremes, DEFAULT_TOP_COUNTIES, Summary, TopCounties};

#[doc(inline)]
pub use types::{County, DISTRICT_OF_COLUMBIA, RecordKind, State};
