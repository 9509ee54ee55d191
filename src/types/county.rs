use serde::{Deserialize, Serialize};

/// A California county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    pub name: String,
    pub county_seat: String,
    pub population: u64,
    pub area_sq_mi: f64,
}

impl std::fmt::Display for County {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
