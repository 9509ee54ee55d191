use serde::{Deserialize, Serialize};

/// Name under which the District of Columbia appears in state records.
pub const DISTRICT_OF_COLUMBIA: &str = "District of Columbia";

/// A US state, district or territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub area_sq_mi: f64,
    pub land_area_sq_mi: f64,
    pub water_area_sq_mi: f64,
    pub population: u64,
    pub n_rep_votes: u32,
    pub n_senate_votes: u32,
    pub n_ec_votes: u32, // 0 for territories
}

impl State {
    /// True if the record casts Electoral College votes.
    #[inline] pub fn is_voting(&self) -> bool { self.n_ec_votes > 0 }

    /// True if the record is a territory (no Electoral College votes).
    #[inline] pub fn is_territory(&self) -> bool { !self.is_voting() }

    #[inline] pub fn is_district_of_columbia(&self) -> bool { self.name == DISTRICT_OF_COLUMBIA }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, n_ec_votes: u32) -> State {
        State {
            name: name.into(),
            area_sq_mi: 0.0,
            land_area_sq_mi: 0.0,
            water_area_sq_mi: 0.0,
            population: 0,
            n_rep_votes: 0,
            n_senate_votes: 0,
            n_ec_votes,
        }
    }

    #[test]
    fn voting_and_territory_are_complementary() {
        let ohio = state("Ohio", 17);
        let guam = state("Guam", 0);
        assert!(ohio.is_voting() && !ohio.is_territory());
        assert!(guam.is_territory() && !guam.is_voting());
    }

    #[test]
    fn district_of_columbia_is_matched_by_name() {
        assert!(state("District of Columbia", 3).is_district_of_columbia());
        assert!(!state("Columbia", 3).is_district_of_columbia());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(state("Maine", 4).to_string(), "Maine");
    }
}
