/// The two kinds of record the tool loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    State,      // State, district or territory
    County,     // California county
}

impl RecordKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            RecordKind::State => "state",
            RecordKind::County => "county",
        }
    }

    /// Column names a tabular source must provide for this kind, in record field order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::State => &[
                "name",
                "area_sq_mi",
                "land_area_sq_mi",
                "water_area_sq_mi",
                "population",
                "n_rep_votes",
                "n_senate_votes",
                "n_ec_votes",
            ],
            RecordKind::County => &["name", "county_seat", "population", "area_sq_mi"],
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
