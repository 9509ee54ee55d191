mod county;
mod record_kind;
mod state;

pub use county::County;
pub use record_kind::RecordKind;
pub use state::{State, DISTRICT_OF_COLUMBIA};
