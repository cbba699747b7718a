pub mod queries;
pub mod seed;
pub mod set_participation;

pub use queries::{get_all_history, get_history, update_record};
pub use seed::{seed_all, seed_for_event, seed_for_volunteer};
pub use set_participation::{set_participation, StatusUpdateOutcome};
