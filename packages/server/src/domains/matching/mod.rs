pub mod actions;
pub mod utils;

// Re-export commonly used types
pub use actions::find_eligible::{find_eligible_volunteers, EligibleVolunteer};
pub use actions::future_events::find_future_events;
pub use actions::match_candidate::{match_candidate, MatchDecision};
