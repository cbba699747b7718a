pub mod find_eligible;
pub mod future_events;
pub mod match_candidate;
