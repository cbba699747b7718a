pub mod actions;
pub mod models;

// Re-export commonly used types
pub use models::participation::{
    HistoryPatch, HistoryWithEvent, HistoryWithVolunteer, ParticipationRecord,
    ParticipationStatus,
};
