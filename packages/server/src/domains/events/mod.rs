pub mod models;

pub use models::event::{Event, Urgency};
