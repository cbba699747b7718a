pub mod models;

pub use models::volunteer::Volunteer;
