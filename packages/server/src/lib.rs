// Shelter Hands - volunteer coordination core
//
// Matches volunteers to shelter events (skills, city, date availability)
// and tracks participation history for every volunteer/event pair.
// Transport layers (HTTP, UI) live elsewhere and call into the domain
// actions exposed here.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
