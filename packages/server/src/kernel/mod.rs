// Kernel - infrastructure boundary of the application
//
// Trait definitions for external collaborators, the dependency container,
// and production/mock implementations.

pub mod deps;
pub mod notify;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use notify::PgNotificationService;
pub use test_dependencies::{MatchNotification, MockNotificationService};
pub use traits::BaseNotificationService;
