pub mod models;

pub use models::notification::{Notification, NotificationKind};
