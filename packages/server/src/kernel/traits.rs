// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "set participation status") lives in domain
// actions that use these traits.
//
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Notification Sink Trait (Infrastructure)
// =============================================================================

/// Delivery boundary for volunteer-facing notifications.
///
/// The core treats dispatch as fire-and-forget: a match confirmation must
/// never be blocked by a downstream delivery problem, so callers log and
/// swallow errors from this trait.
#[async_trait]
pub trait BaseNotificationService: Send + Sync {
    /// Notify a volunteer that they were matched to an event.
    ///
    /// `formatted_date` is already human-readable (e.g. "Saturday, June 1, 2024").
    async fn notify_match(
        &self,
        volunteer_email: &str,
        event_name: &str,
        formatted_date: &str,
    ) -> Result<()>;
}
