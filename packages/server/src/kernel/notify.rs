//! Production notification sink backed by the notifications table.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domains::notifications::models::notification::{Notification, NotificationKind};
use crate::kernel::BaseNotificationService;

/// Writes volunteer-facing notifications as rows the UI polls for.
pub struct PgNotificationService {
    pool: PgPool,
}

impl PgNotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseNotificationService for PgNotificationService {
    async fn notify_match(
        &self,
        volunteer_email: &str,
        event_name: &str,
        formatted_date: &str,
    ) -> Result<()> {
        let message = format!(
            "You ({}) have been matched to volunteer at {} on {}. \
             Please check your volunteer history for details.",
            volunteer_email, event_name, formatted_date
        );

        debug!(recipient = %volunteer_email, event = %event_name, "Recording match notification");

        Notification::record(
            NotificationKind::VolunteerMatch,
            &message,
            Some(volunteer_email),
            &self.pool,
        )
        .await?;

        Ok(())
    }
}
