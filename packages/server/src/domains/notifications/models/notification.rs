use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CoreResult, NotificationId};

/// Notification categories surfaced to volunteers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewEvent,
    Update,
    Reminder,
    VolunteerMatch,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewEvent => write!(f, "new_event"),
            Self::Update => write!(f, "update"),
            Self::Reminder => write!(f, "reminder"),
            Self::VolunteerMatch => write!(f, "volunteer_match"),
        }
    }
}

/// Notification record - a message a volunteer (or everyone) should see
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: String,
    pub message: String,
    /// None means broadcast to all users.
    pub recipient_email: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub async fn record(
        kind: NotificationKind,
        message: &str,
        recipient_email: Option<&str>,
        pool: &PgPool,
    ) -> CoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO notifications (kind, message, recipient_email)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(kind.to_string())
        .bind(message)
        .bind(recipient_email)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Broadcasts plus notifications addressed to this recipient, newest first.
    pub async fn find_for_recipient(email: &str, pool: &PgPool) -> CoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM notifications
             WHERE recipient_email IS NULL OR recipient_email = $1
             ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
