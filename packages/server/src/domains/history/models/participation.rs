use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CoreError, CoreResult, EventId, HistoryId, VolunteerId};

/// Participation lifecycle states.
///
/// The set is closed but the transition graph is not: any state may
/// overwrite any other (administrative correction is allowed on purpose).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationStatus {
    NotAttended,
    MatchedPendingAttendance,
    Attended,
    Cancelled,
}

impl ParticipationStatus {
    /// Default status for freshly seeded rows.
    pub const DEFAULT: Self = Self::NotAttended;
}

impl std::fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAttended => write!(f, "not_attended"),
            Self::MatchedPendingAttendance => write!(f, "matched_pending_attendance"),
            Self::Attended => write!(f, "attended"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ParticipationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "not_attended" => Ok(Self::NotAttended),
            "matched_pending_attendance" => Ok(Self::MatchedPendingAttendance),
            "attended" => Ok(Self::Attended),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(CoreError::validation(format!(
                "invalid participation status: {}",
                s
            ))),
        }
    }
}

/// One volunteer's relationship to one event.
///
/// `(volunteer_id, event_id)` is unique; the database constraint, not
/// application locking, is what makes concurrent get-or-create collapse to
/// a single row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ParticipationRecord {
    pub id: HistoryId,
    pub volunteer_id: VolunteerId,
    pub event_id: EventId,
    pub participation_status: String, // Maps to ParticipationStatus
    pub matched_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParticipationRecord {
    /// Parse the stored status into the closed enum.
    pub fn status(&self) -> CoreResult<ParticipationStatus> {
        self.participation_status.parse()
    }
}

/// Partial update for admin corrections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPatch {
    pub participation_status: Option<ParticipationStatus>,
    pub matched_at: Option<DateTime<Utc>>,
}

// =============================================================================
// SQL Queries
// =============================================================================

impl ParticipationRecord {
    /// Atomic get-or-create on the composite key.
    ///
    /// Single conflict-tolerant insert, not a read-then-write pair: the
    /// loser of a concurrent race receives the winner's row, never an
    /// error and never a duplicate. Returns `(record, was_created)`.
    pub async fn get_or_create(
        volunteer_id: VolunteerId,
        event_id: EventId,
        default_status: ParticipationStatus,
        pool: &PgPool,
    ) -> CoreResult<(Self, bool)> {
        let inserted = sqlx::query_as::<_, Self>(
            "INSERT INTO volunteer_history (volunteer_id, event_id, participation_status)
             VALUES ($1, $2, $3)
             ON CONFLICT (volunteer_id, event_id) DO NOTHING
             RETURNING *",
        )
        .bind(volunteer_id)
        .bind(event_id)
        .bind(default_status.to_string())
        .fetch_optional(pool)
        .await?;

        if let Some(record) = inserted {
            return Ok((record, true));
        }

        let existing = sqlx::query_as::<_, Self>(
            "SELECT * FROM volunteer_history WHERE volunteer_id = $1 AND event_id = $2",
        )
        .bind(volunteer_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;

        Ok((existing, false))
    }

    /// Overwrite the status for a pair, creating the row if absent.
    ///
    /// `matched_at` is refreshed only when the written status is
    /// `matched_pending_attendance`; otherwise the stored value survives.
    pub async fn update_status(
        volunteer_id: VolunteerId,
        event_id: EventId,
        status: ParticipationStatus,
        pool: &PgPool,
    ) -> CoreResult<Self> {
        let is_match = status == ParticipationStatus::MatchedPendingAttendance;

        sqlx::query_as::<_, Self>(
            "INSERT INTO volunteer_history (volunteer_id, event_id, participation_status, matched_at)
             VALUES ($1, $2, $3, CASE WHEN $4 THEN now() END)
             ON CONFLICT (volunteer_id, event_id) DO UPDATE SET
                 participation_status = EXCLUDED.participation_status,
                 matched_at = CASE WHEN $4 THEN now() ELSE volunteer_history.matched_at END,
                 updated_at = now()
             RETURNING *",
        )
        .bind(volunteer_id)
        .bind(event_id)
        .bind(status.to_string())
        .bind(is_match)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: HistoryId, pool: &PgPool) -> CoreResult<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM volunteer_history WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("history record"))
    }

    /// Generic field patch for admin corrections.
    pub async fn update_record(
        id: HistoryId,
        patch: &HistoryPatch,
        pool: &PgPool,
    ) -> CoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE volunteer_history SET
                 participation_status = COALESCE($2, participation_status),
                 matched_at = COALESCE($3, matched_at),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(patch.participation_status.map(|s| s.to_string()))
        .bind(patch.matched_at)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CoreError::not_found("history record"))
    }

    /// Volunteer ids an event has already claimed (exclusion set for the matcher).
    pub async fn find_matched_volunteer_ids(
        event_id: EventId,
        pool: &PgPool,
    ) -> CoreResult<Vec<VolunteerId>> {
        sqlx::query_scalar::<_, VolunteerId>(
            "SELECT volunteer_id FROM volunteer_history
             WHERE event_id = $1 AND participation_status = $2",
        )
        .bind(event_id)
        .bind(ParticipationStatus::MatchedPendingAttendance.to_string())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

// =============================================================================
// Read-side projections
// =============================================================================

/// History row enriched with the event's display fields.
///
/// The enrichment is a join at read time; nothing here is stored
/// denormalized on the history row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HistoryWithEvent {
    pub id: HistoryId,
    pub volunteer_id: VolunteerId,
    pub event_id: EventId,
    pub participation_status: String,
    pub matched_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,

    // Event display fields
    pub event_name: String,
    pub event_description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub required_skills: Vec<String>,
    pub urgency: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl HistoryWithEvent {
    const COLUMNS: &'static str = "h.id, h.volunteer_id, h.event_id, h.participation_status,
         h.matched_at, h.created_at,
         e.event_name, e.event_description, e.address, e.city, e.state, e.zip_code,
         e.required_skills, e.urgency, e.event_date, e.start_time, e.end_time";

    /// One volunteer's history, most recent event first.
    pub async fn find_for_volunteer(
        volunteer_id: VolunteerId,
        pool: &PgPool,
    ) -> CoreResult<Vec<Self>> {
        let sql = format!(
            "SELECT {} FROM volunteer_history h
             JOIN events e ON e.id = h.event_id
             WHERE h.volunteer_id = $1
             ORDER BY e.event_date DESC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(volunteer_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Every history row with event context (admin reporting).
    pub async fn find_all(pool: &PgPool) -> CoreResult<Vec<Self>> {
        let sql = format!(
            "SELECT {} FROM volunteer_history h
             JOIN events e ON e.id = h.event_id
             ORDER BY e.event_date DESC, h.created_at",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Self>(&sql)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}

/// History row enriched with the volunteer's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HistoryWithVolunteer {
    pub id: HistoryId,
    pub volunteer_id: VolunteerId,
    pub event_id: EventId,
    pub participation_status: String,
    pub matched_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,

    // Volunteer display fields
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub skills: Vec<String>,
}

impl HistoryWithVolunteer {
    /// One event's roster of history rows.
    pub async fn find_for_event(event_id: EventId, pool: &PgPool) -> CoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT h.id, h.volunteer_id, h.event_id, h.participation_status,
                    h.matched_at, h.created_at,
                    v.full_name, v.email, v.city, v.skills
             FROM volunteer_history h
             JOIN volunteers v ON v.id = h.volunteer_id
             WHERE h.event_id = $1
             ORDER BY v.created_at",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_roundtrip() {
        for status in [
            ParticipationStatus::NotAttended,
            ParticipationStatus::MatchedPendingAttendance,
            ParticipationStatus::Attended,
            ParticipationStatus::Cancelled,
        ] {
            assert_eq!(
                ParticipationStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = ParticipationStatus::from_str("no_show").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn default_status_is_not_attended() {
        assert_eq!(
            ParticipationStatus::DEFAULT,
            ParticipationStatus::NotAttended
        );
    }
}
