use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CoreError, CoreResult, EventId};
use crate::config::Catalog;

/// Event - read model over the event-catalog-owned table
///
/// Single-day events; `required_skills` is non-empty by constraint.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub event_description: String,

    // Location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    // Matching inputs
    pub required_skills: Vec<String>,
    pub urgency: String, // Maps to Urgency enum
    pub event_date: NaiveDate,

    // Schedule
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Urgency enum for type-safe consumers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
            Urgency::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            "critical" => Ok(Urgency::Critical),
            _ => Err(CoreError::validation(format!("invalid urgency: {}", s))),
        }
    }
}

// =============================================================================
// SQL Queries
// =============================================================================

impl Event {
    /// Find event by ID, failing with `NotFound` if absent.
    pub async fn find_by_id(id: EventId, pool: &PgPool) -> CoreResult<Self> {
        Self::find_optional(id, pool)
            .await?
            .ok_or_else(|| CoreError::not_found("event"))
    }

    pub async fn find_optional(id: EventId, pool: &PgPool) -> CoreResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Events on or after today (admin match-screen source list).
    pub async fn find_future(pool: &PgPool) -> CoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE event_date >= $1 ORDER BY event_date",
        )
        .bind(Utc::now().date_naive())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert an event row (fixtures / demo seeding).
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        event_name: &str,
        event_description: &str,
        address: &str,
        city: &str,
        state: &str,
        zip_code: &str,
        required_skills: &[String],
        urgency: Urgency,
        event_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        pool: &PgPool,
    ) -> CoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO events (
                event_name, event_description, address, city, state, zip_code,
                required_skills, urgency, event_date, start_time, end_time
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(event_name)
        .bind(event_description)
        .bind(address)
        .bind(city)
        .bind(state)
        .bind(zip_code)
        .bind(required_skills)
        .bind(urgency.to_string())
        .bind(event_date)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Reject skills outside the configured catalog before any store access.
    pub fn validate_required_skills(skills: &[String], catalog: &Catalog) -> CoreResult<()> {
        if skills.is_empty() {
            return Err(CoreError::validation("required skills must not be empty"));
        }
        if let Some(unknown) = catalog.find_unknown(skills) {
            return Err(CoreError::validation(format!("unknown skill: {}", unknown)));
        }
        Ok(())
    }
}
