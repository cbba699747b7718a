use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CoreError, CoreResult, VolunteerId};

/// Role string for matchable users; admins share the table but are never seeded.
pub const ROLE_VOLUNTEER: &str = "volunteer";

/// Volunteer profile - read model over the directory-owned table
///
/// The matching/history core never mutates these rows; `create` exists for
/// fixtures and demo seeding only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub full_name: String,
    pub email: String,
    pub role: String,

    // Matching inputs
    pub city: String,
    pub skills: Vec<String>,
    pub availability: Vec<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Volunteer {
    /// Find volunteer by ID, failing with `NotFound` if absent.
    pub async fn find_by_id(id: VolunteerId, pool: &PgPool) -> CoreResult<Self> {
        Self::find_optional(id, pool)
            .await?
            .ok_or_else(|| CoreError::not_found("volunteer"))
    }

    pub async fn find_optional(id: VolunteerId, pool: &PgPool) -> CoreResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM volunteers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// The full roster in stable registration order (matcher input).
    ///
    /// No server-side pagination at this layer.
    pub async fn find_all_profiles(pool: &PgPool) -> CoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM volunteers ORDER BY created_at")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a volunteer row (fixtures / demo seeding).
    pub async fn create(
        full_name: &str,
        email: &str,
        role: &str,
        city: &str,
        skills: &[String],
        availability: &[NaiveDate],
        pool: &PgPool,
    ) -> CoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO volunteers (full_name, email, role, city, skills, availability)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(full_name)
        .bind(email)
        .bind(role)
        .bind(city)
        .bind(skills)
        .bind(availability)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
