//! History seeding - every volunteer x event pair gets a backing row.
//!
//! Volunteers and events are created independently and in any order, so
//! rows are seeded lazily and idempotently at three trigger points: new
//! event, new volunteer, and on-demand read. Reruns are no-ops on
//! existing pairs.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::{CoreError, CoreResult, EventId, VolunteerId};
use crate::domains::events::models::event::Event;
use crate::domains::volunteers::models::volunteer::{Volunteer, ROLE_VOLUNTEER};

/// Ensure a history row exists for every (volunteer, event) pair.
///
/// Returns the number of rows actually created.
pub async fn seed_all(pool: &PgPool) -> CoreResult<u64> {
    let result = sqlx::query(
        "INSERT INTO volunteer_history (volunteer_id, event_id)
         SELECT v.id, e.id
         FROM volunteers v
         CROSS JOIN events e
         WHERE v.role = $1
         ON CONFLICT (volunteer_id, event_id) DO NOTHING",
    )
    .bind(ROLE_VOLUNTEER)
    .execute(pool)
    .await?;

    let created = result.rows_affected();
    info!(created, "Seeded history for all volunteer/event pairs");
    Ok(created)
}

/// Ensure a row exists for this volunteer against every existing event.
///
/// With no events yet this is a no-op, not an error.
pub async fn seed_for_volunteer(volunteer_id: VolunteerId, pool: &PgPool) -> CoreResult<u64> {
    let volunteer = Volunteer::find_by_id(volunteer_id, pool).await?;
    if volunteer.role != ROLE_VOLUNTEER {
        return Err(CoreError::validation(format!(
            "cannot seed history for role: {}",
            volunteer.role
        )));
    }

    let result = sqlx::query(
        "INSERT INTO volunteer_history (volunteer_id, event_id)
         SELECT $1, e.id FROM events e
         ON CONFLICT (volunteer_id, event_id) DO NOTHING",
    )
    .bind(volunteer_id)
    .execute(pool)
    .await?;

    let created = result.rows_affected();
    debug!(volunteer_id = %volunteer_id, created, "Seeded history for volunteer");
    Ok(created)
}

/// Ensure a row exists for every volunteer against this event.
///
/// With no volunteers yet this is a no-op, not an error.
pub async fn seed_for_event(event_id: EventId, pool: &PgPool) -> CoreResult<u64> {
    Event::find_by_id(event_id, pool).await?;

    let result = sqlx::query(
        "INSERT INTO volunteer_history (volunteer_id, event_id)
         SELECT v.id, $1 FROM volunteers v WHERE v.role = $2
         ON CONFLICT (volunteer_id, event_id) DO NOTHING",
    )
    .bind(event_id)
    .bind(ROLE_VOLUNTEER)
    .execute(pool)
    .await?;

    let created = result.rows_affected();
    debug!(event_id = %event_id, created, "Seeded history for event");
    Ok(created)
}
