//! Read-side history actions.

use sqlx::PgPool;
use tracing::debug;

use crate::common::{CoreResult, HistoryId, VolunteerId};
use crate::domains::history::actions::seed::seed_for_volunteer;
use crate::domains::history::models::participation::{
    HistoryPatch, HistoryWithEvent, ParticipationRecord,
};

/// One volunteer's history with event context, most recent event first.
///
/// Self-heals by seeding missing pairs first, so a volunteer registered
/// after an event was created still sees a row for it.
pub async fn get_history(volunteer_id: VolunteerId, pool: &PgPool) -> CoreResult<Vec<HistoryWithEvent>> {
    let seeded = seed_for_volunteer(volunteer_id, pool).await?;
    if seeded > 0 {
        debug!(volunteer_id = %volunteer_id, seeded, "Backfilled missing history rows on read");
    }

    HistoryWithEvent::find_for_volunteer(volunteer_id, pool).await
}

/// All history rows with event context (admin reporting).
pub async fn get_all_history(pool: &PgPool) -> CoreResult<Vec<HistoryWithEvent>> {
    HistoryWithEvent::find_all(pool).await
}

/// Admin correction of a single record; `NotFound` when the id is unknown.
pub async fn update_record(
    record_id: HistoryId,
    patch: HistoryPatch,
    pool: &PgPool,
) -> CoreResult<ParticipationRecord> {
    ParticipationRecord::update_record(record_id, &patch, pool).await
}
