//! Status transition action with its match-notification side effect.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::common::{CoreError, CoreResult, EventId, VolunteerId};
use crate::domains::events::models::event::Event;
use crate::domains::history::models::participation::{ParticipationRecord, ParticipationStatus};
use crate::domains::volunteers::models::volunteer::Volunteer;
use crate::kernel::ServerDeps;

/// Caller-facing outcome of a status transition.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateOutcome {
    pub success: bool,
    pub message: String,
    pub record: ParticipationRecord,
}

/// Set the participation status for one volunteer/event pairing.
///
/// The row is created if absent (upsert semantics). Entering
/// `MatchedPendingAttendance` notifies the volunteer on EVERY write of
/// that status, including idempotent re-writes - callers wanting
/// fire-on-change must diff the prior status themselves. Authorization is
/// the caller's responsibility; this action does not re-check roles.
pub async fn set_participation(
    volunteer_id: VolunteerId,
    event_id: EventId,
    status: ParticipationStatus,
    deps: &ServerDeps,
) -> CoreResult<StatusUpdateOutcome> {
    let volunteer = Volunteer::find_optional(volunteer_id, &deps.db_pool).await?;
    let event = Event::find_optional(event_id, &deps.db_pool).await?;

    let (volunteer, event) = match (volunteer, event) {
        (Some(v), Some(e)) => (v, e),
        _ => return Err(CoreError::not_found("volunteer or event")),
    };

    info!(
        volunteer_id = %volunteer_id,
        event_id = %event_id,
        status = %status,
        "Updating participation status"
    );

    let record =
        ParticipationRecord::update_status(volunteer_id, event_id, status, &deps.db_pool).await?;

    if status == ParticipationStatus::MatchedPendingAttendance {
        notify_match(&volunteer, &event, deps).await;
    }

    Ok(StatusUpdateOutcome {
        success: true,
        message: "volunteer status updated".to_string(),
        record,
    })
}

/// Dispatch the match notification, swallowing sink failures.
///
/// Match confirmation must never be blocked by a delivery problem.
async fn notify_match(volunteer: &Volunteer, event: &Event, deps: &ServerDeps) {
    let formatted_date = format_event_date(event.event_date);

    if let Err(e) = deps
        .notifier
        .notify_match(&volunteer.email, &event.event_name, &formatted_date)
        .await
    {
        warn!(
            volunteer_id = %volunteer.id,
            event_id = %event.id,
            error = %e,
            "Failed to dispatch match notification"
        );
    }
}

/// Human-readable long date, e.g. "Saturday, June 1, 2024".
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
