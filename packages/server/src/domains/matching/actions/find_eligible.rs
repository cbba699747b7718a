//! Roster-wide eligibility matching for an event.

use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::common::{CoreError, CoreResult, EventId, VolunteerId};
use crate::domains::events::models::event::Event;
use crate::domains::history::models::participation::ParticipationRecord;
use crate::domains::matching::utils::eligibility::{is_eligible, matching_skills};
use crate::domains::volunteers::models::volunteer::Volunteer;

/// A volunteer the event can be offered to.
#[derive(Debug, Clone, Serialize)]
pub struct EligibleVolunteer {
    pub volunteer_id: VolunteerId,
    pub full_name: String,
    pub email: String,
    pub city: String,
    /// Intersection of volunteer skills and event required skills (display only).
    pub matching_skills: Vec<String>,
}

/// Compute the eligible, not-yet-matched volunteer set for an event.
///
/// Pure read: no history rows are created here. Results keep the roster's
/// stable registration order; no ranking or tie-breaking is applied.
pub async fn find_eligible_volunteers(
    event_id: EventId,
    pool: &PgPool,
) -> CoreResult<Vec<EligibleVolunteer>> {
    let event = Event::find_by_id(event_id, pool).await?;

    if event.required_skills.is_empty() {
        return Err(CoreError::validation(
            "event has no required skills to match against",
        ));
    }

    // Volunteers this event already claimed are not re-offered.
    let excluded: HashSet<VolunteerId> =
        ParticipationRecord::find_matched_volunteer_ids(event_id, pool)
            .await?
            .into_iter()
            .collect();

    let roster = Volunteer::find_all_profiles(pool).await?;
    debug!(
        event_id = %event_id,
        roster = roster.len(),
        already_matched = excluded.len(),
        "Matching volunteers to event"
    );

    let eligible: Vec<EligibleVolunteer> = roster
        .iter()
        .filter(|v| !excluded.contains(&v.id) && is_eligible(v, &event))
        .map(|v| EligibleVolunteer {
            volunteer_id: v.id,
            full_name: v.full_name.clone(),
            email: v.email.clone(),
            city: v.city.clone(),
            matching_skills: matching_skills(v, &event),
        })
        .collect();

    info!(
        event_id = %event_id,
        eligible = eligible.len(),
        "Matching complete"
    );

    Ok(eligible)
}
