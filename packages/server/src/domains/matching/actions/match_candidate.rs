//! Single-candidate validation for an admin-chosen pairing.

use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;

use crate::common::{CoreResult, EventId, VolunteerId};
use crate::domains::events::models::event::Event;
use crate::domains::matching::utils::eligibility::{
    has_matching_skill, is_available_on, matching_skills, same_city,
};
use crate::domains::volunteers::models::volunteer::Volunteer;

/// Why a specific candidate can or cannot take an event.
///
/// A structured reason rather than a boolean, so callers can tell the
/// admin exactly which check failed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum MatchDecision {
    Eligible { matching_skills: Vec<String> },
    /// The volunteer id does not exist.
    NotFound,
    NotAvailable,
    WrongCity,
    SkillMismatch,
}

/// Run the eligibility checks for one volunteer against one event.
///
/// Checks run in order: availability, city, skills. Called before a
/// pairing is committed, so prior-match exclusion does not apply here.
/// An absent event is an error; an absent volunteer is a decision.
pub async fn match_candidate(
    event_id: EventId,
    volunteer_id: VolunteerId,
    pool: &PgPool,
) -> CoreResult<MatchDecision> {
    let event = Event::find_by_id(event_id, pool).await?;

    let volunteer = match Volunteer::find_optional(volunteer_id, pool).await? {
        Some(v) => v,
        None => return Ok(MatchDecision::NotFound),
    };

    let decision = if !is_available_on(&volunteer, event.event_date) {
        MatchDecision::NotAvailable
    } else if !same_city(&volunteer.city, &event.city) {
        MatchDecision::WrongCity
    } else if !has_matching_skill(&volunteer, &event) {
        MatchDecision::SkillMismatch
    } else {
        MatchDecision::Eligible {
            matching_skills: matching_skills(&volunteer, &event),
        }
    };

    debug!(
        event_id = %event_id,
        volunteer_id = %volunteer_id,
        ?decision,
        "Evaluated candidate"
    );

    Ok(decision)
}
