//! Upcoming events for the admin match screen.

use sqlx::PgPool;
use tracing::debug;

use crate::common::CoreResult;
use crate::domains::events::models::event::Event;

/// Events dated today or later, soonest first.
pub async fn find_future_events(pool: &PgPool) -> CoreResult<Vec<Event>> {
    let events = Event::find_future(pool).await?;
    debug!(count = events.len(), "Loaded future events");
    Ok(events)
}
