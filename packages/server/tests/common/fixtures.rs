//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use server_core::common::{EventId, VolunteerId};
use server_core::domains::events::models::event::{Event, Urgency};
use server_core::domains::volunteers::models::volunteer::Volunteer;
use sqlx::PgPool;
use uuid::Uuid;

/// Wipe all tables so each test starts from a known-empty state.
pub async fn clean_all(pool: &PgPool) -> Result<()> {
    sqlx::query("TRUNCATE volunteer_history, notifications, events, volunteers CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Create a volunteer with the given matching attributes.
///
/// Emails are uniqued per call to satisfy the directory's constraint.
pub async fn create_test_volunteer(
    pool: &PgPool,
    full_name: &str,
    city: &str,
    skills: &[&str],
    availability: &[&str],
) -> Result<VolunteerId> {
    create_test_user(pool, full_name, "volunteer", city, skills, availability).await
}

/// Create an admin user (shares the table, never seeded or matched).
pub async fn create_test_admin(pool: &PgPool, full_name: &str) -> Result<VolunteerId> {
    create_test_user(pool, full_name, "admin", "Austin", &[], &[]).await
}

async fn create_test_user(
    pool: &PgPool,
    full_name: &str,
    role: &str,
    city: &str,
    skills: &[&str],
    availability: &[&str],
) -> Result<VolunteerId> {
    let email = format!(
        "{}-{}@example.org",
        full_name.to_lowercase().replace(' ', "."),
        Uuid::new_v4()
    );
    let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
    let availability: Vec<NaiveDate> = availability
        .iter()
        .map(|d| d.parse())
        .collect::<Result<_, _>>()?;

    let volunteer = Volunteer::create(
        full_name,
        &email,
        role,
        city,
        &skills,
        &availability,
        pool,
    )
    .await?;

    Ok(volunteer.id)
}

/// Create an event on the given date requiring the given skills.
pub async fn create_test_event(
    pool: &PgPool,
    event_name: &str,
    city: &str,
    required_skills: &[&str],
    event_date: &str,
) -> Result<EventId> {
    let required_skills: Vec<String> = required_skills.iter().map(|s| s.to_string()).collect();

    let event = Event::create(
        event_name,
        "Help out at the shelter",
        "500 Shelter Ln",
        city,
        "TX",
        "78701",
        &required_skills,
        Urgency::Medium,
        event_date.parse()?,
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        pool,
    )
    .await?;

    Ok(event.id)
}

/// Look up a volunteer's email (for notification assertions).
pub async fn volunteer_email(pool: &PgPool, id: VolunteerId) -> Result<String> {
    let volunteer = Volunteer::find_by_id(id, pool).await?;
    Ok(volunteer.email)
}
