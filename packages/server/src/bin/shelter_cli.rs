//! Operational CLI for deployments and local development.
//!
//! Runs migrations and history seeding; outputs JSON for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use server_core::common::{EventId, VolunteerId};
use server_core::config::Config;
use server_core::domains::history::actions::{seed_all, seed_for_event, seed_for_volunteer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "shelter_cli")]
#[command(about = "Shelter Hands operational CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pending database migrations
    Migrate,

    /// Seed history rows for every volunteer/event pair
    SeedAll,

    /// Seed history rows for one volunteer against all events
    SeedVolunteer { volunteer_id: String },

    /// Seed history rows for all volunteers against one event
    SeedEvent { event_id: String },
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<u64>,
}

impl Response {
    fn ok(message: impl Into<String>, created: Option<u64>) -> Self {
        Self {
            success: true,
            message: message.into(),
            created,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let response = run(cli.command, &pool).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

async fn run(command: Commands, pool: &PgPool) -> Result<Response> {
    match command {
        Commands::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;
            Ok(Response::ok("migrations complete", None))
        }
        Commands::SeedAll => {
            let created = seed_all(pool).await?;
            Ok(Response::ok("seeded all pairs", Some(created)))
        }
        Commands::SeedVolunteer { volunteer_id } => {
            let id: VolunteerId = volunteer_id.parse().context("Invalid volunteer id")?;
            let created = seed_for_volunteer(id, pool).await?;
            Ok(Response::ok("seeded volunteer", Some(created)))
        }
        Commands::SeedEvent { event_id } => {
            let id: EventId = event_id.parse().context("Invalid event id")?;
            let created = seed_for_event(id, pool).await?;
            Ok(Response::ok("seeded event", Some(created)))
        }
    }
}
