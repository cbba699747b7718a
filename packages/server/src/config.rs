use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default skill set offered during volunteer onboarding and event creation.
const DEFAULT_SKILLS: &[&str] = &[
    "Feeding",
    "Cleaning",
    "Grooming",
    "Dog Walking",
    "Transport",
    "Event Setup",
    "Adoption Counseling",
    "Fundraising",
];

/// Default urgency levels for events.
const DEFAULT_URGENCY_LEVELS: &[&str] = &["low", "medium", "high", "critical"];

/// A closed set of allowed values supplied by configuration.
///
/// Skills and urgency levels are deployment configuration, not code
/// constants: swapping the catalog must not touch matching logic.
#[derive(Debug, Clone)]
pub struct Catalog {
    values: Vec<String>,
}

impl Catalog {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Parse a comma-separated env value, falling back to the defaults.
    fn from_env_var(key: &str, defaults: &[&str]) -> Self {
        let values = match env::var(key) {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.iter().map(|s| s.to_string()).collect(),
        };
        Self { values }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Returns the first value not present in the catalog, if any.
    pub fn find_unknown<'a>(&self, values: &'a [String]) -> Option<&'a str> {
        values
            .iter()
            .find(|v| !self.contains(v))
            .map(|v| v.as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub skill_catalog: Catalog,
    pub urgency_catalog: Catalog,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            skill_catalog: Catalog::from_env_var("VOLUNTEER_SKILLS", DEFAULT_SKILLS),
            urgency_catalog: Catalog::from_env_var("EVENT_URGENCY_LEVELS", DEFAULT_URGENCY_LEVELS),
        })
    }
}
