// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use super::{BaseNotificationService, ServerDeps};

// =============================================================================
// Mock Notification Sink
// =============================================================================

/// Arguments captured from a notify_match call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchNotification {
    pub volunteer_email: String,
    pub event_name: String,
    pub formatted_date: String,
}

/// Records every dispatch so tests can assert on fire counts and payloads.
pub struct MockNotificationService {
    calls: Arc<Mutex<Vec<MatchNotification>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockNotificationService {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent dispatch fail (for swallow-on-error tests).
    pub fn fail_dispatch(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<MatchNotification> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of notifications dispatched so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotificationService for MockNotificationService {
    async fn notify_match(
        &self,
        volunteer_email: &str,
        event_name: &str,
        formatted_date: &str,
    ) -> Result<()> {
        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock notification sink is down");
        }

        self.calls.lock().unwrap().push(MatchNotification {
            volunteer_email: volunteer_email.to_string(),
            event_name: event_name.to_string(),
            formatted_date: formatted_date.to_string(),
        });
        Ok(())
    }
}

// =============================================================================
// Test ServerDeps
// =============================================================================

impl ServerDeps {
    /// Deps wired with a mock sink; returns the mock for assertions.
    pub fn for_tests(db_pool: PgPool) -> (Self, Arc<MockNotificationService>) {
        let mock = Arc::new(MockNotificationService::new());
        let deps = Self::new(db_pool, mock.clone());
        (deps, mock)
    }
}
