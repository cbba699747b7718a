//! Server dependencies for domain actions (using traits for testability)
//!
//! Central dependency container handed to every domain action that needs
//! more than the database pool. External services hide behind trait
//! abstractions so tests can inject mocks.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::notify::PgNotificationService;
use crate::kernel::BaseNotificationService;

/// Dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub notifier: Arc<dyn BaseNotificationService>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, notifier: Arc<dyn BaseNotificationService>) -> Self {
        Self { db_pool, notifier }
    }

    /// Production wiring: notifications land in the notifications table.
    pub fn with_pg_notifier(db_pool: PgPool) -> Self {
        let notifier = Arc::new(PgNotificationService::new(db_pool.clone()));
        Self::new(db_pool, notifier)
    }
}
