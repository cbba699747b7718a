use thiserror::Error;

/// Error taxonomy for the matching and history core.
///
/// `NotFound` and `Validation` are local, reported failures that callers
/// surface to the user. `Database` wraps infrastructure failures and is
/// propagated unmodified; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` naming the missing entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Shorthand for a `Validation` failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
