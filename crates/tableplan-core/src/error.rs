//! Error handling for Tableplan.
//!
//! Geometry problems are never errors: create/update clamps to valid minimums
//! and the session continues. The only fallible surface is persistence, which
//! is recoverable - a failed save leaves the in-memory plan untouched.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Persistence error type
///
/// Returned by the persistence gateway when a plan document cannot be saved.
/// The table collection is never rolled back on failure; the caller surfaces
/// the condition and may retry.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Underlying storage I/O failed
    #[error("plan storage I/O failed")]
    Io(#[from] std::io::Error),

    /// The plan document could not be serialized
    #[error("plan document serialization failed")]
    Serialize(#[from] serde_json::Error),

    /// The gateway rejected or failed the save for its own reasons
    #[error("persistence gateway failure: {0}")]
    Gateway(#[source] anyhow::Error),
}

impl PersistenceError {
    /// Wraps an arbitrary gateway-side cause.
    pub fn gateway(err: impl Into<anyhow::Error>) -> Self {
        Self::Gateway(err.into())
    }
}
