//! Host failure taxonomy.

use thiserror::Error;

/// Failures surfaced by the host collaborator.
///
/// None of these are retried or swallowed: unavailability aborts the
/// current operation, and persistence/template failures propagate to
/// the caller's error surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The host's entry collection cannot be reached.
    #[error("host data source unavailable")]
    Unavailable,

    /// A template resource could not be fetched.
    #[error("template `{name}` could not be fetched: {reason}")]
    Template { name: String, reason: String },

    /// The durable commit failed.
    #[error("persistence failed: {0}")]
    Persist(String),
}
