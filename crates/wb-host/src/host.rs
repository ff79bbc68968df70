//! The host collaborator trait.

use crate::{Entry, HostError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::MutexGuard;

/// Severity of a host toast. Closed set — the contract accepts exactly
/// these three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Success,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Warning => "warning",
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
        }
    }
}

/// Services the surrounding chat application provides to the overlay.
///
/// The entry collection is handed out as a live guarded reference:
/// flips of `enabled` are visible to the host the moment the guard
/// drops. The overlay performs no retries on any of these calls.
#[async_trait]
pub trait WorldHost: Send + Sync {
    /// Whether the host has finished its own startup. The overlay
    /// mounts nothing until this reports true.
    fn is_ready(&self) -> bool;

    /// Live view of the entry collection, in host order.
    ///
    /// Fails with [`HostError::Unavailable`] when the data source
    /// cannot be reached; callers abort rather than render an empty
    /// list.
    fn entries(&self) -> Result<MutexGuard<'_, Vec<Entry>>, HostError>;

    /// Commit the in-memory entry state to durable storage.
    async fn persist_entries(&self) -> Result<(), HostError>;

    /// Fire-and-forget user-visible toast.
    fn notify(&self, level: NoticeLevel, message: &str);

    /// Fetch a static template resource by name. Called once, lazily,
    /// when the panel first opens.
    async fn fetch_template(&self, name: &str) -> Result<String, HostError>;
}
