//! In-process reference host.
//!
//! Backs the demo binaries and serves as the test double everywhere in
//! the workspace: it records notices and persist calls, and exposes
//! switches to simulate an unreachable data source or a failing
//! commit.

use crate::{Entry, HostError, NoticeLevel, WorldHost};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct MemoryHost {
    entries: Mutex<Vec<Entry>>,
    templates: Mutex<HashMap<String, String>>,
    notices: Mutex<Vec<(NoticeLevel, String)>>,
    ready: AtomicBool,
    unavailable: AtomicBool,
    fail_persist: AtomicBool,
    persist_calls: AtomicUsize,
}

impl MemoryHost {
    pub fn new() -> Self {
        let host = Self::default();
        host.ready.store(true, Ordering::SeqCst);
        host
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let host = Self::new();
        *host.entries.lock().expect("fresh mutex") = entries;
        host
    }

    /// A host pre-loaded with a handful of entries, for the demo
    /// binaries.
    pub fn demo() -> Self {
        Self::with_entries(vec![
            Entry::new(Some("wi-1"), "Kingdom of Veld", true),
            Entry::new(Some("wi-2"), "The Sunken Archive", true),
            Entry::new(Some("wi-3"), "Moth Queen", false),
            Entry::new(None, "Old Road", true),
        ])
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Simulate the data source dropping out.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make the next persist calls fail.
    pub fn set_fail_persist(&self, fail: bool) {
        self.fail_persist.store(fail, Ordering::SeqCst);
    }

    pub fn insert_template(&self, name: &str, content: &str) {
        self.templates
            .lock()
            .expect("template mutex")
            .insert(name.to_owned(), content.to_owned());
    }

    /// Number of completed persist calls.
    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }

    /// Toasts issued so far, in order.
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().expect("notice mutex").clone()
    }
}

#[async_trait]
impl WorldHost for MemoryHost {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn entries(&self) -> Result<MutexGuard<'_, Vec<Entry>>, HostError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HostError::Unavailable);
        }
        self.entries.lock().map_err(|_| HostError::Unavailable)
    }

    async fn persist_entries(&self) -> Result<(), HostError> {
        if self.fail_persist.load(Ordering::SeqCst) {
            return Err(HostError::Persist("commit rejected".into()));
        }
        self.persist_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        tracing::info!(level = level.as_str(), "{message}");
        self.notices
            .lock()
            .expect("notice mutex")
            .push((level, message.to_owned()));
    }

    async fn fetch_template(&self, name: &str) -> Result<String, HostError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HostError::Template {
                name: name.to_owned(),
                reason: "host unavailable".into(),
            });
        }
        let templates = self.templates.lock().expect("template mutex");
        // An empty JSON object deserializes into all-default chrome.
        Ok(templates.get(name).cloned().unwrap_or_else(|| "{}".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_blocks_entries() {
        let host = MemoryHost::demo();
        host.set_unavailable(true);
        assert_eq!(host.entries().err(), Some(HostError::Unavailable));
    }

    #[tokio::test]
    async fn persist_counts_and_fails_on_demand() {
        let host = MemoryHost::new();
        host.persist_entries().await.unwrap();
        assert_eq!(host.persist_calls(), 1);

        host.set_fail_persist(true);
        assert!(host.persist_entries().await.is_err());
        assert_eq!(host.persist_calls(), 1);
    }

    #[test]
    fn notices_are_recorded_in_order() {
        let host = MemoryHost::new();
        host.notify(NoticeLevel::Warning, "first");
        host.notify(NoticeLevel::Info, "second");

        let notices = host.notices();
        assert_eq!(notices[0], (NoticeLevel::Warning, "first".into()));
        assert_eq!(notices[1], (NoticeLevel::Info, "second".into()));
    }

    #[tokio::test]
    async fn missing_template_yields_empty_object() {
        let host = MemoryHost::new();
        assert_eq!(host.fetch_template("panel").await.unwrap(), "{}");

        host.insert_template("panel", "{\"title\":\"T\"}");
        assert_eq!(
            host.fetch_template("panel").await.unwrap(),
            "{\"title\":\"T\"}"
        );
    }
}
