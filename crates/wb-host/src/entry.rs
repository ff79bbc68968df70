//! Entry model and identifier resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A world-info entry owned by the host application.
///
/// The overlay reads the collection by reference and flips `enabled`
/// in place; it never clones, versions, or owns entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable unique id assigned by the host, if it assigned one.
    pub uid: Option<String>,
    /// Display label (the entry's trigger key).
    pub key: String,
    /// Whether the entry participates in prompt building.
    pub enabled: bool,
}

impl Entry {
    pub fn new(uid: Option<&str>, key: &str, enabled: bool) -> Self {
        Self {
            uid: uid.map(str::to_owned),
            key: key.to_owned(),
            enabled,
        }
    }

    /// The identifier this entry resolves to: uid when present, key
    /// otherwise.
    pub fn resolved_id(&self) -> EntryId {
        match &self.uid {
            Some(uid) => EntryId::Uid(uid.clone()),
            None => EntryId::Key(self.key.clone()),
        }
    }
}

/// Resolved entry identifier.
///
/// The key fallback is NOT guaranteed unique — two entries without
/// uids can share a key. Lookups resolve to the first match; see
/// [`find_entry_mut`]. Known limitation of the host contract, kept
/// rather than papered over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryId {
    Uid(String),
    Key(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Uid(uid) => write!(f, "uid:{uid}"),
            EntryId::Key(key) => write!(f, "key:{key}"),
        }
    }
}

/// Find the first entry whose resolved id equals `id`.
pub fn find_entry_mut<'a>(entries: &'a mut [Entry], id: &EntryId) -> Option<&'a mut Entry> {
    entries.iter_mut().find(|e| e.resolved_id() == *id)
}

/// Set `enabled` on every entry matching one of `ids`, counting only
/// entries whose state actually changed.
///
/// Lookup is first-match per id; an id that resolves to an entry
/// already in the target state contributes nothing to the count.
pub fn apply_status(entries: &mut [Entry], ids: &[EntryId], enabled: bool) -> usize {
    let mut changed = 0;
    for id in ids {
        if let Some(entry) = find_entry_mut(entries, id) {
            if entry.enabled != enabled {
                entry.enabled = enabled;
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(Some("a"), "Foo", true),
            Entry::new(Some("b"), "Bar", false),
            Entry::new(None, "Baz", true),
        ]
    }

    #[test]
    fn uid_wins_over_key() {
        let entry = Entry::new(Some("a"), "Foo", true);
        assert_eq!(entry.resolved_id(), EntryId::Uid("a".into()));
    }

    #[test]
    fn key_fallback_without_uid() {
        let entry = Entry::new(None, "Baz", true);
        assert_eq!(entry.resolved_id(), EntryId::Key("Baz".into()));
    }

    #[test]
    fn apply_flips_and_counts() {
        let mut entries = sample();
        let ids = vec![EntryId::Uid("a".into()), EntryId::Key("Baz".into())];

        let changed = apply_status(&mut entries, &ids, false);

        assert_eq!(changed, 2);
        assert!(!entries[0].enabled);
        assert!(!entries[2].enabled);
        // Unselected entry untouched.
        assert!(!entries[1].enabled);
    }

    #[test]
    fn already_in_target_state_is_not_counted() {
        let mut entries = sample();
        let ids = vec![EntryId::Uid("b".into())];

        assert_eq!(apply_status(&mut entries, &ids, false), 0);
        assert!(!entries[1].enabled);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut entries = sample();
        let ids = vec![EntryId::Uid("missing".into())];

        assert_eq!(apply_status(&mut entries, &ids, false), 0);
    }

    #[test]
    fn colliding_keys_resolve_first_match_only() {
        let mut entries = vec![
            Entry::new(None, "Dup", false),
            Entry::new(None, "Dup", true),
        ];
        let ids = vec![EntryId::Key("Dup".into())];

        // First match is already disabled, so nothing changes even
        // though the second "Dup" is enabled.
        assert_eq!(apply_status(&mut entries, &ids, false), 0);
        assert!(entries[1].enabled);
    }
}
