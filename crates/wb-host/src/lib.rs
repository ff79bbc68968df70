//! Host collaborator contract for the worldbook overlay.
//!
//! The overlay owns no storage: the surrounding chat application holds
//! the entry collection, commits it to durable storage, and renders
//! toasts. Everything it provides is reachable through one trait:
//!
//! ```text
//! Launcher ──► EntryPanel ──► WorldHost
//!                               ├── entries()          live collection
//!                               ├── persist_entries()  durable commit
//!                               ├── notify()           toast
//!                               ├── fetch_template()   panel chrome
//!                               └── is_ready()         startup gate
//! ```
//!
//! [`MemoryHost`] is an in-process reference implementation used by the
//! demo binaries and as the test double across the workspace.

mod entry;
mod error;
mod host;
mod memory;

pub use entry::{apply_status, find_entry_mut, Entry, EntryId};
pub use error::HostError;
pub use host::{NoticeLevel, WorldHost};
pub use memory::MemoryHost;
