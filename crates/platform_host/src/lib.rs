//! Typed host-domain contracts and shared models used by the desktop runtime, the mobile shell,
//! and the browser adapters.
//!
//! The crate owns the preference storage boundary, the static portfolio catalog browsed by the
//! explorer and the mobile home screen, and small clock helpers. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fs;
pub mod storage;
pub mod time;

pub use fs::catalog::{catalog_entry, list_catalog_folder, CATALOG_ROOT};
pub use fs::path::{normalize_virtual_path, parent_virtual_path};
pub use fs::types::{CatalogEntry, CatalogEntryKind};
pub use storage::prefs::{load_pref_with, save_pref_with, MemoryPrefsStore, PrefsStore};
pub use time::{local_clock_now, ClockReading};
