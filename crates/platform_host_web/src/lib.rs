//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The crate wires the preference store to `window.localStorage` and exposes a compile-time
//! host-strategy selector so the runtime never names a concrete backend.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
