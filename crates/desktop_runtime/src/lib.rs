//! Desktop runtime: window registry, preference store, window chrome and the Leptos desktop shell.
//!
//! Pure state lives in [`model`], [`window_manager`] and [`preferences`]; [`reducer`] is the
//! single transition function and [`components`] renders the shell around
//! [`DesktopRuntimeContext`].

pub mod apps;
pub mod chrome;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod preferences;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use chrome::WorkArea;
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use preferences::{PreferenceError, PreferenceStore, PREFERENCES_KEY, TOUR_SEEN_KEY};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::WindowRegistry;
