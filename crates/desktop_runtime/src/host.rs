//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use platform_host::PrefsStore;
use platform_host_web::{host_strategy_name, prefs_store};

use crate::{
    chrome::WorkArea,
    model::DesktopState,
    preferences::PreferenceStore,
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(crate) use host_ui::viewport_size;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    preferences: PreferenceStore,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()))
    }
}

impl DesktopHostContext {
    /// Builds a host context around an injected preference backend.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            preferences: PreferenceStore::new(prefs),
            host_strategy_name: host_strategy_name(),
        }
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Initial desktop state: stored preferences and the tour flag, no open windows.
    pub fn boot_state(&self) -> DesktopState {
        DesktopState::booted(self.preferences.load(), self.preferences.load_tour_seen())
    }

    /// Current window work area (viewport minus taskbar).
    pub fn work_area(&self) -> WorkArea {
        let (width, height) = viewport_size();
        WorkArea::from_viewport(width, height)
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistPreferences => {
                persistence_effects::persist_preferences(self, runtime)
            }
            RuntimeEffect::PersistTourSeen => persistence_effects::persist_tour_seen(self),
        }
    }
}
