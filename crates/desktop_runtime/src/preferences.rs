//! Durable desktop preferences: wallpaper, taskbar look, icon layout and shutdown state.
//!
//! The whole [`PreferenceState`] is written as one JSON document after every mutation. A missing
//! or unreadable document boots the desktop with defaults.

use std::rc::Rc;

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use thiserror::Error;

use crate::model::{DesktopIconRecord, Position, PreferenceState};

/// Storage key for the preference document.
pub const PREFERENCES_KEY: &str = "aero-desktop.preferences";
/// Storage key for the first-visit tour flag.
pub const TOUR_SEEN_KEY: &str = "aero-desktop.tour-seen";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("preference encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loads and saves [`PreferenceState`] through an injected [`PrefsStore`] backend.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Rc<dyn PrefsStore>,
}

impl PreferenceStore {
    pub fn new(backend: Rc<dyn PrefsStore>) -> Self {
        Self { backend }
    }

    /// Reads the stored document, falling back to defaults when it is absent or malformed.
    pub fn load(&self) -> PreferenceState {
        let raw = match self.backend.load_pref(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return PreferenceState::default(),
            Err(err) => {
                logging::warn!("preference load failed: {err}");
                return PreferenceState::default();
            }
        };
        parse_preferences(&raw).unwrap_or_else(|err| {
            logging::warn!("stored preferences ignored: {err}");
            PreferenceState::default()
        })
    }

    pub fn save(&self, state: &PreferenceState) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(state)?;
        self.backend
            .save_pref(PREFERENCES_KEY, &raw)
            .map_err(PreferenceError::Storage)
    }

    pub fn load_tour_seen(&self) -> bool {
        match load_pref_with::<_, bool>(self.backend.as_ref(), TOUR_SEEN_KEY) {
            Ok(seen) => seen.unwrap_or(false),
            Err(err) => {
                logging::warn!("tour flag load failed: {err}");
                false
            }
        }
    }

    pub fn save_tour_seen(&self) -> Result<(), PreferenceError> {
        save_pref_with(self.backend.as_ref(), TOUR_SEEN_KEY, &true).map_err(PreferenceError::Storage)
    }
}

fn parse_preferences(raw: &str) -> Result<PreferenceState, serde_json::Error> {
    let mut state: PreferenceState = serde_json::from_str(raw)?;
    state.taskbar_transparency = state.taskbar_transparency.min(100);
    Ok(state)
}

impl PreferenceState {
    pub fn set_wallpaper(&mut self, wallpaper: impl Into<String>) {
        self.wallpaper = wallpaper.into();
    }

    /// Stores the taskbar transparency, clamped to 0-100.
    pub fn set_taskbar_transparency(&mut self, percent: u8) {
        self.taskbar_transparency = percent.min(100);
    }

    pub fn set_aero_effects(&mut self, enabled: bool) {
        self.aero_effects_enabled = enabled;
    }

    /// Moves one desktop icon. Returns `false` when no icon has `icon_id`.
    pub fn update_icon_position(&mut self, icon_id: &str, position: Position) -> bool {
        let Some(icon) = self.desktop_icons.iter_mut().find(|icon| icon.id == icon_id) else {
            return false;
        };
        icon.position = position;
        true
    }

    pub fn icon(&self, icon_id: &str) -> Option<&DesktopIconRecord> {
        self.desktop_icons.iter().find(|icon| icon.id == icon_id)
    }

    pub fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    pub fn restart(&mut self) {
        self.is_shutdown = false;
    }

    /// Taskbar background alpha derived from the transparency percentage.
    pub fn taskbar_alpha(&self) -> f32 {
        f32::from(100 - self.taskbar_transparency.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, DEFAULT_WALLPAPER};

    fn store() -> (PreferenceStore, MemoryPrefsStore) {
        let memory = MemoryPrefsStore::default();
        (PreferenceStore::new(Rc::new(memory.clone())), memory)
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let (prefs, _) = store();
        let state = prefs.load();

        assert_eq!(state, PreferenceState::default());
        assert_eq!(state.wallpaper, DEFAULT_WALLPAPER);
        assert_eq!(state.taskbar_transparency, 85);
        assert!(state.aero_effects_enabled);
        assert!(!state.is_shutdown);
        assert!(!state.desktop_icons.is_empty());
    }

    #[test]
    fn malformed_document_loads_defaults() {
        let (prefs, memory) = store();
        memory.seed(PREFERENCES_KEY, "{not json");
        assert_eq!(prefs.load(), PreferenceState::default());
    }

    #[test]
    fn unknown_component_in_icons_loads_defaults() {
        let (prefs, memory) = store();
        memory.seed(
            PREFERENCES_KEY,
            r#"{"desktopIcons":[{"id":"x","title":"X","icon":"","component":"doom","position":{"x":0,"y":0}}]}"#,
        );
        assert_eq!(prefs.load(), PreferenceState::default());
    }

    #[test]
    fn partial_document_fills_missing_fields_from_defaults() {
        let (prefs, memory) = store();
        memory.seed(PREFERENCES_KEY, r##"{"wallpaper":"#000","taskbarTransparency":240}"##);
        let state = prefs.load();

        assert_eq!(state.wallpaper, "#000");
        assert_eq!(state.taskbar_transparency, 100);
        assert!(state.aero_effects_enabled);
        assert_eq!(state.desktop_icons, PreferenceState::default().desktop_icons);
    }

    #[test]
    fn saved_wallpaper_survives_a_reload() {
        let (prefs, memory) = store();
        let mut state = prefs.load();
        state.set_wallpaper("url('/wallpapers/nature.jpg')");
        prefs.save(&state).expect("save");

        let reloaded = PreferenceStore::new(Rc::new(memory)).load();
        assert_eq!(reloaded.wallpaper, "url('/wallpapers/nature.jpg')");
        assert_eq!(reloaded, state);
    }

    #[test]
    fn saved_document_uses_camel_case_keys() {
        let (prefs, memory) = store();
        prefs.save(&PreferenceState::default()).expect("save");
        let raw: serde_json::Value =
            serde_json::from_str(&memory.raw(PREFERENCES_KEY).expect("raw")).expect("json");

        for key in [
            "desktopIcons",
            "isShutdown",
            "wallpaper",
            "taskbarTransparency",
            "aeroEffectsEnabled",
        ] {
            assert!(raw.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn transparency_is_clamped() {
        let mut state = PreferenceState::default();
        state.set_taskbar_transparency(150);
        assert_eq!(state.taskbar_transparency, 100);
        state.set_taskbar_transparency(0);
        assert_eq!(state.taskbar_transparency, 0);
    }

    #[test]
    fn taskbar_alpha_is_inverse_of_transparency() {
        let mut state = PreferenceState::default();
        state.set_taskbar_transparency(100);
        assert_eq!(state.taskbar_alpha(), 0.0);
        state.set_taskbar_transparency(0);
        assert_eq!(state.taskbar_alpha(), 1.0);
    }

    #[test]
    fn icon_positions_update_by_id_only() {
        let mut state = PreferenceState::default();
        let first = state.desktop_icons[0].id.clone();

        assert!(state.update_icon_position(&first, Position::new(300, 200)));
        assert_eq!(
            state.icon(&first).map(|icon| icon.position),
            Some(Position::new(300, 200))
        );

        let before = state.clone();
        assert!(!state.update_icon_position("missing", Position::new(1, 1)));
        assert_eq!(state, before);
    }

    #[test]
    fn shutdown_and_restart_flip_the_flag() {
        let mut state = PreferenceState::default();
        state.shutdown();
        assert!(state.is_shutdown);
        state.restart();
        assert!(!state.is_shutdown);
    }

    #[test]
    fn tour_flag_defaults_false_and_persists() {
        let (prefs, _) = store();
        assert!(!prefs.load_tour_seen());
        prefs.save_tour_seen().expect("save");
        assert!(prefs.load_tour_seen());
    }

    #[test]
    fn default_icons_reference_known_apps() {
        let state = PreferenceState::default();
        assert!(state
            .desktop_icons
            .iter()
            .any(|icon| icon.component == AppId::Explorer));
    }
}
