//! Shared contract types between the desktop window manager runtime and the applications it
//! mounts inside window chrome.
//!
//! Applications never touch the window registry or the preference store directly. They receive an
//! [`AppMountContext`] carrying their window id, the opaque `metadata` supplied at open time, and
//! an [`AppServices`] bundle whose methods emit [`AppCommand`] values back to the runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGet, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window, as seen by applications.
pub type WindowRuntimeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Selectable wallpaper preset.
pub struct WallpaperPreset {
    /// Stable preset id.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// CSS `background` value applied to the desktop.
    pub css: &'static str,
}

const WALLPAPER_PRESETS: [WallpaperPreset; 5] = [
    WallpaperPreset {
        id: "harmony",
        label: "Harmony",
        css: "url('/wallpapers/aero-harmony.jpg') center / cover no-repeat",
    },
    WallpaperPreset {
        id: "landscape",
        label: "Landscape",
        css: "url('/wallpapers/landscape.jpg') center / cover no-repeat",
    },
    WallpaperPreset {
        id: "nature",
        label: "Nature",
        css: "url('/wallpapers/nature.jpg') center / cover no-repeat",
    },
    WallpaperPreset {
        id: "aurora",
        label: "Aurora",
        css: "linear-gradient(160deg, #0b3d6e 0%, #1b7bb8 45%, #7fd1f0 100%)",
    },
    WallpaperPreset {
        id: "classic-teal",
        label: "Classic Teal",
        css: "#3a6ea5",
    },
];

/// Returns the built-in wallpaper presets; the first entry is the default.
pub fn wallpaper_presets() -> &'static [WallpaperPreset] {
    &WALLPAPER_PRESETS
}

/// Returns the preset whose CSS value equals `css`, if any.
pub fn wallpaper_preset_for_css(css: &str) -> Option<&'static WallpaperPreset> {
    WALLPAPER_PRESETS.iter().find(|preset| preset.css == css)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Read-only projection of the persisted appearance preferences.
pub struct ShellAppearance {
    /// CSS background value of the desktop.
    pub wallpaper: String,
    /// Taskbar transparency, 0-100.
    pub taskbar_transparency: u8,
    /// Whether glass blur effects are rendered.
    pub aero_effects_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Transport commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Close the window hosting the app.
    CloseWindow,
    /// Open (or re-activate) another application window.
    LaunchApp {
        /// Component key of the target application (for example `explorer`).
        app_key: String,
        /// Metadata passed through to the launched application.
        metadata: Value,
    },
    /// Replace the desktop wallpaper.
    SetWallpaper {
        /// CSS background value.
        wallpaper: String,
    },
    /// Change the taskbar transparency (0-100).
    SetTaskbarTransparency {
        /// Transparency percentage.
        percent: u8,
    },
    /// Toggle glass effects.
    SetAeroEffects {
        /// Whether effects are enabled.
        enabled: bool,
    },
}

#[derive(Clone, Copy)]
/// Window-level integration service.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests that the hosting window be closed.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }

    /// Requests that another application be opened with `metadata`.
    pub fn launch_app(&self, app_key: impl Into<String>, metadata: Value) {
        self.sender.call(AppCommand::LaunchApp {
            app_key: app_key.into(),
            metadata,
        });
    }
}

#[derive(Clone, Copy)]
/// Appearance preference service used by the settings panel.
pub struct AppearanceService {
    sender: Callback<AppCommand>,
    /// Current appearance preferences.
    pub current: Signal<ShellAppearance>,
}

impl AppearanceService {
    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, wallpaper: impl Into<String>) {
        self.sender.call(AppCommand::SetWallpaper {
            wallpaper: wallpaper.into(),
        });
    }

    /// Requests a taskbar transparency change; values above 100 are clamped.
    pub fn set_taskbar_transparency(&self, percent: u8) {
        self.sender.call(AppCommand::SetTaskbarTransparency {
            percent: percent.min(100),
        });
    }

    /// Requests glass effects on or off.
    pub fn set_aero_effects(&self, enabled: bool) {
        self.sender.call(AppCommand::SetAeroEffects { enabled });
    }

    /// Returns the current wallpaper CSS value (tracked).
    pub fn wallpaper(&self) -> String {
        self.current.get().wallpaper
    }
}

#[derive(Clone, Copy)]
/// Service bundle injected into every mounted application.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// Appearance preference service.
    pub appearance: AppearanceService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>, appearance: Signal<ShellAppearance>) -> Self {
        Self {
            window: WindowService { sender },
            appearance: AppearanceService {
                sender,
                current: appearance,
            },
        }
    }
}

#[derive(Clone)]
/// Mount-time context passed to an application view.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Opaque metadata supplied by whoever opened the window.
    pub metadata: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

impl AppMountContext {
    /// Returns a string metadata field, if present.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn preset_ids_are_unique_and_lookup_by_css_works() {
        let presets = wallpaper_presets();
        for (idx, preset) in presets.iter().enumerate() {
            assert!(
                presets[idx + 1..].iter().all(|other| other.id != preset.id),
                "duplicate preset id {}",
                preset.id
            );
            assert_eq!(wallpaper_preset_for_css(preset.css), Some(preset));
        }
        assert_eq!(wallpaper_preset_for_css("none"), None);
    }

    #[test]
    fn app_command_serializes_with_variant_tags() {
        let command = AppCommand::LaunchApp {
            app_key: "explorer".to_string(),
            metadata: json!({ "path": "/projects" }),
        };
        let raw = serde_json::to_value(&command).expect("serialize");
        assert_eq!(
            raw,
            json!({ "LaunchApp": { "app_key": "explorer", "metadata": { "path": "/projects" } } })
        );
    }
}
