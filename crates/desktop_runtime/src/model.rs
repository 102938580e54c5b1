use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{apps, window_manager::WindowRegistry};

pub const DEFAULT_WALLPAPER: &str = "url('/wallpapers/aero-harmony.jpg') center / cover no-repeat";
pub const DEFAULT_TASKBAR_TRANSPARENCY: u8 = 85;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of applications that can be mounted inside window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Calculator,
    Minesweeper,
    Snake,
    Explorer,
    MediaPlayer,
    Settings,
    Feedback,
    Tour,
}

impl AppId {
    pub const ALL: [AppId; 8] = [
        Self::Explorer,
        Self::Calculator,
        Self::Minesweeper,
        Self::Snake,
        Self::MediaPlayer,
        Self::Settings,
        Self::Feedback,
        Self::Tour,
    ];

    /// Stable component key used in persisted icon records and app commands.
    pub fn key(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Minesweeper => "minesweeper",
            Self::Snake => "snake",
            Self::Explorer => "explorer",
            Self::MediaPlayer => "media-player",
            Self::Settings => "settings",
            Self::Feedback => "feedback",
            Self::Tour => "tour",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Minesweeper => "Minesweeper",
            Self::Snake => "Snake",
            Self::Explorer => "Computer",
            Self::MediaPlayer => "Media Player",
            Self::Settings => "Personalization",
            Self::Feedback => "Feedback",
            Self::Tour => "Welcome Tour",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Calculator => "/icons/calculator.png",
            Self::Minesweeper => "/icons/minesweeper.png",
            Self::Snake => "/icons/snake.png",
            Self::Explorer => "/icons/computer.png",
            Self::MediaPlayer => "/icons/media-player.png",
            Self::Settings => "/icons/personalization.png",
            Self::Feedback => "/icons/feedback.png",
            Self::Tour => "/icons/help.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, origin: Position) -> Position {
        Position {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One open application instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "component")]
    pub app: AppId,
    pub position: Position,
    pub size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_active: bool,
    pub z_order: u64,
    pub disable_maximize: bool,
    pub metadata: Value,
}

/// Window-open request consumed by [`WindowRegistry::open`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "component")]
    pub app: AppId,
    #[serde(default)]
    pub is_minimized: bool,
    #[serde(default)]
    pub is_maximized: bool,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub disable_maximize: bool,
    #[serde(default)]
    pub metadata: Value,
}

impl OpenWindowRequest {
    pub fn new(
        id: impl Into<WindowId>,
        app: AppId,
        title: impl Into<String>,
        position: Position,
        size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: app.icon().to_string(),
            app,
            is_minimized: false,
            is_maximized: false,
            position,
            size,
            disable_maximize: false,
            metadata: Value::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopIconRecord {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub component: AppId,
    pub position: Position,
}

/// Persisted desktop preferences. Missing fields in a stored document fall back individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceState {
    pub desktop_icons: Vec<DesktopIconRecord>,
    pub is_shutdown: bool,
    pub wallpaper: String,
    pub taskbar_transparency: u8,
    pub aero_effects_enabled: bool,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            desktop_icons: apps::default_desktop_icons(),
            is_shutdown: false,
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            taskbar_transparency: DEFAULT_TASKBAR_TRANSPARENCY,
            aero_effects_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
}

/// Pointer gesture in progress. Every active state returns to `Idle` on pointer-up or
/// pointer-cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WindowGesture {
    #[default]
    Idle,
    Dragging {
        window_id: WindowId,
        pointer_offset: Position,
    },
    Resizing {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer_start: Position,
        origin: Geometry,
    },
    DraggingIcon {
        icon_id: String,
        pointer_offset: Position,
        current: Position,
        moved: bool,
    },
}

impl WindowGesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub gesture: WindowGesture,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub preferences: PreferenceState,
    pub start_menu_open: bool,
    pub tour_seen: bool,
}

impl DesktopState {
    pub fn booted(preferences: PreferenceState, tour_seen: bool) -> Self {
        Self {
            preferences,
            tour_seen,
            ..Self::default()
        }
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.registry.active_window().map(|w| w.id.clone())
    }
}
