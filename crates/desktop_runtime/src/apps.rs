//! Application registry: static descriptors, default window requests and view mounting.

mod placeholders;

use desktop_app_contract::{AppMountContext, AppMountFn};
use desktop_app_explorer::mount_explorer_app;
use desktop_app_settings::mount_settings_app;
use leptos::View;
use platform_host::normalize_virtual_path;
use serde_json::Value;

use crate::model::{AppId, DesktopIconRecord, OpenWindowRequest, Position, Size};

const CASCADE_STEP_PX: i32 = 28;
const CASCADE_SLOTS: usize = 6;
const ICON_COLUMN_X: i32 = 16;
const ICON_ROW_START_Y: i32 = 16;
const ICON_ROW_STEP_PX: i32 = 96;

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app: AppId,
    /// Single-instance window id used when the app is launched without metadata.
    pub window_id: &'static str,
    pub default_position: Position,
    pub default_size: Size,
    pub show_on_desktop: bool,
    pub disable_maximize: bool,
    pub mount: AppMountFn,
}

const EXPLORER: AppDescriptor = AppDescriptor {
    app: AppId::Explorer,
    window_id: "explorer",
    default_position: Position::new(120, 60),
    default_size: Size::new(760, 520),
    show_on_desktop: true,
    disable_maximize: false,
    mount: mount_explorer_app,
};

const CALCULATOR: AppDescriptor = AppDescriptor {
    app: AppId::Calculator,
    window_id: "calculator",
    default_position: Position::new(180, 90),
    default_size: Size::new(400, 520),
    show_on_desktop: true,
    disable_maximize: true,
    mount: placeholders::mount_calculator_app,
};

const MINESWEEPER: AppDescriptor = AppDescriptor {
    app: AppId::Minesweeper,
    window_id: "minesweeper",
    default_position: Position::new(220, 80),
    default_size: Size::new(440, 520),
    show_on_desktop: true,
    disable_maximize: true,
    mount: placeholders::mount_minesweeper_app,
};

const SNAKE: AppDescriptor = AppDescriptor {
    app: AppId::Snake,
    window_id: "snake",
    default_position: Position::new(240, 100),
    default_size: Size::new(480, 520),
    show_on_desktop: true,
    disable_maximize: true,
    mount: placeholders::mount_snake_app,
};

const MEDIA_PLAYER: AppDescriptor = AppDescriptor {
    app: AppId::MediaPlayer,
    window_id: "media-player",
    default_position: Position::new(160, 120),
    default_size: Size::new(640, 420),
    show_on_desktop: true,
    disable_maximize: false,
    mount: placeholders::mount_media_player_app,
};

const SETTINGS: AppDescriptor = AppDescriptor {
    app: AppId::Settings,
    window_id: "settings",
    default_position: Position::new(200, 70),
    default_size: Size::new(640, 480),
    show_on_desktop: false,
    disable_maximize: false,
    mount: mount_settings_app,
};

const FEEDBACK: AppDescriptor = AppDescriptor {
    app: AppId::Feedback,
    window_id: "feedback",
    default_position: Position::new(260, 110),
    default_size: Size::new(480, 440),
    show_on_desktop: true,
    disable_maximize: false,
    mount: placeholders::mount_feedback_app,
};

const TOUR: AppDescriptor = AppDescriptor {
    app: AppId::Tour,
    window_id: "tour",
    default_position: Position::new(300, 120),
    default_size: Size::new(520, 360),
    show_on_desktop: false,
    disable_maximize: true,
    mount: placeholders::mount_tour_app,
};

const APP_REGISTRY: [AppDescriptor; 8] = [
    EXPLORER,
    CALCULATOR,
    MINESWEEPER,
    SNAKE,
    MEDIA_PLAYER,
    SETTINGS,
    FEEDBACK,
    TOUR,
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app: AppId) -> &'static AppDescriptor {
    match app {
        AppId::Explorer => &EXPLORER,
        AppId::Calculator => &CALCULATOR,
        AppId::Minesweeper => &MINESWEEPER,
        AppId::Snake => &SNAKE,
        AppId::MediaPlayer => &MEDIA_PLAYER,
        AppId::Settings => &SETTINGS,
        AppId::Feedback => &FEEDBACK,
        AppId::Tour => &TOUR,
    }
}

pub fn desktop_icon_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.show_on_desktop)
}

/// One icon per desktop-visible app, laid out top to bottom in a single column.
pub fn default_desktop_icons() -> Vec<DesktopIconRecord> {
    desktop_icon_apps()
        .enumerate()
        .map(|(row, entry)| DesktopIconRecord {
            id: format!("icon-{}", entry.app.key()),
            title: entry.app.title().to_string(),
            icon: entry.app.icon().to_string(),
            component: entry.app,
            position: Position::new(
                ICON_COLUMN_X,
                ICON_ROW_START_Y + row as i32 * ICON_ROW_STEP_PX,
            ),
        })
        .collect()
}

/// Window id for `app` given its launch metadata.
///
/// Explorer windows opened on a specific folder get their own id so each folder can have its
/// own window; every other app is single-instance. Folder paths are normalized first, so
/// `/projects/` and `/projects` share a window.
pub fn window_id_for(app: AppId, metadata: &Value) -> String {
    let descriptor = app_descriptor(app);
    let folder = metadata
        .get("path")
        .and_then(Value::as_str)
        .map(normalize_virtual_path);
    match (app, folder) {
        (AppId::Explorer, Some(path)) if path != "/" => {
            format!("{}:{}", descriptor.window_id, path)
        }
        _ => descriptor.window_id.to_string(),
    }
}

/// Builds the open request for `app`, offsetting new windows so they do not stack exactly.
pub fn open_request(app: AppId, metadata: Value, cascade_index: usize) -> OpenWindowRequest {
    let descriptor = app_descriptor(app);
    let offset = (cascade_index % CASCADE_SLOTS) as i32 * CASCADE_STEP_PX;
    let position = Position::new(
        descriptor.default_position.x + offset,
        descriptor.default_position.y + offset,
    );

    let title = match metadata.get("title").and_then(Value::as_str) {
        Some(title) => title.to_string(),
        None => app.title().to_string(),
    };

    let mut request = OpenWindowRequest::new(
        window_id_for(app, &metadata),
        app,
        title,
        position,
        descriptor.default_size,
    )
    .with_metadata(metadata);
    request.disable_maximize = descriptor.disable_maximize;
    request
}

/// Mounts the view for `app` inside window chrome.
pub fn mount_app(app: AppId, context: AppMountContext) -> View {
    (app_descriptor(app).mount)(context)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn every_app_has_exactly_one_descriptor() {
        for app in AppId::ALL {
            let count = app_registry().iter().filter(|d| d.app == app).count();
            assert_eq!(count, 1, "{app:?}");
        }
    }

    #[test]
    fn descriptor_lookup_matches_the_requested_app() {
        for app in AppId::ALL {
            assert_eq!(app_descriptor(app).app, app);
        }
    }

    #[test]
    fn app_keys_round_trip() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_key(app.key()), Some(app));
        }
        assert_eq!(AppId::from_key("paint"), None);
    }

    #[test]
    fn default_icons_form_a_single_column() {
        let icons = default_desktop_icons();
        assert_eq!(icons.len(), desktop_icon_apps().count());
        assert!(icons.iter().all(|icon| icon.position.x == ICON_COLUMN_X));
        for pair in icons.windows(2) {
            assert_eq!(pair[1].position.y - pair[0].position.y, ICON_ROW_STEP_PX);
        }
        assert!(icons.iter().all(|icon| icon.component != AppId::Tour));
    }

    #[test]
    fn open_request_uses_descriptor_defaults() {
        let request = open_request(AppId::Calculator, Value::Null, 0);
        assert_eq!(request.id.as_str(), "calculator");
        assert_eq!(request.title, "Calculator");
        assert_eq!(request.position, Position::new(180, 90));
        assert_eq!(request.size, Size::new(400, 520));
        assert!(request.disable_maximize);
    }

    #[test]
    fn open_request_cascades_and_wraps() {
        let first = open_request(AppId::Explorer, Value::Null, 1);
        let wrapped = open_request(AppId::Explorer, Value::Null, CASCADE_SLOTS + 1);
        assert_eq!(first.position, Position::new(148, 88));
        assert_eq!(wrapped.position, first.position);
    }

    #[test]
    fn explorer_folder_windows_get_distinct_ids() {
        assert_eq!(window_id_for(AppId::Explorer, &Value::Null), "explorer");
        assert_eq!(
            window_id_for(AppId::Explorer, &json!({ "path": "/" })),
            "explorer"
        );
        assert_eq!(
            window_id_for(AppId::Explorer, &json!({ "path": "/projects" })),
            "explorer:/projects"
        );
        assert_eq!(
            window_id_for(AppId::Explorer, &json!({ "path": "/projects/" })),
            "explorer:/projects"
        );
        assert_eq!(
            window_id_for(AppId::Explorer, &json!({ "path": "/projects/.." })),
            "explorer"
        );
        assert_eq!(
            window_id_for(AppId::Settings, &json!({ "path": "/projects" })),
            "settings"
        );
    }

    #[test]
    fn metadata_title_overrides_default_title() {
        let request = open_request(AppId::Explorer, json!({ "title": "Projects" }), 0);
        assert_eq!(request.title, "Projects");
    }
}
