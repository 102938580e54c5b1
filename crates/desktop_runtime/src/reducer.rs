//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::AppCommand;
use serde_json::Value;
use thiserror::Error;

use crate::{
    apps,
    chrome::{self, WorkArea},
    model::{
        AppId, DesktopState, Geometry, InteractionState, OpenWindowRequest, Position, ResizeEdge,
        WindowGesture, WindowId,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or re-activate) a window from a fully specified request.
    OpenWindow(OpenWindowRequest),
    /// Open an application using its registry descriptor.
    LaunchApp {
        /// Application to open.
        app: AppId,
        /// Metadata handed to the mounted application.
        metadata: Value,
    },
    CloseWindow {
        window_id: WindowId,
    },
    FocusWindow {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    /// Maximize button or title-bar double-click: flips maximize and raises the window.
    ToggleMaximize {
        window_id: WindowId,
    },
    /// Taskbar button behavior: restore if minimized, minimize if active, otherwise focus.
    ToggleTaskbarWindow {
        window_id: WindowId,
    },
    /// Taskbar button behavior for the n-th (zero-based) taskbar entry.
    ActivateTaskbarSlot {
        index: usize,
    },
    MinimizeActive,
    CloseActive,
    /// Taskbar "Show desktop": minimizes every visible window.
    ShowDesktop,
    ToggleStartMenu,
    CloseStartMenu,
    /// Pointer-down on a title bar.
    BeginMove {
        window_id: WindowId,
        pointer: Position,
    },
    /// Pointer-down on one of the eight resize handles.
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: Position,
    },
    /// Pointer-down on a desktop icon.
    BeginIconDrag {
        icon_id: String,
        pointer: Position,
    },
    /// Pointer-move while a gesture is active.
    PointerMove {
        pointer: Position,
        work_area: WorkArea,
    },
    /// Pointer-up or pointer-cancel.
    EndGesture,
    SetWallpaper {
        wallpaper: String,
    },
    SetTaskbarTransparency {
        percent: u8,
    },
    SetAeroEffects {
        enabled: bool,
    },
    Shutdown,
    Restart,
    /// Opens the tour once and records that it has been shown.
    StartFirstVisitTour,
    /// Command emitted by an application mounted in `window_id`.
    HandleAppCommand {
        window_id: WindowId,
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Write the preference document.
    PersistPreferences,
    /// Write the first-visit tour flag.
    PersistTourSeen,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot be interpreted.
pub enum ReducerError {
    #[error("unknown application key `{0}`")]
    UnknownApp(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions naming a window that does not exist are silent no-ops.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when an application command names an app key outside the
/// registry.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(request) => {
            state.registry.open(request);
            state.start_menu_open = false;
        }
        DesktopAction::LaunchApp { app, metadata } => {
            let cascade = state.registry.windows().len();
            state
                .registry
                .open(apps::open_request(app, metadata, cascade));
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            state.registry.close(&window_id);
            cancel_gesture_for(interaction, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.registry.focus(&window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.registry.minimize(&window_id);
            cancel_gesture_for(interaction, &window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if state.registry.toggle_maximize(&window_id) {
                state.registry.focus(&window_id);
            }
        }
        DesktopAction::ShowDesktop => {
            while let Some(window_id) = state.registry.top_visible_window().map(|w| w.id.clone()) {
                state.registry.minimize(&window_id);
                cancel_gesture_for(interaction, &window_id);
            }
            state.start_menu_open = false;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            toggle_taskbar_window(state, &window_id);
        }
        DesktopAction::ActivateTaskbarSlot { index } => {
            if let Some(window_id) = state.registry.windows().get(index).map(|w| w.id.clone()) {
                toggle_taskbar_window(state, &window_id);
            }
        }
        DesktopAction::MinimizeActive => {
            if let Some(window_id) = state.active_window_id() {
                state.registry.minimize(&window_id);
                cancel_gesture_for(interaction, &window_id);
            }
        }
        DesktopAction::CloseActive => {
            if let Some(window_id) = state.active_window_id() {
                state.registry.close(&window_id);
                cancel_gesture_for(interaction, &window_id);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.registry.get(&window_id) else {
                return Ok(effects);
            };
            let maximized = window.is_maximized;
            let offset = chrome::drag_offset(pointer, window.position);
            state.registry.focus(&window_id);
            state.start_menu_open = false;
            if !maximized {
                interaction.gesture = WindowGesture::Dragging {
                    window_id,
                    pointer_offset: offset,
                };
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.registry.get(&window_id) else {
                return Ok(effects);
            };
            let maximized = window.is_maximized;
            let origin = Geometry {
                position: window.position,
                size: window.size,
            };
            state.registry.focus(&window_id);
            state.start_menu_open = false;
            if !maximized {
                interaction.gesture = WindowGesture::Resizing {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    origin,
                };
            }
        }
        DesktopAction::BeginIconDrag { icon_id, pointer } => {
            let Some(icon) = state.preferences.icon(&icon_id) else {
                return Ok(effects);
            };
            interaction.gesture = WindowGesture::DraggingIcon {
                pointer_offset: pointer.delta_from(icon.position),
                current: icon.position,
                icon_id,
                moved: false,
            };
        }
        DesktopAction::PointerMove { pointer, work_area } => {
            apply_pointer_move(state, interaction, pointer, work_area);
        }
        DesktopAction::EndGesture => {
            let finished = std::mem::take(&mut interaction.gesture);
            if let WindowGesture::DraggingIcon {
                icon_id,
                current,
                moved: true,
                ..
            } = finished
            {
                if state.preferences.update_icon_position(&icon_id, current) {
                    effects.push(RuntimeEffect::PersistPreferences);
                }
            }
        }
        DesktopAction::SetWallpaper { wallpaper } => {
            state.preferences.set_wallpaper(wallpaper);
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetTaskbarTransparency { percent } => {
            state.preferences.set_taskbar_transparency(percent);
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetAeroEffects { enabled } => {
            state.preferences.set_aero_effects(enabled);
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::Shutdown => {
            state.preferences.shutdown();
            state.start_menu_open = false;
            interaction.gesture = WindowGesture::Idle;
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::Restart => {
            state.preferences.restart();
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::StartFirstVisitTour => {
            if !state.tour_seen {
                state.tour_seen = true;
                let cascade = state.registry.windows().len();
                state
                    .registry
                    .open(apps::open_request(AppId::Tour, Value::Null, cascade));
                effects.push(RuntimeEffect::PersistTourSeen);
            }
        }
        DesktopAction::HandleAppCommand { window_id, command } => {
            let action = app_command_action(window_id, command)?;
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
    }

    Ok(effects)
}

fn toggle_taskbar_window(state: &mut DesktopState, window_id: &WindowId) {
    let Some(window) = state.registry.get(window_id) else {
        return;
    };
    if window.is_minimized {
        state.registry.restore(window_id);
    } else if window.is_active {
        state.registry.minimize(window_id);
    } else {
        state.registry.focus(window_id);
    }
}

fn apply_pointer_move(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: Position,
    work_area: WorkArea,
) {
    match &mut interaction.gesture {
        WindowGesture::Idle => {}
        WindowGesture::Dragging {
            window_id,
            pointer_offset,
        } => {
            state
                .registry
                .move_to(window_id, chrome::drag_position(pointer, *pointer_offset));
        }
        WindowGesture::Resizing {
            window_id,
            edge,
            pointer_start,
            origin,
        } => {
            let delta = pointer.delta_from(*pointer_start);
            let next = chrome::resize_geometry(*origin, *edge, delta.x, delta.y, work_area);
            state.registry.move_to(window_id, next.position);
            state.registry.resize(window_id, next.size);
        }
        WindowGesture::DraggingIcon {
            pointer_offset,
            current,
            moved,
            ..
        } => {
            let next = Position {
                x: (pointer.x - pointer_offset.x).max(0),
                y: (pointer.y - pointer_offset.y).max(0),
            };
            if next != *current {
                *current = next;
                *moved = true;
            }
        }
    }
}

fn cancel_gesture_for(interaction: &mut InteractionState, window_id: &WindowId) {
    let targets_window = match &interaction.gesture {
        WindowGesture::Dragging { window_id: id, .. }
        | WindowGesture::Resizing { window_id: id, .. } => id == window_id,
        _ => false,
    };
    if targets_window {
        interaction.gesture = WindowGesture::Idle;
    }
}

/// Maps an application command onto the equivalent runtime action.
pub fn app_command_action(
    window_id: WindowId,
    command: AppCommand,
) -> Result<DesktopAction, ReducerError> {
    Ok(match command {
        AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
        AppCommand::LaunchApp { app_key, metadata } => DesktopAction::LaunchApp {
            app: AppId::from_key(&app_key).ok_or(ReducerError::UnknownApp(app_key))?,
            metadata,
        },
        AppCommand::SetWallpaper { wallpaper } => DesktopAction::SetWallpaper { wallpaper },
        AppCommand::SetTaskbarTransparency { percent } => {
            DesktopAction::SetTaskbarTransparency { percent }
        }
        AppCommand::SetAeroEffects { enabled } => DesktopAction::SetAeroEffects { enabled },
    })
}
