//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod icons;
mod menus;
mod shortcuts;
mod taskbar;
mod window;

use leptos::*;
use serde_json::Value;

use self::{
    a11y::{focus_element_by_id, focus_first_menu_item, handle_menu_roving_keydown},
    icons::DesktopIcon,
    menus::{context_menu_position, DesktopContextMenu, CONTEXT_MENU_ID},
    shortcuts::{resolve_shortcut, KeyChord, ShellShortcut},
    taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{
    apps,
    chrome::{WorkArea, TASKBAR_HEIGHT_PX},
    host::viewport_size,
    model::{
        AppId, DesktopState, Position, ResizeEdge, Size, WindowGesture, WindowId, WindowRecord,
    },
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DESKTOP_ROOT_ID: &str = "desktop-shell-root";

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Position {
    Position::new(ev.client_x(), ev.client_y())
}

fn desktop_background_style(desktop: &DesktopState) -> String {
    format!("background:{};", desktop.preferences.wallpaper)
}

fn shortcut_action(shortcut: ShellShortcut) -> DesktopAction {
    match shortcut {
        ShellShortcut::ToggleStartMenu => DesktopAction::ToggleStartMenu,
        ShellShortcut::CloseMenus => DesktopAction::CloseStartMenu,
        ShellShortcut::ActivateTaskbarSlot(index) => DesktopAction::ActivateTaskbarSlot { index },
        ShellShortcut::MinimizeActive => DesktopAction::MinimizeActive,
        ShellShortcut::CloseActive => DesktopAction::CloseActive,
    }
}

#[component]
/// Renders the full desktop shell UI: wallpaper, icons, windows, taskbar and menus.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let context_menu = create_rw_signal(None::<Position>);
    let context_menu_was_open = create_rw_signal(false);

    create_effect(move |_| {
        let is_open = context_menu.get().is_some();
        let was_open = context_menu_was_open.get_untracked();
        if is_open && !was_open {
            context_menu_was_open.set(true);
            let _ = focus_first_menu_item(CONTEXT_MENU_ID);
        } else if !is_open && was_open {
            context_menu_was_open.set(false);
        }
    });

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let key = ev.key();
        let Some(shortcut) = resolve_shortcut(KeyChord::from_event(&ev, &key)) else {
            return;
        };
        if shortcut == ShellShortcut::CloseMenus {
            let menu_was_open = context_menu.get_untracked().is_some();
            let start_was_open = state.with_untracked(|d| d.start_menu_open);
            if !menu_was_open && !start_was_open {
                return;
            }
            context_menu.set(None);
            let _ = focus_element_by_id(DESKTOP_ROOT_ID);
        }
        ev.prevent_default();
        runtime.dispatch_action(shortcut_action(shortcut));
    });
    on_cleanup(move || keydown_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let (width, height) = viewport_size();
        let next = WorkArea::from_viewport(width, height);
        if runtime.work_area.get_untracked() != next {
            runtime.work_area.set(next);
        }
    });
    on_cleanup(move || resize_listener.remove());

    if !state.with_untracked(|d| d.tour_seen || d.preferences.is_shutdown) {
        request_animation_frame(move || {
            runtime.dispatch_action(DesktopAction::StartFirstVisitTour);
        });
    }

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !runtime.interaction.with_untracked(|ui| ui.gesture.is_active()) {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMove {
            pointer: pointer_from_pointer_event(&ev),
            work_area: runtime.work_area.get_untracked(),
        });
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.gesture.is_active()) {
            runtime.dispatch_action(DesktopAction::EndGesture);
        }
    };

    view! {
        <div
            id=DESKTOP_ROOT_ID
            class=move || {
                if state.with(|d| d.preferences.aero_effects_enabled) {
                    "desktop-shell aero"
                } else {
                    "desktop-shell"
                }
            }
            tabindex="-1"
            style=move || state.with(desktop_background_style)
            on:mousedown=move |_| {
                if context_menu.get_untracked().is_some() {
                    context_menu.set(None);
                }
                if state.with_untracked(|d| d.start_menu_open) {
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-backdrop"
                on:contextmenu=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    context_menu.set(Some(context_menu_position(Position::new(
                        ev.client_x(),
                        ev.client_y(),
                    ))));
                }
            ></div>

            <div class="desktop-icons" role="list" aria-label="Desktop icons">
                <For
                    each=move || {
                        state.with(|d| {
                            d.preferences
                                .desktop_icons
                                .iter()
                                .map(|icon| icon.id.clone())
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|id| id.clone()
                    let:icon_id
                >
                    <DesktopIcon icon_id=icon_id />
                </For>
            </div>

            <div class="desktop-windows" style=format!("bottom:{}px;", TASKBAR_HEIGHT_PX)>
                <For
                    each=move || {
                        state.with(|d| {
                            d.registry
                                .windows()
                                .iter()
                                .map(|w| w.id.clone())
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|id| id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <DesktopContextMenu menu=context_menu />
            <Taskbar />

            <Show when=move || state.with(|d| d.preferences.is_shutdown) fallback=|| ()>
                <ShutdownScreen />
            </Show>
        </div>
    }
}

#[component]
fn ShutdownScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="shutdown-screen" role="alertdialog" aria-label="Shut down">
            <p class="shutdown-message">"It is now safe to turn off your computer."</p>
            <button
                type="button"
                class="shutdown-restart"
                on:click=move |_| runtime.dispatch_action(DesktopAction::Restart)
            >
                "Restart"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wallpaper_is_painted_as_the_root_background() {
        let mut desktop = DesktopState::default();
        desktop.preferences.set_wallpaper("#123456");
        assert_eq!(desktop_background_style(&desktop), "background:#123456;");
    }

    #[test]
    fn shortcuts_map_to_reducer_actions() {
        assert_eq!(
            shortcut_action(ShellShortcut::ActivateTaskbarSlot(2)),
            DesktopAction::ActivateTaskbarSlot { index: 2 }
        );
        assert_eq!(
            shortcut_action(ShellShortcut::CloseMenus),
            DesktopAction::CloseStartMenu
        );
        assert_eq!(
            shortcut_action(ShellShortcut::CloseActive),
            DesktopAction::CloseActive
        );
    }
}
