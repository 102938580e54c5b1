use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::chrome::{effective_geometry, resize_edge_class, window_style};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button (or primary touch) pointer-down that may start a gesture.
pub(super) fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

pub(super) fn begin_pointer_gesture(ev: &web_sys::PointerEvent) -> bool {
    if !is_primary_press(ev) {
        return false;
    }
    try_set_pointer_capture(ev);
    ev.prevent_default();
    ev.stop_propagation();
    true
}

fn stop_pointer(ev: web_sys::PointerEvent) {
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| id.with_value(|id| desktop.registry.get(id).cloned()))
    });

    let read = move |f: fn(&WindowRecord) -> bool| window.with(|w| w.as_ref().is_some_and(f));
    let is_active = move || read(|w| w.is_active);
    let is_minimized = move || read(|w| w.is_minimized);
    let is_maximized = move || read(|w| w.is_maximized);
    let maximize_disabled = move || read(|w| w.disable_maximize);

    let layer = create_memo(move |_| {
        runtime
            .state
            .with(|d| id.with_value(|id| d.registry.stack_layer(id)))
            .unwrap_or_default()
    });
    let style = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| window_style(effective_geometry(w, runtime.work_area.get()), layer.get()))
                .unwrap_or_default()
        })
    };
    let class = move || {
        let mut class = String::from("desktop-window");
        if is_active() {
            class.push_str(" active");
        }
        if is_maximized() {
            class.push_str(" maximized");
        }
        if !runtime.state.with(|d| d.preferences.aero_effects_enabled) {
            class.push_str(" opaque");
        }
        class
    };
    let title = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let icon = move || window.with(|w| w.as_ref().map(|w| w.icon.clone()).unwrap_or_default());

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if begin_pointer_gesture(&ev) {
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: id.get_value(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        })
    };

    view! {
        <section
            class=class
            style=style
            hidden=is_minimized
            role="dialog"
            aria-label=title
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <img class="titlebar-app-icon" src=icon alt="" />
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:pointerdown=stop_pointer
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                                window_id: id.get_value(),
                            })
                        }
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button maximize"
                        disabled=maximize_disabled
                        aria-label=move || if is_maximized() { "Restore window" } else { "Maximize window" }
                        on:pointerdown=stop_pointer
                        on:click=move |_| toggle_maximize()
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:pointerdown=stop_pointer
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow {
                                window_id: id.get_value(),
                            })
                        }
                    ></button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody window_id=id.get_value() />
            </div>
            <Show when=move || !is_maximized() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=id.get_value() edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if begin_pointer_gesture(&ev) {
            runtime.dispatch_action(DesktopAction::BeginResize {
                window_id: id.get_value(),
                edge,
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

/// Mounts the window's application once; later registry changes do not remount it.
#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .with_untracked(|desktop| {
            desktop
                .registry
                .get(&window_id)
                .map(|w| (w.app, w.metadata.clone()))
        })
        .map(|(app, metadata)| {
            apps::mount_app(
                app,
                AppMountContext {
                    window_id: window_id.to_string(),
                    metadata,
                    services: runtime.app_services(window_id.clone()),
                },
            )
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
