use super::*;
use crate::components::window::begin_pointer_gesture;

/// Painted icon position: the live drag position while this icon is being dragged, otherwise
/// the stored one.
fn icon_position(desktop: &DesktopState, gesture: &WindowGesture, icon_id: &str) -> Option<Position> {
    match gesture {
        WindowGesture::DraggingIcon {
            icon_id: dragged,
            current,
            ..
        } if dragged == icon_id => Some(*current),
        _ => desktop.preferences.icon(icon_id).map(|icon| icon.position),
    }
}

#[component]
pub(super) fn DesktopIcon(icon_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|desktop| desktop.preferences.icon(&icon_id).cloned())
    else {
        return ().into_view();
    };
    let id = store_value(icon_id);
    let app = record.component;

    let position = create_memo(move |_| {
        runtime.interaction.with(|interaction| {
            runtime.state.with(|desktop| {
                id.with_value(|id| icon_position(desktop, &interaction.gesture, id))
            })
        })
    });
    let dragging = move || {
        runtime.interaction.with(|interaction| {
            matches!(
                &interaction.gesture,
                WindowGesture::DraggingIcon { icon_id, moved: true, .. }
                    if id.with_value(|id| id == icon_id)
            )
        })
    };

    view! {
        <button
            type="button"
            class=move || if dragging() { "desktop-icon dragging" } else { "desktop-icon" }
            style=move || {
                position
                    .get()
                    .map(|at| format!("left:{}px;top:{}px;", at.x, at.y))
                    .unwrap_or_default()
            }
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                if begin_pointer_gesture(&ev) {
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    runtime.dispatch_action(DesktopAction::BeginIconDrag {
                        icon_id: id.get_value(),
                        pointer: pointer_from_pointer_event(&ev),
                    });
                }
            }
            on:dblclick=move |_| {
                runtime.dispatch_action(DesktopAction::LaunchApp {
                    app,
                    metadata: Value::Null,
                })
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    runtime.dispatch_action(DesktopAction::LaunchApp {
                        app,
                        metadata: Value::Null,
                    });
                }
            }
        >
            <img class="desktop-icon-image" src=record.icon.clone() alt="" draggable="false" />
            <span class="desktop-icon-label">{record.title.clone()}</span>
        </button>
    }
    .into_view()
}
