use super::*;

pub(super) const CONTEXT_MENU_ID: &str = "desktop-context-menu";
const CONTEXT_MENU_SIZE: Size = Size::new(200, 112);

/// Places a menu at the pointer, shifted so it stays fully inside the viewport.
pub(super) fn clamp_menu_position(pointer: Position, menu: Size, viewport: (i32, i32)) -> Position {
    let (width, height) = viewport;
    Position {
        x: pointer.x.min(width - menu.width).max(0),
        y: pointer.y.min(height - menu.height).max(0),
    }
}

pub(super) fn context_menu_position(pointer: Position) -> Position {
    clamp_menu_position(pointer, CONTEXT_MENU_SIZE, crate::host::viewport_size())
}

#[component]
pub(super) fn DesktopContextMenu(menu: RwSignal<Option<Position>>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let close_menu = move || {
        menu.set(None);
        let _ = focus_element_by_id(DESKTOP_ROOT_ID);
    };
    let launch = move |app: AppId| {
        close_menu();
        runtime.dispatch_action(DesktopAction::LaunchApp {
            app,
            metadata: Value::Null,
        });
    };

    view! {
        <Show when=move || menu.get().is_some() fallback=|| ()>
            <div
                id=CONTEXT_MENU_ID
                class="desktop-context-menu"
                role="menu"
                aria-label="Desktop context menu"
                style=move || {
                    menu.get()
                        .map(|at| format!("left:{}px;top:{}px;", at.x, at.y))
                        .unwrap_or_default()
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if handle_menu_roving_keydown(&ev, CONTEXT_MENU_ID) {
                        return;
                    }
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        close_menu();
                    }
                }
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| ev.prevent_default()
            >
                <button
                    type="button"
                    role="menuitem"
                    id="desktop-context-menu-item-refresh"
                    class="context-menu-item"
                    on:click=move |_| close_menu()
                >
                    "Refresh"
                </button>
                <div class="context-menu-separator" role="separator"></div>
                <button
                    type="button"
                    role="menuitem"
                    id="desktop-context-menu-item-personalize"
                    class="context-menu-item"
                    on:click=move |_| launch(AppId::Settings)
                >
                    "Personalize"
                </button>
                <button
                    type="button"
                    role="menuitem"
                    id="desktop-context-menu-item-explorer"
                    class="context-menu-item"
                    on:click=move |_| launch(AppId::Explorer)
                >
                    "Open Explorer"
                </button>
            </div>
        </Show>
    }
}
