use std::time::Duration;

use platform_host::{local_clock_now, ClockReading};

use super::*;
use crate::{apps::app_registry, model::PreferenceState};

const START_MENU_ID: &str = "start-menu";

/// Inline taskbar style: background alpha follows the transparency preference and the glass blur
/// is only applied when Aero effects are on.
pub(super) fn taskbar_style(preferences: &PreferenceState) -> String {
    let mut style = format!(
        "height:{}px;background-color:rgba(20, 38, 58, {:.2});",
        TASKBAR_HEIGHT_PX,
        preferences.taskbar_alpha()
    );
    if preferences.aero_effects_enabled {
        style.push_str("backdrop-filter:blur(12px);");
    }
    style
}

fn taskbar_button_class(window: &WindowRecord) -> &'static str {
    match (window.is_active, window.is_minimized) {
        (true, _) => "taskbar-window active",
        (false, true) => "taskbar-window minimized",
        (false, false) => "taskbar-window",
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(local_clock_now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(local_clock_now()), Duration::from_secs(15))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            style=move || state.with(|desktop| taskbar_style(&desktop.preferences))
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                type="button"
                class=move || if state.with(|d| d.start_menu_open) { "start-button open" } else { "start-button" }
                aria-label="Start"
                aria-haspopup="menu"
                aria-expanded=move || state.with(|d| d.start_menu_open).to_string()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                <span class="start-orb" aria-hidden="true"></span>
            </button>

            <div class="taskbar-windows" role="toolbar" aria-label="Open windows">
                <For
                    each=move || state.with(|d| d.registry.windows().to_vec())
                    key=|win| (win.id.clone(), win.title.clone(), win.is_active, win.is_minimized)
                    let:win
                >
                    {{
                        let window_id = win.id.clone();
                        view! {
                            <button
                                type="button"
                                class=taskbar_button_class(&win)
                                title=win.title.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: window_id.clone(),
                                    })
                                }
                            >
                                <img src=win.icon.clone() alt="" />
                                <span>{win.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <TaskbarClock clock=clock />
            <button
                type="button"
                class="show-desktop"
                title="Show desktop"
                aria-label="Show desktop"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ShowDesktop)
            ></button>
        </footer>

        <Show when=move || state.with(|d| d.start_menu_open) fallback=|| ()>
            <StartMenu />
        </Show>
    }
}

#[component]
fn TaskbarClock(clock: RwSignal<ClockReading>) -> impl IntoView {
    view! {
        <div class="taskbar-clock" title=move || clock.with(ClockReading::long_date)>
            <span>{move || clock.with(ClockReading::time_12h)}</span>
            <span>{move || clock.with(ClockReading::short_date)}</span>
        </div>
    }
}

#[component]
fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();

    request_animation_frame(|| {
        let _ = focus_first_menu_item(START_MENU_ID);
    });

    view! {
        <nav
            id=START_MENU_ID
            class="start-menu"
            role="menu"
            aria-label="Start menu"
            style=format!("bottom:{}px;", TASKBAR_HEIGHT_PX)
            on:mousedown=move |ev| ev.stop_propagation()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                handle_menu_roving_keydown(&ev, START_MENU_ID);
            }
        >
            <ul class="start-menu-apps">
                {app_registry()
                    .iter()
                    .map(|descriptor| {
                        let app = descriptor.app;
                        view! {
                            <li>
                                <button
                                    type="button"
                                    role="menuitem"
                                    id=format!("start-menu-item-{}", app.key())
                                    class="start-menu-item"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::LaunchApp {
                                            app,
                                            metadata: Value::Null,
                                        })
                                    }
                                >
                                    <img src=app.icon() alt="" />
                                    <span>{app.title()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="start-menu-footer">
                <button
                    type="button"
                    role="menuitem"
                    id="start-menu-item-shutdown"
                    class="start-menu-shutdown"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::Shutdown)
                >
                    "Shut down"
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn taskbar_style_tracks_transparency_and_blur() {
        let mut preferences = PreferenceState::default();
        preferences.set_taskbar_transparency(85);
        assert_eq!(
            taskbar_style(&preferences),
            "height:40px;background-color:rgba(20, 38, 58, 0.15);backdrop-filter:blur(12px);"
        );

        preferences.set_aero_effects(false);
        preferences.set_taskbar_transparency(0);
        assert_eq!(
            taskbar_style(&preferences),
            "height:40px;background-color:rgba(20, 38, 58, 1.00);"
        );
    }
}
