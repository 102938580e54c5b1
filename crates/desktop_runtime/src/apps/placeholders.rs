//! Built-in lightweight panels for apps without a dedicated crate.

use desktop_app_contract::AppMountContext;
use leptos::*;

const CALCULATOR_KEYS: [&str; 20] = [
    "C", "CE", "%", "/", "7", "8", "9", "*", "4", "5", "6", "-", "1", "2", "3", "+", "±", "0", ".",
    "=",
];

pub(super) fn mount_calculator_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-calculator-shell">
            <div class="calculator-display" aria-live="polite">"0"</div>
            <div class="calculator-keypad" role="group" aria-label="Calculator keys">
                {CALCULATOR_KEYS
                    .iter()
                    .map(|key| view! { <button type="button" class="calculator-key" disabled=true>{*key}</button> })
                    .collect_view()}
            </div>
            <div class="app-statusbar">
                <span>"Standard"</span>
                <span>"Preview build: keypad inactive"</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_minesweeper_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-minesweeper-shell">
            <div class="app-toolbar">
                <span class="mine-counter">"010"</span>
                <button type="button" class="app-action" disabled=true>"New game"</button>
                <span class="mine-timer">"000"</span>
            </div>
            <div class="minesweeper-board" role="grid" aria-label="Minefield">
                {(0..81)
                    .map(|_| view! { <button type="button" class="mine-cell" disabled=true></button> })
                    .collect_view()}
            </div>
            <div class="app-statusbar"><span>"Beginner 9x9"</span></div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_snake_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-snake-shell">
            <div class="snake-board" aria-label="Snake board">
                <p>"Pixel Snake"</p>
                <p>"Use the arrow keys to steer. Eat to grow; avoid the walls."</p>
            </div>
            <div class="app-statusbar">
                <span>"Score: 0"</span>
                <span>"Paused"</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_media_player_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-media-shell">
            <div class="media-stage">
                <p class="app-unavailable" role="status">
                    "Media playback is unavailable in this build."
                </p>
            </div>
            <div class="app-toolbar media-controls" role="group" aria-label="Playback controls">
                <button type="button" disabled=true>"Previous"</button>
                <button type="button" disabled=true>"Play"</button>
                <button type="button" disabled=true>"Next"</button>
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn FeedbackForm() -> impl IntoView {
    let message = create_rw_signal(String::new());
    let attempted = create_rw_signal(false);

    view! {
        <form
            class="app-shell app-feedback-shell"
            on:submit=move |ev| {
                ev.prevent_default();
                attempted.set(true);
            }
        >
            <label class="settings-row">
                <span>"Message"</span>
                <textarea
                    rows="6"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" disabled=move || message.with(|m| m.trim().is_empty())>
                "Send"
            </button>
            <Show when=move || attempted.get() fallback=|| ()>
                <p class="app-unavailable" role="status">
                    "Sending feedback is unavailable right now. Your message was not sent."
                </p>
            </Show>
        </form>
    }
}

pub(super) fn mount_feedback_app(_: AppMountContext) -> View {
    view! { <FeedbackForm /> }.into_view()
}

const TOUR_STEPS: [(&str, &str); 4] = [
    (
        "Welcome",
        "This desktop is a portfolio. Every window is a small app you can move, resize and minimize.",
    ),
    (
        "Desktop icons",
        "Double-click an icon to open it. Drag icons anywhere; their positions are remembered.",
    ),
    (
        "Taskbar and Start",
        "Open windows appear on the taskbar. The Start button lists every app and Shut down.",
    ),
    (
        "Personalize",
        "Right-click the desktop and choose Personalize to change the wallpaper and glass effects.",
    ),
];

/// Index of the step after `current`, or `None` when `current` is the last step.
fn next_tour_step(current: usize) -> Option<usize> {
    let next = current + 1;
    (next < TOUR_STEPS.len()).then_some(next)
}

#[component]
fn TourPanel(context: AppMountContext) -> impl IntoView {
    let step = create_rw_signal(0usize);
    let window = context.services.window;

    view! {
        <div class="app-shell app-tour-shell">
            <ol class="tour-steps">
                {TOUR_STEPS
                    .iter()
                    .enumerate()
                    .map(|(idx, (title, _))| {
                        view! {
                            <li class=move || if step.get() == idx { "tour-step current" } else { "tour-step" }>
                                {*title}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <p class="tour-body">{move || TOUR_STEPS[step.get()].1}</p>
            <div class="app-toolbar">
                {move || match next_tour_step(step.get()) {
                    Some(next) => view! {
                        <button type="button" on:click=move |_| step.set(next)>"Next"</button>
                    }
                    .into_view(),
                    None => view! {
                        <button type="button" on:click=move |_| window.close()>"Finish"</button>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

pub(super) fn mount_tour_app(context: AppMountContext) -> View {
    view! { <TourPanel context=context /> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_steps_advance_until_the_last() {
        assert_eq!(next_tour_step(0), Some(1));
        assert_eq!(next_tour_step(TOUR_STEPS.len() - 2), Some(TOUR_STEPS.len() - 1));
        assert_eq!(next_tour_step(TOUR_STEPS.len() - 1), None);
    }
}
