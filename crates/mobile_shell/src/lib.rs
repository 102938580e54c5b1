//! Phone-style portfolio shell used on narrow viewports.
//!
//! A lock screen with a clock, a home grid of content apps and a full-screen app view. State is
//! local to the component tree; nothing here touches the desktop registry or preferences.

mod state;

use std::time::Duration;

use leptos::*;
use platform_host::{local_clock_now, CatalogEntry, ClockReading};

pub use state::{is_unlock_swipe, MobileApp, MobileEvent, MobileScreen, UNLOCK_SWIPE_PX};

#[component]
/// Root of the mobile experience.
pub fn MobileShell() -> impl IntoView {
    let screen = create_rw_signal(MobileScreen::default());
    let clock = create_rw_signal(local_clock_now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(local_clock_now()), Duration::from_secs(15))
    {
        on_cleanup(move || interval.clear());
    }

    let send = Callback::new(move |event: MobileEvent| screen.update(|s| *s = s.next(event)));

    view! {
        <div class="mobile-shell">
            <StatusBar clock=clock screen=screen send=send />
            {move || match screen.get() {
                MobileScreen::Locked => view! { <LockScreen clock=clock send=send /> }.into_view(),
                MobileScreen::Home => view! { <HomeScreen send=send /> }.into_view(),
                MobileScreen::App(app) => view! { <AppScreen app=app send=send /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn StatusBar(
    clock: RwSignal<ClockReading>,
    screen: RwSignal<MobileScreen>,
    send: Callback<MobileEvent>,
) -> impl IntoView {
    view! {
        <header class="mobile-status-bar">
            <span>{move || clock.with(ClockReading::time_12h)}</span>
            <Show when=move || !screen.get().is_locked() fallback=|| ()>
                <button
                    type="button"
                    class="mobile-lock-button"
                    aria-label="Lock"
                    on:click=move |_| send.call(MobileEvent::Lock)
                >
                    "Lock"
                </button>
            </Show>
        </header>
    }
}

#[component]
fn LockScreen(clock: RwSignal<ClockReading>, send: Callback<MobileEvent>) -> impl IntoView {
    let swipe_start = create_rw_signal(None::<i32>);

    view! {
        <section
            class="mobile-lock-screen"
            on:pointerdown=move |ev: web_sys::PointerEvent| swipe_start.set(Some(ev.client_y()))
            on:pointercancel=move |_| swipe_start.set(None)
            on:pointerup=move |ev: web_sys::PointerEvent| {
                if let Some(start) = swipe_start.get_untracked() {
                    swipe_start.set(None);
                    if is_unlock_swipe(start, ev.client_y()) {
                        send.call(MobileEvent::Unlock);
                    }
                }
            }
        >
            <div class="mobile-lock-clock">
                <span class="mobile-lock-time">{move || clock.with(ClockReading::time_12h)}</span>
                <span class="mobile-lock-date">{move || clock.with(ClockReading::long_date)}</span>
            </div>
            <button
                type="button"
                class="mobile-unlock"
                on:click=move |_| send.call(MobileEvent::Unlock)
            >
                "Swipe up or tap to unlock"
            </button>
        </section>
    }
}

#[component]
fn HomeScreen(send: Callback<MobileEvent>) -> impl IntoView {
    view! {
        <nav class="mobile-home-grid" aria-label="Apps">
            {MobileApp::ALL
                .into_iter()
                .map(|app| {
                    let icon = app.entry().map(|entry| entry.icon).unwrap_or("document");
                    view! {
                        <button
                            type="button"
                            class="mobile-app-tile"
                            on:click=move |_| send.call(MobileEvent::Open(app))
                        >
                            <img src=format!("/icons/{icon}.png") alt="" />
                            <span>{app.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn AppScreen(app: MobileApp, send: Callback<MobileEvent>) -> impl IntoView {
    let body = match app.entry() {
        Some(entry) if entry.is_folder() => app
            .children()
            .into_iter()
            .map(|child| view! { <EntryCard entry=child /> })
            .collect_view(),
        Some(entry) => view! { <EntryCard entry=entry /> }.into_view(),
        None => view! { <p class="app-unavailable">"Nothing here yet."</p> }.into_view(),
    };

    view! {
        <section class="mobile-app" aria-label=app.label()>
            <header class="mobile-app-header">
                <button type="button" on:click=move |_| send.call(MobileEvent::Home)>"Home"</button>
                <h1>{app.label()}</h1>
            </header>
            <div class="mobile-app-body">{body}</div>
        </section>
    }
}

#[component]
fn EntryCard(entry: &'static CatalogEntry) -> impl IntoView {
    view! {
        <article class="mobile-card">
            <h2>{entry.name}</h2>
            <p class="mobile-card-summary">{entry.summary}</p>
            {entry.body.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
            {entry.url.map(|url| view! { <a href=url target="_blank" rel="noopener">"Open"</a> })}
        </article>
    }
}
