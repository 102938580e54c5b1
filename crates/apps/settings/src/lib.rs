//! Built-in Personalization desktop app: wallpaper, taskbar transparency and glass effects.
//!
//! The app never writes preferences itself. Every change goes through
//! [`desktop_app_contract::AppearanceService`], which forwards an
//! [`desktop_app_contract::AppCommand`] to the desktop runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{
    wallpaper_preset_for_css, wallpaper_presets, AppMountContext, AppServices, WallpaperPreset,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsSection {
    Wallpaper,
    Taskbar,
}

impl SettingsSection {
    fn label(self) -> &'static str {
        match self {
            Self::Wallpaper => "Desktop Background",
            Self::Taskbar => "Window Color",
        }
    }
}

/// Parses the raw value of the transparency slider, clamping into 0-100.
fn parse_transparency(raw: &str) -> Option<u8> {
    let value = raw.trim().parse::<i32>().ok()?;
    Some(value.clamp(0, 100) as u8)
}

/// Label for the preset currently applied, or "Custom" for a non-preset wallpaper.
fn wallpaper_label(css: &str) -> &'static str {
    wallpaper_preset_for_css(css)
        .map(|preset| preset.label)
        .unwrap_or("Custom")
}

/// Mounts the Personalization panel for a runtime window.
pub fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

#[component]
/// Personalization window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let appearance = services.appearance;
    let section = create_rw_signal(SettingsSection::Wallpaper);

    view! {
        <div class="app-shell app-settings-shell">
            <nav class="settings-nav" aria-label="Personalization sections">
                {[SettingsSection::Wallpaper, SettingsSection::Taskbar]
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if section.get() == entry { "settings-tab active" } else { "settings-tab" }
                                }
                                aria-pressed=move || (section.get() == entry).to_string()
                                on:click=move |_| section.set(entry)
                            >
                                {entry.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <section class="settings-body">
                {move || match section.get() {
                    SettingsSection::Wallpaper => view! { <WallpaperPicker services=services /> }.into_view(),
                    SettingsSection::Taskbar => view! { <TaskbarAppearance services=services /> }.into_view(),
                }}
            </section>

            <div class="app-statusbar">
                <span>{move || format!("Background: {}", wallpaper_label(&appearance.wallpaper()))}</span>
                <span>
                    {move || {
                        let current = appearance.current.get();
                        format!(
                            "Transparency: {}%  Aero: {}",
                            current.taskbar_transparency,
                            if current.aero_effects_enabled { "on" } else { "off" },
                        )
                    }}
                </span>
            </div>
        </div>
    }
}

#[component]
fn WallpaperPicker(services: AppServices) -> impl IntoView {
    let appearance = services.appearance;

    view! {
        <div class="wallpaper-grid" role="listbox" aria-label="Wallpaper presets">
            {wallpaper_presets()
                .iter()
                .map(|preset: &'static WallpaperPreset| {
                    let selected = move || appearance.wallpaper() == preset.css;
                    view! {
                        <button
                            type="button"
                            role="option"
                            class=move || if selected() { "wallpaper-tile selected" } else { "wallpaper-tile" }
                            aria-selected=move || selected().to_string()
                            on:click=move |_| appearance.set_wallpaper(preset.css)
                        >
                            <span class="wallpaper-swatch" style=format!("background:{};", preset.css)></span>
                            <span class="wallpaper-label">{preset.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TaskbarAppearance(services: AppServices) -> impl IntoView {
    let appearance = services.appearance;

    view! {
        <div class="settings-form">
            <label class="settings-row">
                <span>"Taskbar transparency"</span>
                <input
                    type="range"
                    min="0"
                    max="100"
                    step="1"
                    prop:value=move || appearance.current.get().taskbar_transparency.to_string()
                    on:input=move |ev| {
                        if let Some(percent) = parse_transparency(&event_target_value(&ev)) {
                            appearance.set_taskbar_transparency(percent);
                        }
                    }
                />
                <span class="settings-value">
                    {move || format!("{}%", appearance.current.get().taskbar_transparency)}
                </span>
            </label>
            <label class="settings-row">
                <input
                    type="checkbox"
                    prop:checked=move || appearance.current.get().aero_effects_enabled
                    on:change=move |ev| appearance.set_aero_effects(event_target_checked(&ev))
                />
                <span>"Enable transparency (Aero glass)"</span>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparency_input_is_parsed_and_clamped() {
        assert_eq!(parse_transparency("42"), Some(42));
        assert_eq!(parse_transparency(" 150 "), Some(100));
        assert_eq!(parse_transparency("-5"), Some(0));
        assert_eq!(parse_transparency("abc"), None);
    }

    #[test]
    fn wallpaper_label_names_presets_and_custom_values() {
        let first = wallpaper_presets()[0];
        assert_eq!(wallpaper_label(first.css), first.label);
        assert_eq!(wallpaper_label("url('/mine.png')"), "Custom");
    }
}
