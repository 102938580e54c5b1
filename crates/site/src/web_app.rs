use desktop_runtime::{use_desktop_runtime, AppId, DesktopAction, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use mobile_shell::MobileShell;
use serde_json::Value;

/// Viewports narrower than this get the phone shell.
const MOBILE_BREAKPOINT_PX: i32 = 768;

fn prefers_mobile(viewport_width: i32) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

fn viewport_width() -> Option<i32> {
    web_sys::window()?
        .inner_width()
        .ok()?
        .as_f64()
        .map(|width| width as i32)
}

/// App named by a `?open=<app-key>` deep link.
fn deep_link_app(open: Option<&str>) -> Option<AppId> {
    open.and_then(|key| AppId::from_key(key.trim()))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let mobile = viewport_width().is_some_and(prefers_mobile);

    view! {
        <Title text="Aero Desktop Portfolio" />
        <Meta name="description" content="A Windows 7 style desktop portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route
                        path=""
                        view=move || {
                            if mobile {
                                view! { <MobileShell /> }.into_view()
                            } else {
                                view! { <DesktopEntry /> }.into_view()
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
            <DeepLinkLauncher />
        </DesktopProvider>
    }
}

#[component]
fn DeepLinkLauncher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();

    if let Some(app) = query.with_untracked(|map| deep_link_app(map.get("open").map(String::as_str))) {
        request_animation_frame(move || {
            runtime.dispatch_action(DesktopAction::LaunchApp {
                app,
                metadata: Value::Null,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_get_the_mobile_shell() {
        assert!(prefers_mobile(375));
        assert!(prefers_mobile(767));
        assert!(!prefers_mobile(768));
        assert!(!prefers_mobile(1440));
    }

    #[test]
    fn deep_links_resolve_known_app_keys_only() {
        assert_eq!(deep_link_app(Some("explorer")), Some(AppId::Explorer));
        assert_eq!(deep_link_app(Some(" media-player ")), Some(AppId::MediaPlayer));
        assert_eq!(deep_link_app(Some("notes:intro")), None);
        assert_eq!(deep_link_app(None), None);
    }
}
