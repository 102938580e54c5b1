//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and host
//! bootstrap. UI composition stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::{AppCommand, AppServices, ShellAppearance};
use leptos::*;
use platform_host::PrefsStore;

use crate::{
    chrome::WorkArea,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Current window work area, refreshed when the browser viewport resizes.
    pub work_area: RwSignal<WorkArea>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Appearance preferences projected for applications.
    pub fn appearance(&self) -> Signal<ShellAppearance> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|desktop| ShellAppearance {
                wallpaper: desktop.preferences.wallpaper.clone(),
                taskbar_transparency: desktop.preferences.taskbar_transparency,
                aero_effects_enabled: desktop.preferences.aero_effects_enabled,
            })
        })
    }

    /// Service bundle for the application mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let runtime = *self;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(DesktopAction::HandleAppCommand {
                window_id: window_id.clone(),
                command,
            });
        });
        AppServices::new(sender, self.appearance())
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Preference backend; defaults to the build's selected browser adapter.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    children: Children,
) -> impl IntoView {
    let host_context = match prefs {
        Some(prefs) => DesktopHostContext::new(prefs),
        None => DesktopHostContext::default(),
    };
    let state = create_rw_signal(host_context.boot_state());
    let host = store_value(host_context);
    let interaction = create_rw_signal(InteractionState::default());
    let work_area = create_rw_signal(host.with_value(DesktopHostContext::work_area));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        work_area,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    logging::log!(
        "desktop runtime booted (host strategy: {})",
        host.with_value(DesktopHostContext::host_strategy_name)
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
