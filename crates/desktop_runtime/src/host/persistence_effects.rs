use leptos::{logging, SignalGetUntracked};

use crate::{host::DesktopHostContext, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_preferences(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let preferences = runtime.state.get_untracked().preferences;
    if let Err(err) = host.preferences().save(&preferences) {
        logging::warn!("persist preferences failed: {err}");
    }
}

pub(super) fn persist_tour_seen(host: &DesktopHostContext) {
    if let Err(err) = host.preferences().save_tour_seen() {
        logging::warn!("persist tour flag failed: {err}");
    }
}
