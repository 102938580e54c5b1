const FALLBACK_VIEWPORT: (i32, i32) = (1024, 768);

/// Browser viewport size in CSS pixels; a fixed 1024x768 off the browser.
pub(crate) fn viewport_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.1);
            return (width, height);
        }
    }

    FALLBACK_VIEWPORT
}
