//! Window registry: the authoritative list of open windows, their stacking and focus.

use crate::model::{OpenWindowRequest, Position, Size, WindowId, WindowRecord};

/// Open windows plus a monotonically increasing stacking counter.
///
/// Every focus-raising operation takes the next counter value, so `z_order` values are never
/// reused within a session and at most one window is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    z_counter: u64,
}

impl WindowRegistry {
    /// Windows in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_active)
    }

    /// Windows sorted by ascending `z_order` (back to front).
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_order);
        ordered
    }

    /// Position of a window in [`Self::paint_order`], bottom first.
    pub fn stack_layer(&self, window_id: &WindowId) -> Option<usize> {
        self.paint_order().iter().position(|w| &w.id == window_id)
    }

    /// Highest non-minimized window, if any.
    pub fn top_visible_window(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_order)
    }

    /// Current stacking counter; the largest `z_order` ever handed out.
    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    /// Opens a window or re-activates an existing one with the same id.
    ///
    /// Reopening keeps the stored title, geometry and metadata; only the minimized flag, the
    /// active flag and the stacking position change.
    pub fn open(&mut self, request: OpenWindowRequest) {
        if let Some(index) = self.index_of(&request.id) {
            self.windows[index].is_minimized = false;
            self.activate(index);
            return;
        }

        self.windows.push(WindowRecord {
            id: request.id,
            title: request.title,
            icon: request.icon,
            app: request.app,
            position: request.position,
            size: request.size,
            is_minimized: false,
            is_maximized: request.is_maximized,
            is_active: false,
            z_order: 0,
            disable_maximize: request.disable_maximize,
            metadata: request.metadata,
        });
        self.activate(self.windows.len() - 1);
    }

    /// Removes a window. No other window is activated in its place.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        before != self.windows.len()
    }

    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.is_minimized = true;
        window.is_active = false;
        true
    }

    /// Un-minimizes, activates and raises a window.
    pub fn restore(&mut self, window_id: &WindowId) -> bool {
        let Some(index) = self.index_of(window_id) else {
            return false;
        };
        self.windows[index].is_minimized = false;
        self.activate(index);
        true
    }

    /// Flips the maximized flag. Focus, stacking and stored geometry are untouched.
    ///
    /// Windows opened with `disable_maximize` are left untouched.
    pub fn toggle_maximize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.disable_maximize {
            return false;
        }
        window.is_maximized = !window.is_maximized;
        true
    }

    /// Activates and raises a window. The minimized flag is not cleared.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        let Some(index) = self.index_of(window_id) else {
            return false;
        };
        self.activate(index);
        true
    }

    pub fn move_to(&mut self, window_id: &WindowId, position: Position) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.position = position;
        true
    }

    pub fn resize(&mut self, window_id: &WindowId, size: Size) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.size = size;
        true
    }

    fn index_of(&self, window_id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == window_id)
    }

    fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    fn activate(&mut self, index: usize) {
        self.z_counter += 1;
        for window in &mut self.windows {
            window.is_active = false;
        }
        let window = &mut self.windows[index];
        window.is_active = true;
        window.z_order = self.z_counter;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::AppId;

    fn request(id: &str) -> OpenWindowRequest {
        OpenWindowRequest::new(
            id,
            AppId::Calculator,
            format!("Window {id}"),
            Position::new(40, 40),
            Size::new(640, 480),
        )
    }

    fn registry_with(ids: &[&str]) -> WindowRegistry {
        let mut registry = WindowRegistry::default();
        for id in ids {
            registry.open(request(id));
        }
        registry
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn active_ids(registry: &WindowRegistry) -> Vec<&str> {
        registry
            .windows()
            .iter()
            .filter(|w| w.is_active)
            .map(|w| w.id.as_str())
            .collect()
    }

    #[test]
    fn opening_windows_stacks_them_with_increasing_z_order() {
        let registry = registry_with(&["a", "b"]);

        let a = registry.get(&id("a")).expect("a");
        let b = registry.get(&id("b")).expect("b");
        assert_eq!((a.z_order, b.z_order), (1, 2));
        assert!(!a.is_active);
        assert!(b.is_active);
        assert_eq!(active_ids(&registry), vec!["b"]);
    }

    #[test]
    fn reopening_an_existing_id_reactivates_without_duplicating() {
        let mut registry = registry_with(&["a", "b"]);
        let mut again = request("a");
        again.title = "Changed".to_string();
        again.position = Position::new(500, 500);
        registry.open(again);

        assert_eq!(registry.windows().len(), 2);
        let a = registry.get(&id("a")).expect("a");
        assert_eq!(a.z_order, 3);
        assert!(a.is_active);
        assert_eq!(a.title, "Window a");
        assert_eq!(a.position, Position::new(40, 40));
    }

    #[test]
    fn reopening_a_minimized_window_restores_it() {
        let mut registry = registry_with(&["a"]);
        registry.minimize(&id("a"));
        registry.open(request("a"));

        let a = registry.get(&id("a")).expect("a");
        assert!(!a.is_minimized);
        assert!(a.is_active);
    }

    #[test]
    fn minimize_then_restore_raises_above_everything() {
        let mut registry = registry_with(&["a", "b"]);
        registry.move_to(&id("a"), Position::new(210, 75));
        registry.resize(&id("a"), Size::new(720, 410));
        registry.minimize(&id("a"));
        let a = registry.get(&id("a")).expect("a");
        assert!(a.is_minimized);
        assert!(!a.is_active);

        registry.restore(&id("a"));
        let a = registry.get(&id("a")).expect("a");
        assert!(!a.is_minimized);
        assert!(a.is_active);
        assert_eq!(a.z_order, 3);
        assert_eq!(a.position, Position::new(210, 75));
        assert_eq!(a.size, Size::new(720, 410));
        assert_eq!(active_ids(&registry), vec!["a"]);
    }

    #[test]
    fn toggle_maximize_only_flips_the_flag() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(registry.toggle_maximize(&id("a")));

        let a = registry.get(&id("a")).expect("a");
        assert!(a.is_maximized);
        assert!(!a.is_active);
        assert_eq!(a.z_order, 1);
        assert_eq!(active_ids(&registry), vec!["b"]);
        assert_eq!(registry.z_counter(), 2);

        registry.toggle_maximize(&id("a"));
        assert!(!registry.get(&id("a")).expect("a").is_maximized);
        assert_eq!(registry.z_counter(), 2);
    }

    #[test]
    fn toggle_maximize_respects_disable_maximize() {
        let mut registry = WindowRegistry::default();
        let mut fixed = request("fixed");
        fixed.disable_maximize = true;
        registry.open(fixed);

        assert!(!registry.toggle_maximize(&id("fixed")));
        let fixed = registry.get(&id("fixed")).expect("fixed");
        assert!(!fixed.is_maximized);
        assert_eq!(fixed.z_order, 1);
    }

    #[test]
    fn close_removes_without_refocusing_another_window() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(registry.close(&id("b")));

        assert_eq!(registry.windows().len(), 1);
        assert!(active_ids(&registry).is_empty());
        assert_eq!(registry.active_window(), None);
    }

    #[test]
    fn z_values_are_never_reused_after_close() {
        let mut registry = registry_with(&["a", "b"]);
        registry.close(&id("b"));
        registry.open(request("c"));

        assert_eq!(registry.get(&id("c")).expect("c").z_order, 3);
        assert_eq!(registry.z_counter(), 3);
    }

    #[test]
    fn operations_on_unknown_ids_are_no_ops() {
        let mut registry = registry_with(&["a"]);
        let before = registry.clone();
        let ghost = id("ghost");

        assert!(!registry.close(&ghost));
        assert!(!registry.minimize(&ghost));
        assert!(!registry.restore(&ghost));
        assert!(!registry.toggle_maximize(&ghost));
        assert!(!registry.focus(&ghost));
        assert!(!registry.move_to(&ghost, Position::new(1, 1)));
        assert!(!registry.resize(&ghost, Size::new(500, 500)));
        assert_eq!(registry, before);
    }

    #[test]
    fn focus_raises_without_clearing_minimized() {
        let mut registry = registry_with(&["a", "b"]);
        registry.minimize(&id("a"));
        registry.focus(&id("a"));

        let a = registry.get(&id("a")).expect("a");
        assert!(a.is_active);
        assert!(a.is_minimized);
        assert_eq!(a.z_order, 3);
    }

    #[test]
    fn move_and_resize_replace_geometry_without_touching_stacking() {
        let mut registry = registry_with(&["a", "b"]);
        registry.move_to(&id("a"), Position::new(-30, 12));
        registry.resize(&id("a"), Size::new(800, 600));

        let a = registry.get(&id("a")).expect("a");
        assert_eq!(a.position, Position::new(-30, 12));
        assert_eq!(a.size, Size::new(800, 600));
        assert_eq!(a.z_order, 1);
        assert!(!a.is_active);
    }

    #[test]
    fn paint_order_and_top_visible_follow_z_order() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry.focus(&id("a"));
        registry.minimize(&id("a"));

        let order: Vec<&str> = registry.paint_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(
            registry.top_visible_window().map(|w| w.id.as_str()),
            Some("c")
        );
    }

    #[test]
    fn stack_layer_stays_bounded_by_window_count() {
        let mut registry = registry_with(&["a", "b", "c"]);
        for _ in 0..50 {
            registry.focus(&id("a"));
            registry.focus(&id("b"));
        }

        assert!(registry.z_counter() > 100);
        assert_eq!(registry.stack_layer(&id("c")), Some(0));
        assert_eq!(registry.stack_layer(&id("a")), Some(1));
        assert_eq!(registry.stack_layer(&id("b")), Some(2));
        assert_eq!(registry.stack_layer(&id("ghost")), None);
    }

    #[test]
    fn open_keeps_request_metadata_and_maximized_flag() {
        let mut registry = WindowRegistry::default();
        let mut req = request("explorer").with_metadata(json!({ "path": "/projects" }));
        req.is_maximized = true;
        req.is_minimized = true;
        registry.open(req);

        let window = registry.get(&id("explorer")).expect("explorer");
        assert_eq!(window.metadata, json!({ "path": "/projects" }));
        assert!(window.is_maximized);
        assert!(!window.is_minimized);
    }

    #[test]
    fn double_maximize_restores_flag_and_keeps_stored_geometry() {
        let mut registry = registry_with(&["a"]);
        registry.move_to(&id("a"), Position::new(-15, 48));
        registry.resize(&id("a"), Size::new(512, 384));
        let before = registry.get(&id("a")).cloned().expect("a");

        registry.toggle_maximize(&id("a"));
        let maximized = registry.get(&id("a")).expect("a");
        assert!(maximized.is_maximized);
        assert_eq!(maximized.position, before.position);
        assert_eq!(maximized.size, before.size);

        registry.toggle_maximize(&id("a"));
        assert_eq!(registry.get(&id("a")), Some(&before));
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Open(&'static str),
        Close(&'static str),
        Focus(&'static str),
        Minimize(&'static str),
        Restore(&'static str),
        Maximize(&'static str),
        Move(&'static str),
    }

    fn apply(registry: &mut WindowRegistry, step: Step) {
        match step {
            Step::Open(raw) => registry.open(request(raw)),
            Step::Close(raw) => {
                registry.close(&id(raw));
            }
            Step::Focus(raw) => {
                registry.focus(&id(raw));
            }
            Step::Minimize(raw) => {
                registry.minimize(&id(raw));
            }
            Step::Restore(raw) => {
                registry.restore(&id(raw));
            }
            Step::Maximize(raw) => {
                registry.toggle_maximize(&id(raw));
            }
            Step::Move(raw) => {
                registry.move_to(&id(raw), Position::new(90, 90));
            }
        }
    }

    #[test]
    fn focus_and_stacking_invariants_hold_across_mixed_operations() {
        let script = [
            Step::Open("a"),
            Step::Open("b"),
            Step::Open("c"),
            Step::Focus("a"),
            Step::Minimize("a"),
            Step::Maximize("b"),
            Step::Restore("a"),
            Step::Close("c"),
            Step::Move("b"),
            Step::Open("c"),
            Step::Minimize("c"),
            Step::Focus("b"),
            Step::Open("a"),
            Step::Close("a"),
            Step::Restore("ghost"),
            Step::Focus("c"),
            Step::Maximize("c"),
            Step::Minimize("b"),
        ];

        let mut registry = WindowRegistry::default();
        for step in script {
            let counter_before = registry.z_counter();
            apply(&mut registry, step);

            let active = active_ids(&registry);
            assert!(active.len() <= 1, "{step:?} left {active:?} active");

            let raised = match step {
                Step::Open(raw) | Step::Focus(raw) | Step::Restore(raw) => {
                    registry.get(&id(raw))
                }
                _ => None,
            };
            match raised {
                Some(window) => {
                    assert_eq!(active, vec![window.id.as_str()], "{step:?}");
                    assert!(window.z_order > counter_before, "{step:?}");
                    assert_eq!(window.z_order, registry.z_counter(), "{step:?}");
                    assert!(registry
                        .windows()
                        .iter()
                        .filter(|w| w.id != window.id)
                        .all(|w| w.z_order < window.z_order));
                }
                None => assert_eq!(registry.z_counter(), counter_before, "{step:?}"),
            }
        }
    }
}
