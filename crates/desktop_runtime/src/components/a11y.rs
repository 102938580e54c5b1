//! DOM focus and menu-keyboard helpers for the start menu and desktop context menu.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Focuses an element by id and reports whether it was found.
pub(super) fn focus_element_by_id(id: &str) -> bool {
    match html_element_by_id(id) {
        Some(element) => {
            let _ = element.focus();
            true
        }
        None => false,
    }
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = html_element_by_id(menu_id) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| item.get_attribute("disabled").is_none())
        .collect()
}

/// Focuses the first enabled menu item inside a menu container.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    match menu_items(menu_id).first() {
        Some(first) => {
            let _ = first.focus();
            true
        }
        None => false,
    }
}

fn focus_menu_item(menu_id: &str, step: impl FnOnce(usize, usize) -> usize) -> bool {
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }
    let active_id = document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id)
        .unwrap_or(0);
    let _ = items[step(current, items.len())].focus();
    true
}

/// Handles arrow/home/end menu navigation and prevents default when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let handled = match ev.key().as_str() {
        "ArrowDown" => focus_menu_item(menu_id, |current, len| (current + 1) % len),
        "ArrowUp" => focus_menu_item(menu_id, |current, len| (current + len - 1) % len),
        "Home" => focus_menu_item(menu_id, |_, _| 0),
        "End" => focus_menu_item(menu_id, |_, len| len - 1),
        _ => false,
    };

    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}
