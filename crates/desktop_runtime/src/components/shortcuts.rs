//! Desktop-global keyboard shortcuts.

/// Key plus modifier state of one keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub repeat: bool,
}

impl<'a> KeyChord<'a> {
    pub(super) fn from_event(ev: &web_sys::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            repeat: ev.repeat(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellShortcut {
    ToggleStartMenu,
    CloseMenus,
    /// Zero-based taskbar entry.
    ActivateTaskbarSlot(usize),
    MinimizeActive,
    CloseActive,
}

fn digit_slot(key: &str) -> Option<usize> {
    match key.as_bytes() {
        [digit @ b'1'..=b'9'] => Some(usize::from(digit - b'1')),
        _ => None,
    }
}

pub(super) fn resolve_shortcut(chord: KeyChord<'_>) -> Option<ShellShortcut> {
    if chord.key == "Escape" {
        if chord.ctrl && !chord.alt && !chord.meta {
            return Some(ShellShortcut::ToggleStartMenu);
        }
        return Some(ShellShortcut::CloseMenus);
    }

    if matches!(chord.key, "Meta" | "OS") {
        return (!chord.repeat && !chord.ctrl && !chord.alt)
            .then_some(ShellShortcut::ToggleStartMenu);
    }

    if !chord.alt || chord.ctrl || chord.meta {
        return None;
    }

    if let Some(slot) = digit_slot(chord.key) {
        return Some(ShellShortcut::ActivateTaskbarSlot(slot));
    }
    match chord.key {
        "m" | "M" => Some(ShellShortcut::MinimizeActive),
        "w" | "W" => Some(ShellShortcut::CloseActive),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn alt(key: &str) -> KeyChord<'_> {
        KeyChord {
            key,
            alt: true,
            ..KeyChord::default()
        }
    }

    #[test]
    fn escape_variants() {
        let ctrl_escape = KeyChord {
            key: "Escape",
            ctrl: true,
            ..KeyChord::default()
        };
        assert_eq!(
            resolve_shortcut(ctrl_escape),
            Some(ShellShortcut::ToggleStartMenu)
        );
        assert_eq!(
            resolve_shortcut(KeyChord {
                key: "Escape",
                ..KeyChord::default()
            }),
            Some(ShellShortcut::CloseMenus)
        );
    }

    #[test]
    fn meta_key_toggles_start_menu_once() {
        let meta = KeyChord {
            key: "Meta",
            meta: true,
            ..KeyChord::default()
        };
        assert_eq!(resolve_shortcut(meta), Some(ShellShortcut::ToggleStartMenu));
        assert_eq!(
            resolve_shortcut(KeyChord {
                repeat: true,
                ..meta
            }),
            None
        );
    }

    #[test]
    fn alt_digits_map_to_taskbar_slots() {
        assert_eq!(
            resolve_shortcut(alt("1")),
            Some(ShellShortcut::ActivateTaskbarSlot(0))
        );
        assert_eq!(
            resolve_shortcut(alt("9")),
            Some(ShellShortcut::ActivateTaskbarSlot(8))
        );
        assert_eq!(resolve_shortcut(alt("0")), None);
        assert_eq!(resolve_shortcut(alt("10")), None);
    }

    #[test]
    fn alt_letters_target_the_active_window() {
        assert_eq!(resolve_shortcut(alt("m")), Some(ShellShortcut::MinimizeActive));
        assert_eq!(resolve_shortcut(alt("W")), Some(ShellShortcut::CloseActive));
        assert_eq!(resolve_shortcut(alt("x")), None);
    }

    #[test]
    fn extra_modifiers_or_plain_keys_are_ignored() {
        let ctrl_alt = KeyChord {
            ctrl: true,
            ..alt("m")
        };
        assert_eq!(resolve_shortcut(ctrl_alt), None);
        assert_eq!(
            resolve_shortcut(KeyChord {
                key: "m",
                ..KeyChord::default()
            }),
            None
        );
    }
}
