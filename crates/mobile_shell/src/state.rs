//! Phone screen state machine.

use platform_host::{catalog_entry, list_catalog_folder, CatalogEntry};

/// Upward travel, in CSS pixels, that counts as an unlock swipe.
pub const UNLOCK_SWIPE_PX: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Content apps on the home screen grid.
pub enum MobileApp {
    About,
    Projects,
    Contact,
}

impl MobileApp {
    pub const ALL: [Self; 3] = [Self::About, Self::Projects, Self::Contact];

    /// Catalog path the app renders.
    pub const fn catalog_path(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn entry(self) -> Option<&'static CatalogEntry> {
        catalog_entry(self.catalog_path())
    }

    /// Child entries for folder apps; empty for documents.
    pub fn children(self) -> Vec<&'static CatalogEntry> {
        list_catalog_folder(self.catalog_path()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileScreen {
    #[default]
    Locked,
    Home,
    App(MobileApp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileEvent {
    Unlock,
    Open(MobileApp),
    Home,
    Lock,
}

impl MobileScreen {
    /// Next screen for `event`. Events that do not apply to the current screen leave it unchanged.
    pub fn next(self, event: MobileEvent) -> Self {
        match (self, event) {
            (_, MobileEvent::Lock) => Self::Locked,
            (Self::Locked, MobileEvent::Unlock) => Self::Home,
            (Self::Home, MobileEvent::Open(app)) => Self::App(app),
            (Self::App(_), MobileEvent::Home) => Self::Home,
            (screen, _) => screen,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Self::Locked
    }
}

/// Whether a pointer that went down at `start_y` and came up at `end_y` swiped up far enough.
pub fn is_unlock_swipe(start_y: i32, end_y: i32) -> bool {
    start_y - end_y >= UNLOCK_SWIPE_PX
}
