//! Static portfolio content served as a read-only virtual filesystem.

use super::{
    path::{normalize_virtual_path, parent_virtual_path},
    types::{CatalogEntry, CatalogEntryKind},
};

/// Virtual path of the catalog root.
pub const CATALOG_ROOT: &str = "/";

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "About Me",
        path: "/about",
        kind: CatalogEntryKind::Document,
        icon: "document",
        summary: "Who I am and what I build.",
        body: &[
            "Software engineer focused on interactive front-ends and the systems behind them.",
            "This site is a small desktop you can poke at: open windows, drag them around, change the wallpaper.",
        ],
        url: None,
        modified: "2024-05-12",
    },
    CatalogEntry {
        name: "Projects",
        path: "/projects",
        kind: CatalogEntryKind::Folder,
        icon: "folder",
        summary: "Selected work.",
        body: &[],
        url: None,
        modified: "2024-05-12",
    },
    CatalogEntry {
        name: "Aero Desktop",
        path: "/projects/aero-desktop",
        kind: CatalogEntryKind::Document,
        icon: "document",
        summary: "This portfolio: a glass-themed desktop shell in the browser.",
        body: &[
            "Window manager with z-ordering, minimize/maximize and drag/resize chrome.",
            "Preferences (wallpaper, taskbar transparency, icon layout) persist locally.",
        ],
        url: None,
        modified: "2024-05-10",
    },
    CatalogEntry {
        name: "Realtime Dashboard",
        path: "/projects/realtime-dashboard",
        kind: CatalogEntryKind::Document,
        icon: "document",
        summary: "Streaming metrics dashboard with live charts.",
        body: &[
            "Websocket fan-out to hundreds of concurrent viewers.",
            "Charts redraw incrementally so the UI stays responsive under load.",
        ],
        url: None,
        modified: "2024-02-03",
    },
    CatalogEntry {
        name: "Experiments",
        path: "/projects/experiments",
        kind: CatalogEntryKind::Folder,
        icon: "folder",
        summary: "Small toys and prototypes.",
        body: &[],
        url: None,
        modified: "2023-11-21",
    },
    CatalogEntry {
        name: "Pixel Snake",
        path: "/projects/experiments/pixel-snake",
        kind: CatalogEntryKind::Document,
        icon: "snake",
        summary: "A snake clone drawn on a tiny canvas.",
        body: &["Also available from the desktop as the Snake application."],
        url: None,
        modified: "2023-11-21",
    },
    CatalogEntry {
        name: "Minesweeper",
        path: "/projects/experiments/minesweeper",
        kind: CatalogEntryKind::Document,
        icon: "minesweeper",
        summary: "The classic, rebuilt for the browser.",
        body: &["Also available from the desktop as the Minesweeper application."],
        url: None,
        modified: "2023-10-02",
    },
    CatalogEntry {
        name: "Resume",
        path: "/resume",
        kind: CatalogEntryKind::Link,
        icon: "pdf",
        summary: "Download my resume (PDF).",
        body: &[],
        url: Some("/files/resume.pdf"),
        modified: "2024-04-30",
    },
    CatalogEntry {
        name: "Contact",
        path: "/contact",
        kind: CatalogEntryKind::Document,
        icon: "mail",
        summary: "How to reach me.",
        body: &[
            "Email is the fastest way to get a reply.",
            "The Feedback application on the desktop also accepts notes.",
        ],
        url: None,
        modified: "2024-05-12",
    },
];

/// Returns the catalog entry at `path`.
///
/// The root itself is not an entry; use [`list_catalog_folder`] for it.
pub fn catalog_entry(path: &str) -> Option<&'static CatalogEntry> {
    let normalized = normalize_virtual_path(path);
    CATALOG.iter().find(|entry| entry.path == normalized)
}

/// Lists the direct children of the folder at `path` in catalog order.
///
/// Returns `None` when `path` is not a folder (missing, or a document/link).
pub fn list_catalog_folder(path: &str) -> Option<Vec<&'static CatalogEntry>> {
    let normalized = normalize_virtual_path(path);
    if normalized != CATALOG_ROOT && !catalog_entry(&normalized)?.is_folder() {
        return None;
    }

    Some(
        CATALOG
            .iter()
            .filter(|entry| parent_virtual_path(entry.path).as_deref() == Some(normalized.as_str()))
            .collect(),
    )
}
