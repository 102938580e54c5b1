//! Catalog entry types shared by the explorer app and the mobile home screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a catalog entry.
pub enum CatalogEntryKind {
    /// Folder that lists child entries.
    Folder,
    /// Text document rendered in place.
    Document,
    /// External link (resume download, profile pages).
    Link,
}

impl CatalogEntryKind {
    /// Human-readable type column label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Folder => "File folder",
            Self::Document => "Document",
            Self::Link => "Shortcut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One node of the static portfolio catalog.
pub struct CatalogEntry {
    /// Display name.
    pub name: &'static str,
    /// Full normalized virtual path.
    pub path: &'static str,
    /// Entry kind.
    pub kind: CatalogEntryKind,
    /// Icon asset id.
    pub icon: &'static str,
    /// One-line summary shown in list/detail panes.
    pub summary: &'static str,
    /// Paragraphs rendered for documents.
    pub body: &'static [&'static str],
    /// Target URL for links.
    pub url: Option<&'static str>,
    /// Last-modified date label.
    pub modified: &'static str,
}

impl CatalogEntry {
    /// Returns `true` for folders.
    pub fn is_folder(&self) -> bool {
        self.kind == CatalogEntryKind::Folder
    }
}
