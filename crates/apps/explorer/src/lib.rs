//! Explorer window contents: browses the static portfolio catalog.
//!
//! The starting folder comes from the window's `metadata.path` (default `/`). Opening a folder
//! from the details pane with "Open in new window" asks the runtime for another explorer window.

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::{
    catalog_entry, list_catalog_folder, normalize_virtual_path, parent_virtual_path, CatalogEntry,
    CatalogEntryKind, CATALOG_ROOT,
};
use serde_json::json;

/// Navigation state for one explorer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerNav {
    current: String,
    history: Vec<String>,
}

impl ExplorerNav {
    /// Starts at `path` when it names a catalog folder, otherwise at the catalog root.
    pub fn starting_at(path: Option<&str>) -> Self {
        let current = path
            .map(normalize_virtual_path)
            .filter(|path| list_catalog_folder(path).is_some())
            .unwrap_or_else(|| CATALOG_ROOT.to_string());
        Self {
            current,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_go_up(&self) -> bool {
        parent_virtual_path(&self.current).is_some()
    }

    /// Enters a folder. Returns `false` for non-folders and the current folder.
    pub fn open_folder(&mut self, path: &str) -> bool {
        let path = normalize_virtual_path(path);
        if path == self.current || list_catalog_folder(&path).is_none() {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path);
        self.history.push(previous);
        true
    }

    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.current = previous;
        true
    }

    pub fn up(&mut self) -> bool {
        let Some(parent) = parent_virtual_path(&self.current) else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, parent);
        self.history.push(previous);
        true
    }

    /// Entries of the current folder.
    pub fn entries(&self) -> Vec<&'static CatalogEntry> {
        list_catalog_folder(&self.current).unwrap_or_default()
    }

    /// Title shown in the address bar and status line.
    pub fn location_label(&self) -> String {
        match catalog_entry(&self.current) {
            Some(entry) => entry.name.to_string(),
            None => "Computer".to_string(),
        }
    }
}

/// Mounts the explorer for a runtime window.
pub fn mount_explorer_app(context: AppMountContext) -> View {
    view! { <ExplorerApp context=context /> }.into_view()
}

#[component]
/// Explorer window contents.
pub fn ExplorerApp(context: AppMountContext) -> impl IntoView {
    let nav = create_rw_signal(ExplorerNav::starting_at(context.metadata_str("path")));
    let selected = create_rw_signal::<Option<&'static CatalogEntry>>(None);
    let window = context.services.window;

    let open_entry = move |entry: &'static CatalogEntry| {
        if entry.is_folder() {
            nav.update(|nav| {
                nav.open_folder(entry.path);
            });
            selected.set(None);
        } else {
            selected.set(Some(entry));
        }
    };

    view! {
        <div class="app-shell app-explorer-shell">
            <div class="app-toolbar explorer-toolbar">
                <button
                    type="button"
                    disabled=move || !nav.with(ExplorerNav::can_go_back)
                    on:click=move |_| {
                        nav.update(|nav| {
                            nav.back();
                        });
                        selected.set(None);
                    }
                >
                    "Back"
                </button>
                <button
                    type="button"
                    disabled=move || !nav.with(ExplorerNav::can_go_up)
                    on:click=move |_| {
                        nav.update(|nav| {
                            nav.up();
                        });
                        selected.set(None);
                    }
                >
                    "Up"
                </button>
                <div class="explorer-address" aria-label="Location">
                    {move || nav.with(|nav| nav.current().to_string())}
                </div>
            </div>

            <div class="explorer-workspace">
                <section class="explorer-pane">
                    <table class="explorer-list" role="grid" aria-label="Folder contents">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Modified"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || nav.with(ExplorerNav::entries)
                                key=|entry| entry.path
                                let:entry
                            >
                                <tr
                                    class=move || {
                                        if selected.get().map(|s| s.path) == Some(entry.path) {
                                            "selected"
                                        } else {
                                            ""
                                        }
                                    }
                                    on:click=move |_| selected.set(Some(entry))
                                    on:dblclick=move |_| open_entry(entry)
                                >
                                    <td>
                                        <img class="explorer-icon" src=format!("/icons/{}.png", entry.icon) alt="" />
                                        {entry.name}
                                    </td>
                                    <td>{entry.kind.label()}</td>
                                    <td>{entry.modified}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </section>

                <aside class="explorer-details" aria-label="Details">
                    {move || match selected.get() {
                        Some(entry) => {
                            let on_open_window = Callback::new(move |path: &'static str| {
                                window.launch_app("explorer", json!({ "path": path }));
                            });
                            view! { <EntryDetails entry=entry on_open_window=on_open_window /> }
                                .into_view()
                        }
                        None => view! {
                            <div class="details-empty">"Select an item to view its details."</div>
                        }.into_view(),
                    }}
                </aside>
            </div>

            <div class="app-statusbar">
                <span>{move || nav.with(|nav| format!("{} item(s)", nav.entries().len()))}</span>
                <span>{move || nav.with(ExplorerNav::location_label)}</span>
            </div>
        </div>
    }
}

#[component]
fn EntryDetails(
    entry: &'static CatalogEntry,
    on_open_window: Callback<&'static str>,
) -> impl IntoView {
    let body = entry
        .body
        .iter()
        .map(|paragraph| view! { <p>{*paragraph}</p> })
        .collect_view();

    let action = match (entry.kind, entry.url) {
        (CatalogEntryKind::Folder, _) => view! {
            <button type="button" on:click=move |_| on_open_window.call(entry.path)>
                "Open in new window"
            </button>
        }
        .into_view(),
        (CatalogEntryKind::Link, Some(url)) => view! {
            <a class="explorer-link" href=url download="">"Download"</a>
        }
        .into_view(),
        _ => ().into_view(),
    };

    view! {
        <div class="details-card">
            <h3>{entry.name}</h3>
            <div class="details-grid">
                <div>"Type"</div><div>{entry.kind.label()}</div>
                <div>"Location"</div><div>{entry.path}</div>
                <div>"Modified"</div><div>{entry.modified}</div>
            </div>
            <p class="details-summary">{entry.summary}</p>
            <div class="details-body">{body}</div>
            {action}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_root_without_metadata_or_for_unknown_paths() {
        assert_eq!(ExplorerNav::starting_at(None).current(), "/");
        assert_eq!(ExplorerNav::starting_at(Some("/nowhere")).current(), "/");
        assert_eq!(ExplorerNav::starting_at(Some("/about")).current(), "/");
    }

    #[test]
    fn starting_path_is_normalized() {
        let nav = ExplorerNav::starting_at(Some("projects//experiments/"));
        assert_eq!(nav.current(), "/projects/experiments");
        assert!(nav.can_go_up());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn back_returns_through_visited_folders() {
        let mut nav = ExplorerNav::starting_at(None);
        assert!(nav.open_folder("/projects"));
        assert!(nav.open_folder("/projects/experiments"));
        assert!(nav.back());
        assert_eq!(nav.current(), "/projects");
        assert!(nav.back());
        assert_eq!(nav.current(), "/");
        assert!(!nav.back());
    }

    #[test]
    fn documents_and_repeat_opens_do_not_navigate() {
        let mut nav = ExplorerNav::starting_at(None);
        assert!(!nav.open_folder("/about"));
        assert!(!nav.open_folder("/"));
        assert_eq!(nav.current(), "/");
        assert!(!nav.can_go_back());
    }

    #[test]
    fn up_walks_to_root_and_stops() {
        let mut nav = ExplorerNav::starting_at(Some("/projects/experiments"));
        assert!(nav.up());
        assert_eq!(nav.current(), "/projects");
        assert!(nav.up());
        assert_eq!(nav.current(), "/");
        assert!(!nav.up());
        assert!(nav.back());
        assert_eq!(nav.current(), "/projects");
    }

    #[test]
    fn entries_and_labels_follow_current_folder() {
        let mut nav = ExplorerNav::starting_at(None);
        assert_eq!(nav.location_label(), "Computer");
        let names: Vec<&str> = nav.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["About Me", "Projects", "Resume", "Contact"]);

        nav.open_folder("/projects");
        assert_eq!(nav.location_label(), "Projects");
        assert!(nav.entries().iter().all(|e| e.path.starts_with("/projects/")));
    }
}
