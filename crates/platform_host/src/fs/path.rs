//! Virtual-path helpers for the portfolio catalog.

/// Normalizes a virtual catalog path using Explorer address-bar semantics.
///
/// Trims whitespace, converts backslashes to `/`, resolves `.`/`..`, ensures a
/// leading slash, and returns `/` for empty or fully-collapsed paths.
pub fn normalize_virtual_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let mut segments: Vec<&str> = Vec::new();
    let unified = trimmed.replace('\\', "/");
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Returns the normalized parent of `path`, or `None` for the root.
pub fn parent_virtual_path(path: &str) -> Option<String> {
    let normalized = normalize_virtual_path(path);
    if normalized == "/" {
        return None;
    }
    match normalized.rfind('/') {
        Some(0) | None => Some("/".to_string()),
        Some(idx) => Some(normalized[..idx].to_string()),
    }
}
