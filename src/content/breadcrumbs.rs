//! Breadcrumb trail for the directory listing page.

/// One segment of the trail from the root to the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    /// Cumulative relative path up to and including this segment
    pub path: String,
}

/// Build the breadcrumb trail and parent path for a relative directory path.
///
/// The parent is `None` at the root and `Some("")` one level below it,
/// where the empty string stands for the root itself.
pub fn build_breadcrumbs(relative: &str) -> (Vec<Breadcrumb>, Option<String>) {
    let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();

    let breadcrumbs = segments
        .iter()
        .enumerate()
        .map(|(i, name)| Breadcrumb {
            name: name.to_string(),
            path: segments[..=i].join("/"),
        })
        .collect();

    let parent = segments.split_last().map(|(_, rest)| rest.join("/"));

    (breadcrumbs, parent)
}
