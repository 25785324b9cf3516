//! Lesson content resolution.
//!
//! Everything the web layer knows about the lesson tree goes through
//! [`ContentResolver`]:
//! - **Listing**: folders and `.txt` lessons of one directory
//! - **Reading**: a lesson file split on the `--korean--` marker
//! - **Navigation**: previous/next lesson within the same directory
//!
//! # Paths
//!
//! Relative paths come straight from request URLs and are untrusted. They are
//! normalized to `/`-joined components and confined to the configured root
//! before any filesystem access. Every relative path the resolver hands back
//! (entry paths, previous/next) can be passed to it again unchanged.

pub mod breadcrumbs;
pub mod error;
pub mod lesson;
pub mod resolver;

pub use breadcrumbs::{build_breadcrumbs, Breadcrumb};
pub use error::{LogOnError, ResolveError};
pub use lesson::{lesson_title, split_lesson, LessonContent, SENTINEL, TEXT_EXTENSION};
pub use resolver::{normalize_relative, ContentResolver, NavigationContext};

/// Kind of an entry in a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    // Declaration order is the listing order: folders before files.
    Folder,
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Folder name, or file name without `.txt`
    pub name: String,
    pub kind: EntryKind,
    /// Path relative to the content root, `/`-separated
    pub relative_path: String,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Join a directory's relative path with a child name.
///
/// The root is the empty string, so its children get no prefix.
pub(crate) fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Drop the last component of a normalized relative path (`""` for the root).
pub(crate) fn parent_of(relative: &str) -> &str {
    relative.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}
