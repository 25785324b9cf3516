//! Root-confined listing, reading and sibling navigation over the lesson tree.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::error::{LogOnError, ResolveError};
use super::lesson::{is_lesson_file, lesson_title, split_lesson, LessonContent};
use super::{join_relative, parent_of, Entry, EntryKind};

/// Previous/next lessons around a file, plus its directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    pub previous_path: Option<String>,
    pub next_path: Option<String>,
    /// Containing directory; empty string for the root
    pub parent_path: String,
}

/// A request path that passed normalization and root confinement.
struct Resolved {
    /// Normalized relative path (`/`-joined, no `.` or empty components)
    relative: String,
    /// Canonical absolute path, inside the root
    path: PathBuf,
}

/// Resolves untrusted relative paths against a fixed lesson root.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
}

impl ContentResolver {
    /// Create a resolver for `root`, which must be an existing directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let root = root.as_ref();
        let canonical = root
            .canonicalize()
            .map_err(|_| ResolveError::NotFound(root.display().to_string()))?;
        if !canonical.is_dir() {
            return Err(ResolveError::NotFound(root.display().to_string()));
        }
        Ok(Self { root: canonical })
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List folders and lessons of a directory, folders first, each group by raw name.
    pub fn list_directory(&self, relative: &str) -> Result<Vec<Entry>, ResolveError> {
        let target = self.resolve(relative)?;
        if !target.path.is_dir() {
            return Err(ResolveError::NotFound(target.relative));
        }

        let mut entries = Vec::new();
        let read_dir = fs::read_dir(&target.path).map_err(|e| read_error(&target.relative, e))?;
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| read_error(&target.relative, e))?;
            let Ok(name) = dir_entry.file_name().into_string() else {
                continue;
            };
            // Symlinks leading out of the root would list but never resolve.
            let Some(path) = self.confine(&dir_entry.path()) else {
                continue;
            };

            let kind = if path.is_dir() {
                EntryKind::Folder
            } else if path.is_file() && is_lesson_file(&name) {
                EntryKind::File
            } else {
                continue;
            };

            entries.push(Entry {
                name: match kind {
                    EntryKind::Folder => name.clone(),
                    EntryKind::File => lesson_title(&name).to_string(),
                },
                kind,
                relative_path: join_relative(&target.relative, &name),
            });
        }

        // Siblings share the directory prefix, so this orders by raw file name.
        entries.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.relative_path.cmp(&b.relative_path))
        });
        Ok(entries)
    }

    /// Read a lesson file and split it into source text and translation.
    pub fn read_content(&self, relative: &str) -> Result<LessonContent, ResolveError> {
        let target = self.resolve(relative)?;
        if !target.path.is_file() {
            return Err(ResolveError::NotFound(target.relative));
        }

        let text = fs::read_to_string(&target.path).map_err(|e| read_error(&target.relative, e))?;
        let (primary_text, secondary_text) = split_lesson(&text);

        Ok(LessonContent {
            title: lesson_title(file_name(&target.relative)).to_string(),
            primary_text,
            secondary_text,
        })
    }

    /// Previous/next lesson in the same directory.
    ///
    /// Best-effort: any failure leaves both links empty instead of erroring.
    pub fn find_navigation(&self, relative: &str) -> NavigationContext {
        let normalized = normalize_relative(relative).log_warn("Navigation path rejected");
        let Some(normalized) = normalized else {
            return NavigationContext::default();
        };
        let parent = parent_of(&normalized).to_string();
        let current = file_name(&normalized);

        let siblings = self
            .lesson_files(&parent)
            .log_warn_default("Failed to list lessons for navigation");

        let Some(index) = siblings.iter().position(|name| name == current) else {
            tracing::debug!("Lesson {} not found among its siblings", normalized);
            return NavigationContext {
                parent_path: parent,
                ..Default::default()
            };
        };

        NavigationContext {
            previous_path: index
                .checked_sub(1)
                .map(|i| join_relative(&parent, &siblings[i])),
            next_path: siblings
                .get(index + 1)
                .map(|name| join_relative(&parent, name)),
            parent_path: parent,
        }
    }

    /// Sorted `.txt` file names directly inside a directory.
    fn lesson_files(&self, relative_dir: &str) -> Result<Vec<String>, ResolveError> {
        let dir = self.resolve(relative_dir)?;
        if !dir.path.is_dir() {
            return Err(ResolveError::NotFound(dir.relative));
        }

        let mut names: Vec<String> = fs::read_dir(&dir.path)
            .map_err(|e| read_error(&dir.relative, e))?
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().into_string().ok()?;
                let lesson = is_lesson_file(&name)
                    && self.confine(&e.path()).is_some_and(|p| p.is_file());
                lesson.then_some(name)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Canonical form of `path` if it exists and stays inside the root.
    fn confine(&self, path: &Path) -> Option<PathBuf> {
        path.canonicalize()
            .ok()
            .filter(|canonical| canonical.starts_with(&self.root))
    }

    /// Normalize a request path and confine it to the root.
    fn resolve(&self, relative: &str) -> Result<Resolved, ResolveError> {
        let normalized = normalize_relative(relative).inspect_err(|_| {
            tracing::warn!("Path traversal attempt blocked: {:?}", relative);
        })?;

        let canonical = match self.root.join(&normalized).canonicalize() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("Cannot resolve {:?}: {}", normalized, e);
                return Err(ResolveError::NotFound(normalized));
            }
        };

        // Path::starts_with compares whole components, so a sibling like
        // `texts_evil` never matches a root of `texts`.
        if !canonical.starts_with(&self.root) {
            tracing::warn!(
                "Path traversal attempt blocked: {:?} -> {}",
                relative,
                canonical.display()
            );
            return Err(ResolveError::InvalidPath(normalized));
        }

        Ok(Resolved {
            relative: normalized,
            path: canonical,
        })
    }
}

/// Reduce an untrusted path to `/`-joined normal components.
///
/// Parent references, absolute paths and NUL bytes are rejected outright.
pub fn normalize_relative(relative: &str) -> Result<String, ResolveError> {
    if relative.contains('\0') {
        return Err(ResolveError::InvalidPath(relative.to_string()));
    }

    let mut parts = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::InvalidPath(relative.to_string()));
            }
        }
    }
    Ok(parts.join("/"))
}

fn file_name(relative: &str) -> &str {
    relative.rsplit('/').next().unwrap_or(relative)
}

fn read_error(relative: &str, source: std::io::Error) -> ResolveError {
    ResolveError::ReadError {
        path: relative.to_string(),
        source,
    }
}
