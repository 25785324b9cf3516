use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::{href, FILL_PREFIX, PRACTICE_PREFIX, SELECT_PREFIX};
use crate::content::{build_breadcrumbs, normalize_relative, Entry, ResolveError};
use crate::filters;
use crate::state::AppState;

/// A folder or lesson row on the listing page
pub struct EntryLink {
  pub name: String,
  pub is_folder: bool,
  /// Listing for folders, practice view for lessons
  pub href: String,
  /// Fill-in view, lessons only
  pub fill_href: Option<String>,
}

impl From<Entry> for EntryLink {
  fn from(entry: Entry) -> Self {
    if entry.is_folder() {
      EntryLink {
        href: href(SELECT_PREFIX, &entry.relative_path),
        fill_href: None,
        is_folder: true,
        name: entry.name,
      }
    } else {
      EntryLink {
        href: href(PRACTICE_PREFIX, &entry.relative_path),
        fill_href: Some(href(FILL_PREFIX, &entry.relative_path)),
        is_folder: false,
        name: entry.name,
      }
    }
  }
}

/// One breadcrumb, ready to link
pub struct CrumbLink {
  pub name: String,
  pub href: String,
}

#[derive(Template)]
#[template(path = "select.html")]
pub struct SelectTemplate {
  pub current_path: String,
  pub entries: Vec<EntryLink>,
  pub breadcrumbs: Vec<CrumbLink>,
  pub home_href: String,
  /// None at the root
  pub parent_href: Option<String>,
  pub image: Option<String>,
}

/// Root listing (`/`)
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ResolveError> {
  render_listing(&state, "")
}

/// Root listing (`/select/`)
pub async fn select_root(State(state): State<AppState>) -> Result<Html<String>, ResolveError> {
  render_listing(&state, "")
}

/// Listing of a subdirectory (`/select/{*path}`)
pub async fn select(
  State(state): State<AppState>,
  Path(path): Path<String>,
) -> Result<Html<String>, ResolveError> {
  render_listing(&state, &path)
}

fn render_listing(state: &AppState, path: &str) -> Result<Html<String>, ResolveError> {
  let entries = state.resolver.list_directory(path)?;
  // Same form the resolver confined, so `./` or `//` never become crumbs
  let current_path = normalize_relative(path)?;
  let (breadcrumbs, parent) = build_breadcrumbs(&current_path);
  tracing::debug!("Listing {:?}: {} entries", current_path, entries.len());

  let template = SelectTemplate {
    current_path,
    entries: entries.into_iter().map(EntryLink::from).collect(),
    breadcrumbs: breadcrumbs
      .into_iter()
      .map(|crumb| CrumbLink {
        href: href(SELECT_PREFIX, &crumb.path),
        name: crumb.name,
      })
      .collect(),
    home_href: href(SELECT_PREFIX, ""),
    parent_href: parent.map(|p| href(SELECT_PREFIX, &p)),
    image: state.images.pick(),
  };

  Ok(Html(template.render().unwrap_or_default()))
}
