//! Practice (source + translation) and fill-in (typing) views of a lesson.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::{href, FILL_PREFIX, PRACTICE_PREFIX, SELECT_PREFIX};
use crate::content::{NavigationContext, ResolveError};
use crate::filters;
use crate::state::AppState;

/// Links shared by both lesson views
pub struct LessonNav {
  pub previous_href: Option<String>,
  pub next_href: Option<String>,
  /// Back to the containing directory's listing
  pub list_href: String,
  pub practice_href: String,
  pub fill_href: String,
}

impl LessonNav {
  /// Links for `path`, keeping previous/next in the current view (`prefix`).
  fn new(prefix: &str, path: &str, nav: NavigationContext) -> Self {
    Self {
      previous_href: nav.previous_path.map(|p| href(prefix, &p)),
      next_href: nav.next_path.map(|p| href(prefix, &p)),
      list_href: href(SELECT_PREFIX, &nav.parent_path),
      practice_href: href(PRACTICE_PREFIX, path),
      fill_href: href(FILL_PREFIX, path),
    }
  }
}

#[derive(Template)]
#[template(path = "practice.html")]
pub struct PracticeTemplate {
  pub title: String,
  pub primary_text: String,
  pub secondary_text: String,
  pub nav: LessonNav,
  pub image: Option<String>,
}

#[derive(Template)]
#[template(path = "fill.html")]
pub struct FillTemplate {
  pub title: String,
  /// Primary text as lines of words; each word becomes a typing blank
  pub lines: Vec<Vec<String>>,
  pub nav: LessonNav,
  pub image: Option<String>,
}

/// Source text with its translation (`/practice/{*path}`)
pub async fn practice(
  State(state): State<AppState>,
  Path(path): Path<String>,
) -> Result<Html<String>, ResolveError> {
  let content = state.resolver.read_content(&path)?;
  let nav = state.resolver.find_navigation(&path);

  let template = PracticeTemplate {
    title: content.title,
    primary_text: content.primary_text,
    secondary_text: content.secondary_text,
    nav: LessonNav::new(PRACTICE_PREFIX, &path, nav),
    image: state.images.pick(),
  };

  Ok(Html(template.render().unwrap_or_default()))
}

/// Fill-in typing exercise over the source text only (`/fill/{*path}`)
pub async fn fill(
  State(state): State<AppState>,
  Path(path): Path<String>,
) -> Result<Html<String>, ResolveError> {
  let content = state.resolver.read_content(&path)?;
  let nav = state.resolver.find_navigation(&path);

  let template = FillTemplate {
    title: content.title,
    lines: fill_lines(&content.primary_text),
    nav: LessonNav::new(FILL_PREFIX, &path, nav),
    image: state.images.pick(),
  };

  Ok(Html(template.render().unwrap_or_default()))
}

/// Split text into non-empty lines of whitespace-separated words.
fn fill_lines(text: &str) -> Vec<Vec<String>> {
  text
    .lines()
    .map(|line| line.split_whitespace().map(String::from).collect::<Vec<_>>())
    .filter(|words| !words.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fill_lines() {
    let lines = fill_lines("Hello  world.\n\n  How are you?");
    assert_eq!(
      lines,
      vec![
        vec!["Hello".to_string(), "world.".to_string()],
        vec!["How".to_string(), "are".to_string(), "you?".to_string()],
      ]
    );
  }

  #[test]
  fn test_fill_lines_empty() {
    assert!(fill_lines("").is_empty());
  }

  #[test]
  fn test_nav_links_at_root() {
    let nav = LessonNav::new(
      FILL_PREFIX,
      "b.txt",
      NavigationContext {
        previous_path: Some("a.txt".into()),
        next_path: None,
        parent_path: String::new(),
      },
    );
    assert_eq!(nav.previous_href.as_deref(), Some("/fill/a.txt"));
    assert_eq!(nav.next_href, None);
    assert_eq!(nav.list_href, "/select/");
    assert_eq!(nav.practice_href, "/practice/b.txt");
  }

  #[test]
  fn test_nav_links_nested() {
    let nav = LessonNav::new(
      PRACTICE_PREFIX,
      "unit 1/b.txt",
      NavigationContext {
        previous_path: None,
        next_path: Some("unit 1/c.txt".into()),
        parent_path: "unit 1".into(),
      },
    );
    assert_eq!(nav.next_href.as_deref(), Some("/practice/unit%201/c.txt"));
    assert_eq!(nav.list_href, "/select/unit%201");
    assert_eq!(nav.fill_href, "/fill/unit%201/b.txt");
  }
}
