pub mod lesson;
pub mod select;

/// Route prefixes for the three views
pub const SELECT_PREFIX: &str = "select";
pub const PRACTICE_PREFIX: &str = "practice";
pub const FILL_PREFIX: &str = "fill";

/// Build an href under a route prefix, percent-encoding each path segment.
///
/// `href("select", "")` is `/select/`, the root listing.
pub fn href(prefix: &str, relative: &str) -> String {
  let segments: Vec<String> = relative
    .split('/')
    .filter(|s| !s.is_empty() && *s != ".")
    .map(|s| urlencoding::encode(s).into_owned())
    .collect();
  format!("/{}/{}", prefix, segments.join("/"))
}

pub use lesson::{fill, practice};
pub use select::{index, select, select_root};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_href_root() {
    assert_eq!(href(SELECT_PREFIX, ""), "/select/");
  }

  #[test]
  fn test_href_encodes_segments() {
    assert_eq!(
      href(PRACTICE_PREFIX, "초급/01 인사.txt"),
      "/practice/%EC%B4%88%EA%B8%89/01%20%EC%9D%B8%EC%82%AC.txt"
    );
  }

  #[test]
  fn test_href_skips_empty_and_dot_segments() {
    assert_eq!(href(FILL_PREFIX, "./unit1//a.txt"), "/fill/unit1/a.txt");
  }
}
