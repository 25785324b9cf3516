//! Decorative images shown alongside lessons.
//!
//! Pages show one image picked from `static/img`. Selection sits behind
//! [`ImageProvider`] so handlers never depend on global randomness and tests
//! can pin presence or absence.

use std::fs;
use std::path::PathBuf;

use rand::prelude::IndexedRandom;

/// Supplies the file name of a decorative image, if any.
pub trait ImageProvider: Send + Sync {
  /// File name relative to the image folder
  fn pick(&self) -> Option<String>;
}

/// Picks a random file from an image folder on every call.
#[derive(Debug, Clone)]
pub struct RandomImageProvider {
  dir: PathBuf,
}

impl RandomImageProvider {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Visible regular files in the folder; empty if it is missing or unreadable.
  fn candidates(&self) -> Vec<String> {
    let entries = match fs::read_dir(&self.dir) {
      Ok(entries) => entries,
      Err(_) => return Vec::new(), // No image folder, no decoration
    };

    entries
      .filter_map(|e| e.ok())
      .filter(|e| e.path().is_file())
      .filter_map(|e| e.file_name().into_string().ok())
      .filter(|name| !name.starts_with('.'))
      .collect()
  }
}

impl ImageProvider for RandomImageProvider {
  fn pick(&self) -> Option<String> {
    self.candidates().choose(&mut rand::rng()).cloned()
  }
}

/// Never shows an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImage;

impl ImageProvider for NoImage {
  fn pick(&self) -> Option<String> {
    None
  }
}

/// Always shows the same image.
#[derive(Debug, Clone)]
pub struct FixedImage(pub String);

impl ImageProvider for FixedImage {
  fn pick(&self) -> Option<String> {
    Some(self.0.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_missing_folder_gives_none() {
    let temp = TempDir::new().unwrap();
    let provider = RandomImageProvider::new(temp.path().join("img"));
    assert_eq!(provider.pick(), None);
  }

  #[test]
  fn test_empty_folder_gives_none() {
    let temp = TempDir::new().unwrap();
    let provider = RandomImageProvider::new(temp.path());
    assert_eq!(provider.pick(), None);
  }

  #[test]
  fn test_skips_hidden_files_and_dirs() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitkeep"), "").unwrap();
    fs::create_dir(temp.path().join("thumbs")).unwrap();
    let provider = RandomImageProvider::new(temp.path());
    assert_eq!(provider.pick(), None);
  }

  #[test]
  fn test_picks_one_of_the_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), "").unwrap();
    fs::write(temp.path().join("dog.jpg"), "").unwrap();
    let provider = RandomImageProvider::new(temp.path());

    for _ in 0..10 {
      let picked = provider.pick().unwrap();
      assert!(picked == "cat.png" || picked == "dog.jpg");
    }
  }

  #[test]
  fn test_fixed_and_none() {
    assert_eq!(NoImage.pick(), None);
    assert_eq!(FixedImage("a.png".into()).pick().as_deref(), Some("a.png"));
  }
}
