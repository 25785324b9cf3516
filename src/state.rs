//! Application state shared by all handlers.

use std::sync::Arc;

use crate::content::ContentResolver;
use crate::images::ImageProvider;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Lesson tree, confined to the configured root
  pub resolver: Arc<ContentResolver>,

  /// Decorative image selection
  pub images: Arc<dyn ImageProvider>,
}

impl AppState {
  pub fn new(resolver: ContentResolver, images: impl ImageProvider + 'static) -> Self {
    Self {
      resolver: Arc::new(resolver),
      images: Arc::new(images),
    }
  }
}
