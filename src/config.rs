//! Application configuration.
//!
//! Values are resolved once at startup with priority:
//! `config.toml` > environment (`.env` loaded first) > defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ==================== Defaults ====================

/// Default lesson text root
pub const DEFAULT_TEXTS_DIR: &str = "texts";

/// Default static asset folder (css, js, img)
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server address to bind to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server port
pub const DEFAULT_PORT: u16 = 5000;

/// Decorative image folder, relative to the static folder
pub const IMAGE_SUBDIR: &str = "img";

// ==================== config.toml ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
  server: Option<ServerSection>,
  content: Option<ContentSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
  host: Option<String>,
  port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentSection {
  texts_dir: Option<String>,
  static_dir: Option<String>,
}

// ==================== Resolved configuration ====================

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub host: String,
  pub port: u16,
  pub texts_dir: PathBuf,
  pub static_dir: PathBuf,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      texts_dir: PathBuf::from(DEFAULT_TEXTS_DIR),
      static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
    }
  }
}

impl AppConfig {
  /// Load configuration from `config.toml` in the working directory, `.env` and the environment.
  pub fn load() -> Self {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    Self::resolve(Path::new("config.toml"), |key| std::env::var(key).ok())
  }

  /// Resolve from a config file path and an environment lookup.
  pub fn resolve(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Self {
    let file = read_config_file(config_path).unwrap_or_default();
    let server = file.server.unwrap_or_default();
    let content = file.content.unwrap_or_default();

    let host = pick("host", server.host, env("HOST"), DEFAULT_HOST.to_string());
    let port = pick(
      "port",
      server.port,
      env("PORT").and_then(|p| p.parse().ok()),
      DEFAULT_PORT,
    );
    let texts_dir = pick(
      "texts_dir",
      content.texts_dir,
      env("TEXTS_DIR"),
      DEFAULT_TEXTS_DIR.to_string(),
    );
    let static_dir = pick(
      "static_dir",
      content.static_dir,
      env("STATIC_DIR"),
      DEFAULT_STATIC_DIR.to_string(),
    );

    Self {
      host,
      port,
      texts_dir: PathBuf::from(texts_dir),
      static_dir: PathBuf::from(static_dir),
    }
  }

  /// Full server bind address
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  /// Folder the decorative images are picked from
  pub fn image_dir(&self) -> PathBuf {
    self.static_dir.join(IMAGE_SUBDIR)
  }
}

fn read_config_file(path: &Path) -> Option<ConfigFile> {
  let contents = std::fs::read_to_string(path).ok()?;
  match toml::from_str::<ConfigFile>(&contents) {
    Ok(config) => Some(config),
    Err(e) => {
      tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
      None
    }
  }
}

fn pick<T: std::fmt::Debug>(name: &str, file: Option<T>, env: Option<T>, default: T) -> T {
  if let Some(value) = file {
    tracing::info!("Using {} from config.toml: {:?}", name, value);
    value
  } else if let Some(value) = env {
    tracing::info!("Using {} from environment: {:?}", name, value);
    value
  } else {
    tracing::debug!("Using default {}: {:?}", name, default);
    default
  }
}
