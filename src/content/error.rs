//! Resolver errors and the log-and-default helper used for best-effort lookups.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from resolving a request path against the lesson root.
#[derive(Debug)]
pub enum ResolveError {
    /// Traversal attempt or malformed path (user error)
    InvalidPath(String),
    /// Path is well-formed but nothing of the expected kind is there
    NotFound(String),
    /// I/O or UTF-8 decoding failure on an existing node
    ReadError { path: String, source: std::io::Error },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::InvalidPath(path) => write!(f, "Invalid path: {}", path),
            ResolveError::NotFound(path) => write!(f, "Not found: {}", path),
            ResolveError::ReadError { path, source } => {
                write!(f, "Error reading {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::ReadError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ResolveError {
    pub fn status(&self) -> StatusCode {
        match self {
            ResolveError::InvalidPath(_) | ResolveError::NotFound(_) => StatusCode::NOT_FOUND,
            ResolveError::ReadError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &str {
        match self {
            ResolveError::InvalidPath(_) => "Invalid path",
            ResolveError::NotFound(_) => "Not found",
            ResolveError::ReadError { .. } => "Error reading file",
        }
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // 500 bodies carry the I/O detail; 404 bodies never echo the path.
            ResolveError::ReadError { source, .. } => format!("Error reading file: {}", source),
            _ => self.user_message().to_string(),
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, body).into_response()
    }
}

/// Extension trait for logging errors and falling back to a value.
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        self.log_warn(context).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ResolveError::InvalidPath("..".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ResolveError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        let read = ResolveError::ReadError {
            path: "a.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(read.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(read.source().is_some());
        assert!(read.to_string().contains("bad utf-8"));
    }

    #[test]
    fn test_user_message_hides_path() {
        let err = ResolveError::InvalidPath("../../etc/passwd".into());
        assert!(!err.user_message().contains("passwd"));
    }

    #[test]
    fn test_log_warn_default() {
        let failed: Result<Vec<u8>, String> = Err("boom".into());
        assert!(failed.log_warn_default("listing").is_empty());

        let ok: Result<u8, String> = Ok(7);
        assert_eq!(ok.log_warn("listing"), Some(7));
    }
}
