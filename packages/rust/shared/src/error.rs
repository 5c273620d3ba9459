//! Error types for coursegrid.
//!
//! Library crates use [`CourseGridError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Timetable decoding itself never fails: malformed markup degrades to a
//! smaller [`Schedule`](crate::Schedule). These variants cover the plumbing
//! around it (config files, input files, parser lookup, output encoding).

use std::path::PathBuf;

/// Top-level error type for all coursegrid operations.
#[derive(Debug, thiserror::Error)]
pub enum CourseGridError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No parser is registered under the requested institution id.
    #[error("unknown institution: {id}")]
    UnknownInstitution { id: String },

    /// JSON/TOML encoding error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CourseGridError>;

impl CourseGridError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an unknown-institution error for the given id.
    pub fn unknown_institution(id: impl Into<String>) -> Self {
        Self::UnknownInstitution { id: id.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CourseGridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = CourseGridError::config("bad toml");
        assert_eq!(err.to_string(), "config error: bad toml");

        let err = CourseGridError::unknown_institution("mit");
        assert_eq!(err.to_string(), "unknown institution: mit");
    }

    #[test]
    fn io_error_includes_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CourseGridError::io("/tmp/table.html", source);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/table.html"));
        assert!(msg.contains("gone"));
    }
}
