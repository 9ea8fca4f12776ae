//! Error types for `studybuddy-core`.
//!
//! Configuration and file loading return [`CoreResult<T>`], an alias for
//! `Result<T, CoreError>`. The account flows have their own error enums
//! ([`crate::login::AuthError`], [`crate::signup::SignupError`]) because
//! their variants map to user-facing messages.

use std::path::{Path, PathBuf};

/// Unified error type for configuration and I/O in the core library.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse or serialize a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `studybuddy-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Reads a TOML file at `path` and deserializes it.
///
/// Shared by [`crate::config::settings::Config`], [`crate::config::theme::Theme`]
/// and [`crate::config::keymap::Keymap`] so they classify I/O errors the same way.
pub(crate) fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/default.toml"));
        assert_eq!(err.to_string(), "path not found: /missing/default.toml");
    }

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn read_toml_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result: CoreResult<toml::Table> = read_toml(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn read_toml_malformed_is_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[[[ not toml").unwrap();
        let result: CoreResult<toml::Table> = read_toml(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }
}
