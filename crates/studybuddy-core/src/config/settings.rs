//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dashboard::CertSort;
use crate::error::{read_toml, CoreResult};
use crate::login::MAX_ATTEMPTS;

/// Top-level application configuration.
///
/// All fields have sensible defaults so Study Buddy works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`crate::CoreError::NotFound`] if the file does not exist.
    /// - [`crate::CoreError::PermissionDenied`] if the file is not readable.
    /// - [`crate::CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        read_toml(path)
    }
}

/// Where the account endpoints live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_signup_path")]
    pub signup_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            signup_path: default_signup_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Sign-in lockout policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            default_sort: default_sort(),
        }
    }
}

impl UiConfig {
    /// The configured dashboard ordering, or the default for an unknown id.
    pub fn initial_sort(&self) -> CertSort {
        CertSort::from_id(&self.default_sort).unwrap_or_else(|| {
            tracing::warn!("Unknown sort '{}', using default", self.default_sort);
            CertSort::default()
        })
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_login_path() -> String {
    "/api/login".to_string()
}

fn default_signup_path() -> String {
    "/api/signup".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_sort() -> String {
    "due-desc".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_api() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.login_path, "/api/login");
        assert_eq!(config.api.signup_path, "/api/signup");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn default_config_login() {
        let config = Config::default();
        assert_eq!(config.login.max_attempts, 5);
    }

    #[test]
    fn default_config_ui() {
        let config = Config::default();
        assert_eq!(config.ui.date_format, "%m/%d/%Y");
        assert_eq!(config.ui.default_sort, "due-desc");
    }

    #[test]
    fn initial_sort_resolves_ids() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.initial_sort(), CertSort::DueDesc);
        ui.default_sort = "progress".to_string();
        assert_eq!(ui.initial_sort(), CertSort::Progress);
        ui.default_sort = "bogus".to_string();
        assert_eq!(ui.initial_sort(), CertSort::DueDesc);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("default.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "https://buddy.example.com"
login_path = "/v2/login"
signup_path = "/v2/signup"
timeout_secs = 3

[login]
max_attempts = 3

[ui]
date_format = "%Y-%m-%d"
default_sort = "name"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.api.base_url, "https://buddy.example.com");
        assert_eq!(config.api.login_path, "/v2/login");
        assert_eq!(config.api.signup_path, "/v2/signup");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.login.max_attempts, 3);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
        assert_eq!(config.ui.default_sort, "name");
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("default.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://127.0.0.1:3000"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.api.login_path, "/api/login");
        assert_eq!(config.login.max_attempts, 5);
        assert_eq!(config.ui.default_sort, "due-desc");
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("default.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        let default = Config::default();

        assert_eq!(config.api.base_url, default.api.base_url);
        assert_eq!(config.login.max_attempts, default.login.max_attempts);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::CoreError::NotFound(_)
        ));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("default.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            crate::error::CoreError::ConfigParse(_)
        ));
    }
}
