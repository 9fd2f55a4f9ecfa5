use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub const DEFAULT_SERVER_URL: &str = "https://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const MIN_WIDTH: u32 = 560;
    pub const MIN_HEIGHT: u32 = 420;

    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 720,
            height: 520,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub server_url: String,
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// The Island ships with a self-signed certificate. Unset means accept
    /// it for a loopback Island only.
    pub accept_invalid_certs: Option<bool>,
    /// `None` waits for the Island indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub window: WindowSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
            username: None,
            password: None,
            accept_invalid_certs: None,
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            window: WindowSize::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
            .unwrap_or_else(|| is_loopback_url(&self.server_url))
    }
}

fn is_loopback_url(server_url: &str) -> bool {
    let Ok(url) = Url::parse(server_url) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("island-console");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Saves the configuration to `path`, creating parent directories.
/// Note: Comments in the original file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads the config, writing the defaults first if no file exists yet so
/// there is something to edit.
pub fn load_or_init_config_at(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        return load_config_from(path);
    }

    let config = AppConfig::new();
    save_config_to(path, &config)?;
    info!(path = %path.display(), "wrote default config");
    Ok(config)
}

pub fn load_or_init_config() -> Result<AppConfig> {
    load_or_init_config_at(&get_config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = get_config_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("island-console"));
        assert!(path.to_string_lossy().ends_with("config.jsonc"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.jsonc")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_with_comments_and_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // local island
                "server_url": "https://10.0.0.5:5000",
                "accept_invalid_certs": true, /* self-signed */
                "request_timeout_secs": null
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.server_url, "https://10.0.0.5:5000");
        assert_eq!(config.accept_invalid_certs, Some(true));
        assert!(config.accepts_invalid_certs());
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.window, WindowSize::default());
        assert!(config.token.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");
        let config = AppConfig {
            token: Some("secret".to_string()),
            window: WindowSize {
                width: 800,
                height: 600,
            },
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");

        let config = load_or_init_config_at(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_certs_accepted_for_loopback_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.accept_invalid_certs, None);
        assert!(config.accepts_invalid_certs());

        for url in ["https://127.0.0.1:5000", "https://[::1]:5000", "https://LOCALHOST"] {
            let config = AppConfig {
                server_url: url.to_string(),
                ..AppConfig::default()
            };
            assert!(config.accepts_invalid_certs(), "{}", url);
        }
    }

    #[test]
    fn test_invalid_certs_rejected_for_remote_by_default() {
        let remote = AppConfig {
            server_url: "https://island.example:5000".to_string(),
            ..AppConfig::default()
        };
        assert!(!remote.accepts_invalid_certs());

        let opted_in = AppConfig {
            accept_invalid_certs: Some(true),
            ..remote.clone()
        };
        assert!(opted_in.accepts_invalid_certs());

        let local_opted_out = AppConfig {
            accept_invalid_certs: Some(false),
            ..AppConfig::default()
        };
        assert!(!local_opted_out.accepts_invalid_certs());
    }

    #[test]
    fn test_window_size_clamped() {
        let tiny = WindowSize {
            width: 10,
            height: 10,
        };
        assert_eq!(
            tiny.clamped(),
            WindowSize {
                width: WindowSize::MIN_WIDTH,
                height: WindowSize::MIN_HEIGHT,
            }
        );
    }
}
