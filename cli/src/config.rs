//! Configuration file management.
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "http://localhost:3001/api"  # Tienda backend base URL
//! timeout = 30                       # request timeout in seconds
//!
//! [auth]
//! mode = "bearer"                    # "bearer" or "cookie"
//!
//! [ui]
//! format = "table"                   # table, json
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tienda_link::AuthMode;

use crate::error::{CliError, Result};

/// CLI configuration loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// Authentication settings
    pub auth: Option<AuthConfig>,

    /// UI preferences
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Backend base URL (e.g. http://localhost:3001/api)
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication model: "bearer" (token) or "cookie" (server session)
    #[serde(default = "default_auth_mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Output format: table, json
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_auth_mode() -> String {
    "bearer".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                url: Some("http://localhost:3001/api".to_string()),
                timeout: default_timeout(),
            }),
            auth: Some(AuthConfig {
                mode: default_auth_mode(),
            }),
            ui: Some(UiConfig {
                format: default_format(),
            }),
        }
    }
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or("~/.config/tienda/config.toml");
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

impl CliConfig {
    /// Load configuration from file.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::Configuration(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn resolved_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig {
            url: None,
            timeout: default_timeout(),
        })
    }

    pub fn resolved_ui(&self) -> UiConfig {
        self.ui.clone().unwrap_or(UiConfig {
            format: default_format(),
        })
    }

    /// The configured authentication model
    pub fn auth_mode(&self) -> AuthMode {
        self.auth
            .as_ref()
            .map(|a| parse_auth_mode(&a.mode))
            .unwrap_or(AuthMode::BearerToken)
    }
}

/// Parse an auth mode string, defaulting unknown values to bearer.
pub fn parse_auth_mode(value: &str) -> AuthMode {
    match value.trim().to_lowercase().as_str() {
        "cookie" | "session" | "cookie-session" => AuthMode::CookieSession,
        _ => AuthMode::BearerToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(
            config.server.as_ref().unwrap().url,
            Some("http://localhost:3001/api".to_string())
        );
        assert_eq!(config.server.as_ref().unwrap().timeout, 30);
        assert_eq!(config.auth_mode(), AuthMode::BearerToken);
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("url"));
        assert!(toml.contains("[auth]"));
        assert!(toml.contains("mode"));
    }

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!(parse_auth_mode("bearer"), AuthMode::BearerToken);
        assert_eq!(parse_auth_mode("cookie"), AuthMode::CookieSession);
        assert_eq!(parse_auth_mode("COOKIE"), AuthMode::CookieSession);
        assert_eq!(parse_auth_mode("session"), AuthMode::CookieSession);
        // Unknown values default to bearer
        assert_eq!(parse_auth_mode("unknown"), AuthMode::BearerToken);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str("[server]\nurl = \"http://example.com/api\"\n").unwrap();
        assert_eq!(config.resolved_server().timeout, 30);
        assert_eq!(config.auth_mode(), AuthMode::BearerToken);
        assert_eq!(config.resolved_ui().format, "table");
    }
}
