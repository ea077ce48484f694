use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Number of GIFs per page.
///
/// The backend computes pagination from this same limit, so it is a
/// contract constant rather than a tunable.
pub const PAGE_LIMIT: usize = 9;

/// Seconds between trending feed refreshes while the trending view is visible.
pub const TRENDING_REFRESH_SECS: u64 = 30;

/// Fallback backend base URI (a locally running instance).
const DEFAULT_API_BASE_URI: &str = "http://localhost:8000";

/// Application configuration.
///
/// Loaded from an optional TOML file in the user's config directory:
/// - Linux: ~/.config/gif-gallery/config.toml
/// - macOS: ~/Library/Application Support/gif-gallery/config.toml
/// - Windows: %APPDATA%\gif-gallery\config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URI of the backend serving the favorites and GIF endpoints.
    pub api_base_uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_uri: DEFAULT_API_BASE_URI.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when the file is
    /// missing. A malformed file is diagnosed and ignored, never fatal.
    pub fn load() -> Self {
        Self::from_file(&Self::config_file())
    }

    fn from_file(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring malformed config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Path of the optional configuration file.
    fn config_file() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("could not determine user config directory");

        path.push("gif-gallery");
        path.push("config.toml");
        path
    }

    /// The backend base URI, parsed.
    ///
    /// An unparseable URI is diagnosed and replaced with the default so the
    /// app still starts.
    pub fn base_url(&self) -> Url {
        match Url::parse(&self.api_base_uri) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!("invalid api_base_uri {:?}: {err}", self.api_base_uri);
                Url::parse(DEFAULT_API_BASE_URI).expect("default base URI parses")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_file(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_base_uri() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_uri = \"https://gifs.example.com\"\n").unwrap();

        let config = Config::from_file(&path);
        assert_eq!(config.api_base_uri, "https://gifs.example.com");
        assert_eq!(config.base_url().as_str(), "https://gifs.example.com/");
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_uri = [not toml").unwrap();

        assert_eq!(Config::from_file(&path), Config::default());
    }

    #[test]
    fn test_invalid_uri_falls_back_to_default() {
        let config = Config {
            api_base_uri: "not a uri".to_string(),
        };
        assert_eq!(config.base_url().as_str(), "http://localhost:8000/");
    }
}
