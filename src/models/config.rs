//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Home screen configuration.
    pub home: HomeConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key (v3) or Bearer token (v4, JWT).
    pub api_key: Option<String>,
    /// Language for responses.
    pub language: String,
    /// API root, without trailing slash.
    pub base_url: String,
    /// Image CDN root, without trailing slash.
    pub image_base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// How the home screen issues its eight category fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// One at a time in fixed order; the first failure stops the cycle.
    #[default]
    Sequential,
    /// All at once; each category fails independently.
    Parallel,
}

/// Home screen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub strategy: FetchStrategy,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TmdbConfig {
    /// The configured key, or an error when none is set.
    pub fn api_key(&self) -> crate::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(crate::Error::TmdbApiKeyMissing)
    }

    /// Bearer tokens start with "eyJ" (base64 encoded JWT header).
    pub fn use_bearer(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| k.starts_with("eyJ"))
            .unwrap_or(false)
    }

    /// Full URL of an image at the given CDN size (e.g. "w500", "original").
    pub fn image_url(&self, size: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.image_base_url.trim_end_matches('/'),
            size,
            path.trim_start_matches('/')
        )
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("naflix")
}

/// Default location of config.toml.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from the default location.
///
/// A missing or unreadable default file yields defaults. `TMDB_API_KEY`
/// overrides the file's key either way.
pub fn load_config() -> Config {
    let config_path = default_config_path();

    let mut config = if config_path.exists() {
        match load_config_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    apply_env(&mut config);
    config
}

/// Load configuration from an explicit path. Missing or malformed files are errors.
pub fn load_config_from(path: &Path) -> crate::Result<Config> {
    if !path.exists() {
        return Err(crate::Error::ConfigNotFound(path.display().to_string()));
    }
    let mut config = load_config_file(path)?;
    apply_env(&mut config);
    Ok(config)
}

fn load_config_file(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn apply_env(config: &mut Config) {
    if let Ok(key) = std::env::var("TMDB_API_KEY") {
        if !key.trim().is_empty() {
            config.tmdb.api_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.timeout, 30);
        assert_eq!(config.home.strategy, FetchStrategy::Sequential);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tmdb]
            language = "ko-KR"

            [home]
            strategy = "parallel"
            "#,
        )
        .unwrap();
        assert_eq!(config.tmdb.language, "ko-KR");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(config.home.strategy, FetchStrategy::Parallel);
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(crate::Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_config_from_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[home]\nstrategy = \"sideways\"").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_api_key_and_bearer() {
        let mut tmdb = TmdbConfig::default();
        assert!(matches!(tmdb.api_key(), Err(crate::Error::TmdbApiKeyMissing)));

        tmdb.api_key = Some("abc123".to_string());
        assert_eq!(tmdb.api_key().unwrap(), "abc123");
        assert!(!tmdb.use_bearer());

        tmdb.api_key = Some("eyJhbGciOiJIUzI1NiJ9.x.y".to_string());
        assert!(tmdb.use_bearer());
    }

    #[test]
    fn test_image_url() {
        let tmdb = TmdbConfig::default();
        assert_eq!(
            tmdb.image_url("w500", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }
}
