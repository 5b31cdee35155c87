use crate::archive::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ContentConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub discard_stale_responses: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            discard_stale_responses: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub format: RenderFormat,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub content: ContentConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config file {}", path))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw).context("Failed to parse config")?;
        config.base_url()?;
        Ok(config)
    }

    pub fn get_logging_format(&self) -> LogFormat {
        self.logging.format
    }

    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.content.base_url)
            .with_context(|| format!("Invalid content base_url '{}'", self.content.base_url))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(anyhow::anyhow!(
                "Unsupported scheme '{}' in content base_url",
                scheme
            )),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.content.timeout_secs)
    }
}

/// Finds the config file: explicit path, `CONFIG_FILE`, then the XDG and
/// home config directories.
pub fn find_config_path(explicit: Option<&str>) -> Option<String> {
    if let Some(path) = explicit {
        return Some(path.to_string());
    }

    if let Ok(path) = std::env::var("CONFIG_FILE") {
        return Some(path);
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        let config_path = format!("{}/grimoire/config.toml", xdg_config_home);
        if Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = format!("{}/.config/grimoire/config.toml", home.display());
        if Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.get_logging_format(), LogFormat::Json);
        assert_eq!(config.render.format, RenderFormat::Text);
        assert!(config.content.discard_stale_responses);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.base_url().unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.content.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [logging]
            format = "text"

            [content]
            base_url = "http://localhost:8080/content"
            discard_stale_responses = false

            [render]
            format = "html"
            "#,
        )
        .unwrap();

        assert_eq!(config.get_logging_format(), LogFormat::Text);
        assert_eq!(config.render.format, RenderFormat::Html);
        assert!(!config.content.discard_stale_responses);
        assert_eq!(config.content.timeout_secs, 30);
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://localhost:8080/content"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(Config::from_toml("[content]\nbase_url = \"not a url\"").is_err());
        assert!(Config::from_toml("[content]\nbase_url = \"ftp://host/content\"").is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Config::from_toml("[render]\nformat = \"pdf\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[content]\ntimeout_secs = 5").unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/grimoire.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/grimoire.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            find_config_path(Some("/tmp/custom.toml")),
            Some("/tmp/custom.toml".to_string())
        );
    }
}
