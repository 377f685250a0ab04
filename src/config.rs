use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogClient, CatalogSource};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the reference-data API
    #[serde(default)]
    pub catalog_url: Option<String>,
    /// Local catalog document (YAML or JSON); wins over `catalog_url`
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_stale_after_secs() -> u64 {
    600
}

fn default_scroll_debounce_ms() -> u64 {
    150
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    /// Build the reference-data source. A catalog file wins over a URL.
    pub fn catalog_source(&self) -> Result<CatalogSource> {
        if let Some(file) = &self.catalog_file {
            return Ok(CatalogSource::File(PathBuf::from(file)));
        }
        if let Some(url) = &self.catalog_url {
            let client =
                CatalogClient::new(url.clone(), Duration::from_secs(self.request_timeout_secs))?;
            return Ok(CatalogSource::Remote(client));
        }
        anyhow::bail!("No catalog source configured: set catalog_file or catalog_url")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("catalog_url: http://localhost:3000/api").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.stale_after(), Duration::from_secs(600));
        assert_eq!(config.scroll_debounce(), Duration::from_millis(150));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_file_source_wins() {
        let config = Config::from_yaml(
            "catalog_url: http://localhost:3000/api\ncatalog_file: ./catalog.yaml\n",
        )
        .unwrap();
        match config.catalog_source().unwrap() {
            CatalogSource::File(path) => assert_eq!(path, PathBuf::from("./catalog.yaml")),
            CatalogSource::Remote(_) => panic!("expected file source"),
        }
    }

    #[test]
    fn test_remote_source() {
        let config = Config::from_yaml("catalog_url: http://localhost:3000/api/").unwrap();
        assert_eq!(
            config.catalog_source().unwrap().describe(),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn test_missing_source_is_error() {
        let config = Config::from_yaml("vim_mode: true").unwrap();
        assert!(config.vim_mode);
        assert!(config.catalog_source().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "catalog_file: cat.yaml\nstale_after_secs: 30\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.stale_after_secs, 30);
        assert_eq!(config.catalog_file.as_deref(), Some("cat.yaml"));
    }
}
