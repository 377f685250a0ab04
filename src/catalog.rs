use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Make {
    pub name: String,
    #[serde(default)]
    pub models: Vec<String>,
}

/// Reference data behind the filter overlay: the four taxonomy lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub makes: Vec<Make>,
    #[serde(default)]
    pub body_types: Vec<String>,
    #[serde(default)]
    pub fuel_types: Vec<String>,
    #[serde(default)]
    pub transmissions: Vec<String>,
}

fn sort_dedup(values: &mut Vec<String>) {
    values.retain(|v| !v.trim().is_empty());
    values.sort();
    values.dedup();
}

impl Catalog {
    /// Sort every list and drop duplicates/blank entries.
    /// Makes with the same name are merged.
    pub fn normalized(mut self) -> Self {
        self.makes.retain(|m| !m.name.trim().is_empty());
        self.makes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut merged: Vec<Make> = Vec::with_capacity(self.makes.len());
        for make in self.makes {
            match merged.last_mut() {
                Some(last) if last.name == make.name => last.models.extend(make.models),
                _ => merged.push(make),
            }
        }
        for make in &mut merged {
            sort_dedup(&mut make.models);
        }
        self.makes = merged;

        sort_dedup(&mut self.body_types);
        sort_dedup(&mut self.fuel_types);
        sort_dedup(&mut self.transmissions);
        self
    }

    pub fn make(&self, name: &str) -> Option<&Make> {
        self.makes.iter().find(|m| m.name == name)
    }

    /// Models of `make`, empty if the make is unknown
    pub fn models_for(&self, make: &str) -> &[String] {
        self.make(make).map(|m| m.models.as_slice()).unwrap_or(&[])
    }

    pub fn make_names(&self) -> impl Iterator<Item = &str> {
        self.makes.iter().map(|m| m.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.makes.is_empty()
            && self.body_types.is_empty()
            && self.fuel_types.is_empty()
            && self.transmissions.is_empty()
    }
}

/// Parse a catalog document. YAML is a superset of JSON, so both work.
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(text).context("Invalid catalog document")?;
    Ok(catalog.normalized())
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog(&text)
}

/// HTTP client for the reference-data API
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let items: Vec<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))?;

        Ok(items)
    }

    pub async fn get_makes(&self) -> Result<Vec<Make>> {
        self.get_list("makes").await
    }

    pub async fn get_body_types(&self) -> Result<Vec<String>> {
        self.get_list("body-types").await
    }

    pub async fn get_fuel_types(&self) -> Result<Vec<String>> {
        self.get_list("fuel-types").await
    }

    pub async fn get_transmissions(&self) -> Result<Vec<String>> {
        self.get_list("transmissions").await
    }

    /// Fetch all four lists concurrently. Any failure fails the whole load.
    pub async fn fetch_catalog(&self) -> Result<Catalog> {
        let (makes, body_types, fuel_types, transmissions) = tokio::try_join!(
            self.get_makes(),
            self.get_body_types(),
            self.get_fuel_types(),
            self.get_transmissions(),
        )?;

        Ok(Catalog {
            makes,
            body_types,
            fuel_types,
            transmissions,
        }
        .normalized())
    }
}

/// Where reference data comes from
#[derive(Clone)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(CatalogClient),
}

impl CatalogSource {
    pub async fn fetch(&self) -> Result<Catalog> {
        match self {
            CatalogSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
                parse_catalog(&text)
            }
            CatalogSource::Remote(client) => client.fetch_catalog().await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(path) => format!("file {}", path.display()),
            CatalogSource::Remote(client) => client.base_url().to_string(),
        }
    }
}
