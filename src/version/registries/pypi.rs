//! PyPI registry client for fetching Python package metadata

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_REGISTRY_URL, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{PackageMetadata, ReleaseEntry};

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
    releases: IndexMap<String, PypiRelease>,
}

/// Package information from PyPI
#[derive(Debug, Deserialize)]
struct PypiInfo {
    /// Latest version (according to PyPI)
    #[serde(default)]
    version: String,
    /// Long description, `null` for packages that never set one
    #[serde(default)]
    description: Option<String>,
}

/// Upload records of a release
///
/// PyPI sends a list of files, but releases without files may also show up
/// as an empty object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PypiRelease {
    Files(Vec<PypiFile>),
    Object(serde_json::Map<String, serde_json::Value>),
}

#[derive(Debug, Deserialize)]
struct PypiFile {
    #[serde(default)]
    upload_time: Option<String>,
}

impl PypiRelease {
    fn upload_time(self) -> Option<String> {
        match self {
            PypiRelease::Files(files) => files
                .into_iter()
                .filter_map(|file| file.upload_time)
                .find(|time| !time.is_empty()),
            PypiRelease::Object(_) => None,
        }
    }
}

impl From<PypiResponse> for PackageMetadata {
    fn from(response: PypiResponse) -> Self {
        let releases = response
            .releases
            .into_iter()
            .map(|(version, release)| ReleaseEntry {
                version,
                upload_time: release.upload_time(),
            })
            .collect();

        PackageMetadata {
            latest_description: response.info.description.unwrap_or_default(),
            latest_version: response.info.version,
            releases,
        }
    }
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                status
            )));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!(
            "Found {} releases for package {}",
            pypi_response.releases.len(),
            package_name
        );

        Ok(pypi_response.into())
    }
}
