use serde::Deserialize;
use std::path::PathBuf;

/// Default PyPI registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";

/// User agent sent with every registry request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// LSP configuration structure, read from `initializationOptions`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LspConfig {
    pub registry: RegistryConfig,
    pub completion: FeatureConfig,
    pub hover: FeatureConfig,
}

impl LspConfig {
    /// Parses initialization options, falling back to defaults when absent or invalid.
    pub fn from_initialization_options(
        options: Option<serde_json::Value>,
    ) -> Result<Self, serde_json::Error> {
        match options {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value),
        }
    }
}

/// Registry-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the package index JSON API
    pub url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

/// Toggle for a single LSP feature
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureConfig {
    pub enabled: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Returns the path to the data directory for requirements-lsp.
/// Uses $XDG_DATA_HOME/requirements-lsp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/requirements-lsp,
/// or ./requirements-lsp if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "requirements-lsp.log";

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("requirements-lsp")
}
