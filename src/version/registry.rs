//! Registry trait for fetching package metadata from a package index

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageMetadata;

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the metadata of a package
    ///
    /// # Arguments
    /// * `package_name` - The package name exactly as typed by the user (e.g., "requests")
    ///
    /// # Returns
    /// * `Ok(PackageMetadata)` - Description and releases in registry order
    /// * `Err(RegistryError::NotFound)` - If the registry reports the package does not exist
    /// * `Err(RegistryError)` - Any other failure
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError>;
}
