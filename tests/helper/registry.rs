//! Registry test utilities

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use requirements_lsp::version::error::RegistryError;
use requirements_lsp::version::registry::Registry;
use requirements_lsp::version::types::{PackageMetadata, ReleaseEntry};

/// Mock registry for testing
///
/// Unknown packages are reported as not found. Every request is counted.
#[derive(Default)]
pub struct MockRegistry {
    packages: HashMap<String, PackageMetadata>,
    failing: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        package: &str,
        description: &str,
        releases: Vec<(&str, Option<&str>)>,
    ) -> Self {
        self.packages.insert(
            package.to_string(),
            PackageMetadata {
                latest_description: description.to_string(),
                latest_version: releases
                    .last()
                    .map(|(version, _)| version.to_string())
                    .unwrap_or_default(),
                releases: releases
                    .into_iter()
                    .map(|(version, upload_time)| ReleaseEntry::new(version, upload_time))
                    .collect(),
            },
        );
        self
    }

    /// Make requests for `package` fail with a transient error
    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }

    /// Handle to the request counter, usable after the registry is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(package_name) {
            return Err(RegistryError::InvalidResponse(
                "PyPI API returned status 503 Service Unavailable".to_string(),
            ));
        }

        match self.packages.get(package_name) {
            Some(metadata) => Ok(metadata.clone()),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
