//! Common types for package metadata lookups

use std::sync::Arc;

/// Release metadata for a single package, as published by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Free-text description of the latest release
    pub latest_description: String,
    /// Latest version according to the registry
    pub latest_version: String,
    /// Releases in registry document order
    pub releases: Vec<ReleaseEntry>,
}

/// A published version together with its upload time, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub version: String,
    /// ISO-8601 timestamp of the first upload record, absent when the
    /// release has no files
    pub upload_time: Option<String>,
}

impl ReleaseEntry {
    pub fn new(version: impl Into<String>, upload_time: Option<&str>) -> Self {
        Self {
            version: version.into(),
            upload_time: upload_time.map(str::to_string),
        }
    }
}

/// Outcome of a metadata lookup
///
/// `NotFound` is permanent and cached; `Unavailable` is transient and never
/// cached, so asking again retries the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Arc<PackageMetadata>),
    NotFound,
    Unavailable,
}

impl Lookup {
    /// Returns the metadata if the lookup succeeded
    pub fn metadata(&self) -> Option<&PackageMetadata> {
        match self {
            Lookup::Found(metadata) => Some(metadata.as_ref()),
            Lookup::NotFound | Lookup::Unavailable => None,
        }
    }
}
