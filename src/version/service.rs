//! Package metadata lookups with memoization
//!
//! Every lookup goes through [`PackageMetadataService::fetch`], which answers
//! from the cache when it can and otherwise asks the registry. At most one
//! registry request per package name is in flight at any time: concurrent
//! callers for the same name wait on the same shared request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, info, warn};

use crate::version::cache::{CachedLookup, MetadataCache};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::Lookup;

type InFlightRequest = Shared<BoxFuture<'static, Lookup>>;
type InFlightMap = HashMap<String, InFlightRequest>;

pub struct PackageMetadataService {
    registry: Arc<dyn Registry>,
    cache: MetadataCache,
    in_flight: Arc<Mutex<InFlightMap>>,
}

impl PackageMetadataService {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            cache: MetadataCache::new(),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Looks up a package, fetching it from the registry on a cache miss
    ///
    /// Never fails: registry errors other than "not found" become
    /// [`Lookup::Unavailable`], which is not cached.
    pub async fn fetch(&self, package_name: &str) -> Lookup {
        if let Some(cached) = self.cache.get(package_name) {
            debug!("Cache hit for {}", package_name);
            return cached.into();
        }

        let request = {
            let mut in_flight = lock_in_flight(&self.in_flight);

            // The request may have completed between the first check and taking the lock
            if let Some(cached) = self.cache.get(package_name) {
                return cached.into();
            }

            match in_flight.get(package_name) {
                Some(request) => {
                    debug!("Joining in-flight request for {}", package_name);
                    request.clone()
                }
                None => {
                    let request = self.start_request(package_name);
                    in_flight.insert(package_name.to_string(), request.clone());
                    request
                }
            }
        };

        request.await
    }

    /// Returns the cached outcome for a package without touching the registry
    pub fn cached(&self, package_name: &str) -> Option<Lookup> {
        self.cache.get(package_name).map(Lookup::from)
    }

    /// Number of packages with a cached outcome
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Number of registry requests currently in flight
    pub fn in_flight_count(&self) -> usize {
        lock_in_flight(&self.in_flight).len()
    }

    /// Drops every cached outcome
    pub fn clear(&self) {
        info!("Clearing {} cached packages", self.cache.len());
        self.cache.clear();
    }

    fn start_request(&self, package_name: &str) -> InFlightRequest {
        let registry = Arc::clone(&self.registry);
        let cache = self.cache.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let package_name = package_name.to_string();

        async move {
            let lookup = match registry.fetch_metadata(&package_name).await {
                Ok(metadata) => {
                    info!(
                        "Fetched {} releases for {} (latest {})",
                        metadata.releases.len(),
                        package_name,
                        metadata.latest_version
                    );
                    cache
                        .insert_if_absent(&package_name, CachedLookup::Found(Arc::new(metadata)))
                        .into()
                }
                Err(RegistryError::NotFound(_)) => {
                    info!(
                        "Package not found: {}. Marking as not found to skip future fetches.",
                        package_name
                    );
                    cache
                        .insert_if_absent(&package_name, CachedLookup::NotFound)
                        .into()
                }
                Err(e) => {
                    warn!("Failed to fetch metadata for {}: {}", package_name, e);
                    Lookup::Unavailable
                }
            };

            // Cache is written before the request leaves the map, so callers
            // always find one or the other
            lock_in_flight(&in_flight).remove(&package_name);

            lookup
        }
        .boxed()
        .shared()
    }
}

fn lock_in_flight(in_flight: &Mutex<InFlightMap>) -> MutexGuard<'_, InFlightMap> {
    in_flight.lock().unwrap_or_else(|e| e.into_inner())
}
