//! Package metadata layer
//!
//! Fetches package metadata from the package index, memoizes the outcome in
//! memory and orders releases for presentation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Service   │────▶│  Releases   │
//! │  (fetch)    │     │(cache+dedup)│     │  (ordering) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │    Cache    │
//! │   (pypi)    │     │ (in-memory) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory store of definitive lookup outcomes
//! - [`error`]: Error types for registry operations
//! - [`registry`]: Registry trait for fetching metadata from remote sources
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`releases`]: Newest-first ordering of releases
//! - [`service`]: Cached, deduplicated metadata lookups
//! - [`types`]: Common types like `PackageMetadata` and `Lookup`

pub mod cache;
pub mod error;
pub mod registries;
pub mod registry;
pub mod releases;
pub mod service;
pub mod types;
