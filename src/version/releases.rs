//! Ordering of release entries for version completion

use std::cmp::Ordering;

use crate::version::types::{PackageMetadata, ReleaseEntry};

/// Builds the release list of a package, newest first
///
/// Releases with an upload time come first, ordered by upload time. Releases
/// without one follow, ordered by [`compare_version_text`].
pub fn build_version_list(metadata: &PackageMetadata) -> Vec<ReleaseEntry> {
    let mut entries = metadata.releases.clone();
    entries.sort_by(compare_newest_first);
    entries
}

/// Orders two releases so that the newer one sorts first
pub fn compare_newest_first(a: &ReleaseEntry, b: &ReleaseEntry) -> Ordering {
    match (&a.upload_time, &b.upload_time) {
        // ISO-8601 timestamps sort chronologically as plain strings
        (Some(a_time), Some(b_time)) => b_time
            .cmp(a_time)
            .then_with(|| compare_version_text(&b.version, &a.version)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_version_text(&b.version, &a.version),
    }
}

/// Compares versions as sequences of dot-separated text components
///
/// Components are compared as strings, not numbers, so `"10"` sorts before
/// `"9"`.
pub fn compare_version_text(a: &str, b: &str) -> Ordering {
    a.split('.').cmp(b.split('.'))
}
