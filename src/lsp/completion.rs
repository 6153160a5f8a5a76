//! Version completion for `name==` pins

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind};
use tracing::debug;

use crate::parser::requirements::RequirementsParser;
use crate::version::releases::build_version_list;
use crate::version::service::PackageMetadataService;
use crate::version::types::{Lookup, PackageMetadata};

/// Character that triggers completion after a package name
pub const TRIGGER_CHARACTER: &str = "=";

/// Generate version completions for the text before the cursor
///
/// Returns an empty Vec when the text is not a `name==` pin or when the
/// package cannot be looked up.
pub async fn complete_versions(
    service: &PackageMetadataService,
    parser: &RequirementsParser,
    line_prefix: &str,
) -> Vec<CompletionItem> {
    let Some(package_name) = parser.pinned_package(line_prefix) else {
        return vec![];
    };

    match service.fetch(package_name).await {
        Lookup::Found(metadata) => version_items(&metadata),
        lookup => {
            debug!("No versions to complete for {}: {:?}", package_name, lookup);
            vec![]
        }
    }
}

/// One completion item per release, newest first
///
/// `sort_text` carries the zero-padded rank so editors keep this order
/// instead of sorting labels alphabetically.
pub fn version_items(metadata: &PackageMetadata) -> Vec<CompletionItem> {
    build_version_list(metadata)
        .into_iter()
        .enumerate()
        .map(|(rank, release)| CompletionItem {
            label: release.version,
            kind: Some(CompletionItemKind::VALUE),
            sort_text: Some(format!("{rank:08}")),
            detail: Some(release.upload_time.unwrap_or_default()),
            ..Default::default()
        })
        .collect()
}
