//! Package description on hover

use tower_lsp::lsp_types::{Hover, HoverContents, MarkedString};
use tracing::debug;

use crate::parser::requirements::RequirementsParser;
use crate::version::service::PackageMetadataService;
use crate::version::types::Lookup;

/// Look up the description of the package named at the start of `line`
///
/// Returns None when the line does not start with a package name, the
/// package cannot be looked up, or its description is empty.
pub async fn hover_description(
    service: &PackageMetadataService,
    parser: &RequirementsParser,
    line: &str,
) -> Option<String> {
    let package_name = parser.leading_package(line)?;

    match service.fetch(package_name).await {
        Lookup::Found(metadata) if !metadata.latest_description.is_empty() => {
            Some(metadata.latest_description.clone())
        }
        lookup => {
            debug!("No description for {}: {:?}", package_name, lookup);
            None
        }
    }
}

/// Wrap a description as plain hover content, without any markup processing
pub fn description_hover(description: String) -> Hover {
    Hover {
        contents: HoverContents::Scalar(MarkedString::String(description)),
        range: None,
    }
}
