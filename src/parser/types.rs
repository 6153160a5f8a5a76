//! Dependency-list document detection

/// Language identifiers editors use for pip requirements files
pub const REQUIREMENTS_LANGUAGE_IDS: &[&str] = &["pip-requirements", "requirements"];

/// Returns true if the document is a pip requirements-style dependency list,
/// judged by its language id or, failing that, its file name
pub fn is_requirements_document(uri: &str, language_id: &str) -> bool {
    REQUIREMENTS_LANGUAGE_IDS.contains(&language_id) || is_requirements_file_name(uri)
}

fn is_requirements_file_name(uri: &str) -> bool {
    let file_name = uri.rsplit(['/', '\\']).next().unwrap_or(uri);

    (file_name.starts_with("requirements")
        && (file_name.ends_with(".txt") || file_name.ends_with(".in")))
        || file_name.ends_with("-requirements.txt")
        || (file_name.starts_with("constraints") && file_name.ends_with(".txt"))
}
