//! Parser layer
//! - types.rs: dependency-list document detection
//! - requirements.rs: requirements.txt line matching

pub mod requirements;
pub mod types;

pub use requirements::RequirementsParser;
pub use types::is_requirements_document;
