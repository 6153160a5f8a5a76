pub mod config;
pub mod log;
pub mod lsp;
pub mod parser;
pub mod version;
