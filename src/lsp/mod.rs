//! LSP (Language Server Protocol) implementation layer
//!
//! This module handles communication with editors via LSP and answers
//! completion and hover requests for requirements files.
//!
//! # Modules
//!
//! - [`backend`]: Main LSP backend implementing `LanguageServer` trait
//! - [`completion`]: Version completion items for `name==` pins
//! - [`documents`]: Open document store and line extraction
//! - [`hover`]: Package description hover
//! - [`server`]: LSP server initialization and lifecycle

pub mod backend;
pub mod completion;
pub mod documents;
pub mod hover;
pub mod server;
