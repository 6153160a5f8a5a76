//! Open document store
//!
//! Keeps the full text of every open dependency-list document so completion
//! and hover requests can look at the line under the cursor.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tower_lsp::lsp_types::{Position, Url};
use tracing::debug;

use crate::parser::types::is_requirements_document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub language_id: String,
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<Url, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Url, Document>> {
        self.documents.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Url, Document>> {
        self.documents.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Starts tracking a document if it is a dependency list
    ///
    /// Returns false for documents of any other kind, which are ignored.
    pub fn open(&self, uri: Url, language_id: String, text: String) -> bool {
        if !is_requirements_document(uri.as_str(), &language_id) {
            debug!("Ignoring document {} ({})", uri, language_id);
            return false;
        }

        self.write().insert(uri, Document { text, language_id });
        true
    }

    /// Replaces the text of a tracked document
    pub fn update(&self, uri: &Url, text: String) {
        if let Some(document) = self.write().get_mut(uri) {
            document.text = text;
        }
    }

    pub fn close(&self, uri: &Url) {
        self.write().remove(uri);
    }

    pub fn get(&self, uri: &Url) -> Option<Document> {
        self.read().get(uri).cloned()
    }

    /// Returns the full text of the line at `position`
    pub fn line(&self, uri: &Url, position: Position) -> Option<String> {
        let documents = self.read();
        let document = documents.get(uri)?;
        line_at(&document.text, position.line).map(str::to_string)
    }

    /// Returns the text from the start of the line up to the cursor
    pub fn line_prefix(&self, uri: &Url, position: Position) -> Option<String> {
        let documents = self.read();
        let document = documents.get(uri)?;
        let line = line_at(&document.text, position.line)?;
        Some(line_prefix(line, position.character).to_string())
    }
}

/// Returns the line with the given 0-indexed number, without its line ending
pub fn line_at(text: &str, line: u32) -> Option<&str> {
    text.lines().nth(line as usize)
}

/// Returns the part of `line` before the UTF-16 column `character`
///
/// Columns past the end of the line are clamped to the line length.
pub fn line_prefix(line: &str, character: u32) -> &str {
    let mut utf16_offset = 0usize;
    for (byte_offset, ch) in line.char_indices() {
        if utf16_offset >= character as usize {
            return &line[..byte_offset];
        }
        utf16_offset += ch.len_utf16();
    }
    line
}
