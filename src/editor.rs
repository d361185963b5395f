//! Editor controller.
//!
//! Owns the one mutable document and the text it resets to. Every edit is
//! delegated to the pure functions in [`crate::document`]; the controller
//! just swaps in the result.

use tracing::{debug, info};

use crate::ansi::{encode_with, EncodeOptions};
use crate::clipboard::copy::Copy;
use crate::clipboard::{ClipboardError, CopyResult};
use crate::document::{apply_style, reset_document, Document, Selection};
use crate::style::StyleCode;

#[derive(Debug, Clone)]
pub struct Editor {
    initial_text: String,
    document: Document,
}

impl Editor {
    pub fn new(initial_text: impl Into<String>) -> Self {
        let initial_text = initial_text.into();
        let document = reset_document(&initial_text);
        Self {
            initial_text,
            document,
        }
    }

    /// Wrap an existing document; resetting returns to its plain text.
    pub fn from_document(document: Document) -> Self {
        Self {
            initial_text: document.plain_text(),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    /// Apply `code` to `selection`. Returns false when the selection was
    /// empty or blank and nothing changed.
    pub fn apply(&mut self, selection: Selection, code: StyleCode) -> bool {
        let next = apply_style(&self.document, selection, code);
        let changed = next != self.document;
        self.document = next;
        changed
    }

    /// Replace the document with the unstyled initial text.
    pub fn reset(&mut self) {
        debug!("Resetting document");
        self.document = reset_document(&self.initial_text);
    }

    /// Replace the text entirely; the new text becomes the reset target.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.initial_text = text.into();
        self.reset();
    }

    pub fn export(&self, options: &EncodeOptions) -> String {
        encode_with(&self.document, options)
    }

    /// Export and hand the result to `clipboard`.
    ///
    /// # Errors
    /// Returns the clipboard failure unchanged; the document is unaffected.
    pub fn copy_to(
        &self,
        clipboard: &Copy,
        options: &EncodeOptions,
    ) -> Result<CopyResult, ClipboardError> {
        let text = self.export(options);
        let result = clipboard.text(&text)?;
        info!(tool = result.tool.name(), bytes = result.size_bytes, "Copied export to clipboard");
        Ok(result)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(crate::config::default_initial_text())
    }
}
