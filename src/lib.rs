//! chromatext library
//!
//! Style text with the 16-color ANSI palette and export it as an
//! ```` ```ansi ```` code block for chat clients.

pub mod ansi;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod editor;
pub mod markup;
pub mod style;

pub use ansi::{decode, encode, encode_with, import, EncodeOptions, LinePolicy, VisualStyle};
pub use config::Config;
pub use document::{apply_style, reset_document, Document, Segment, Selection, TextRun};
pub use editor::Editor;
pub use style::{StyleCode, StyleState};
