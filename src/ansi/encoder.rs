//! Document to ANSI escape text.
//!
//! The encoder walks runs in order and only emits a sequence when the style
//! changes. A change always closes the previous style with a full reset
//! before opening the new one; the per-attribute "off" codes (22, 24, 39,
//! 49) are never emitted.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Segment, StyleScope};
use crate::style::StyleState;

/// Full reset.
pub const RESET: &str = "\x1b[0m";

/// Opening line of the fenced block.
pub const FENCE_OPEN: &str = "```ansi";

/// Closing line of the fenced block.
pub const FENCE_CLOSE: &str = "```";

/// How active styles are handled at line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Keep the style open across the newline.
    #[default]
    Carry,
    /// Reset before every newline and re-open on the next line.
    Reopen,
}

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub line_policy: LinePolicy,
    /// Wrap the body in an `ansi` code fence.
    pub fence: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            line_policy: LinePolicy::Carry,
            fence: true,
        }
    }
}

/// The SGR sequence that opens `state`, or `None` for the empty state.
pub fn open_sequence(state: &StyleState) -> Option<String> {
    if state.is_empty() {
        None
    } else {
        Some(format!("\x1b[{}m", state.sgr_params()))
    }
}

/// Encode with default options: carried styles, fenced output.
pub fn encode(document: &Document) -> String {
    encode_with(document, &EncodeOptions::default())
}

pub fn encode_with(document: &Document, options: &EncodeOptions) -> String {
    let body = encode_body(document, options.line_policy);
    if options.fence {
        fence(&body)
    } else {
        body
    }
}

/// Flatten a scope tree and encode it.
pub fn encode_scopes(scope: &StyleScope, options: &EncodeOptions) -> String {
    encode_with(&scope.flatten(), options)
}

/// Wrap an escape-coded body in the `ansi` code fence.
pub fn fence(body: &str) -> String {
    format!("{FENCE_OPEN}\n{body}\n{FENCE_CLOSE}")
}

/// Escape text without the fence.
pub fn encode_body(document: &Document, line_policy: LinePolicy) -> String {
    let mut out = String::new();
    let mut emitted = StyleState::default();

    for segment in document.segments() {
        match segment {
            Segment::Run(run) => {
                if run.is_empty() {
                    continue;
                }
                let style = *run.style();
                if style != emitted {
                    if !emitted.is_empty() {
                        out.push_str(RESET);
                    }
                    if let Some(open) = open_sequence(&style) {
                        out.push_str(&open);
                    }
                    emitted = style;
                }
                out.push_str(run.text());
            }
            Segment::LineBreak => {
                if line_policy == LinePolicy::Reopen && !emitted.is_empty() {
                    out.push_str(RESET);
                    emitted = StyleState::default();
                }
                out.push('\n');
            }
        }
    }

    if !emitted.is_empty() {
        out.push_str(RESET);
    }
    out
}
