//! Styled markup: rendering target and ingest path for pasted content.
//!
//! The document stays authoritative. [`render`] turns it into inline-styled
//! `<span>` markup; [`ingest`] takes markup coming back from an editor,
//! sanitizes it, and recovers a document through the visual-style decoder.

mod ingest;
mod sanitize;

pub use ingest::ingest;
pub use sanitize::sanitize;

use crate::ansi::VisualStyle;
use crate::document::{Document, Segment};

/// Render a document as HTML markup.
///
/// Styled runs become `<span style="...">`, unstyled runs are bare text and
/// line breaks are `<br>`.
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    for segment in document.segments() {
        match segment {
            Segment::Run(run) if run.is_empty() => {}
            Segment::Run(run) if run.style().is_empty() => out.push_str(&escape(run.text())),
            Segment::Run(run) => {
                let css = VisualStyle::from_state(run.style()).to_css();
                out.push_str(&format!(
                    "<span style=\"{}\">{}</span>",
                    escape(&css),
                    escape(run.text())
                ));
            }
            Segment::LineBreak => out.push_str("<br>"),
        }
    }
    out
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the character references produced by editors.
///
/// Handles the named references `amp`, `lt`, `gt`, `quot`, `apos`, `nbsp`
/// and decimal or hex numeric references. Anything else is kept verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_reference(&tail[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let number = name.strip_prefix('#')?;
            let value = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
