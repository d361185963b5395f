//! ANSI escape text back into a document.
//!
//! Uses the `vte` state machine to split the input into printable text and
//! control sequences. Only SGR (`CSI ... m`) is interpreted; everything else
//! is dropped.

use tracing::trace;
use vte::{Params, Parser, Perform};

use super::encoder::{FENCE_CLOSE, FENCE_OPEN};
use crate::document::{Document, Segment, TextRun};
use crate::style::{StyleCode, StyleState};

/// Parse escape-coded text, with or without the `ansi` fence, into a document.
///
/// Adjacent text with the same style ends up in one run.
pub fn import(text: &str) -> Document {
    let body = strip_fence(text);
    let mut performer = ImportPerformer::default();
    let mut parser = Parser::new();
    parser.advance(&mut performer, body.as_bytes());
    performer.finish()
}

/// Return the body of a fenced `ansi` block, or `text` unchanged when it is
/// not one.
pub fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim_start().trim_end_matches(['\r', '\n']);
    let body = trimmed
        .strip_prefix(FENCE_OPEN)
        .and_then(|rest| rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')))
        .and_then(|rest| rest.strip_suffix(FENCE_CLOSE));

    match body {
        Some(body) => body
            .strip_suffix("\r\n")
            .or_else(|| body.strip_suffix('\n'))
            .unwrap_or(body),
        None => text,
    }
}

#[derive(Default)]
struct ImportPerformer {
    segments: Vec<Segment>,
    pending: String,
    style: StyleState,
}

impl ImportPerformer {
    /// Close the text collected so far under the current style.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        match self.segments.last_mut() {
            Some(Segment::Run(prev)) if *prev.style() == self.style => {
                let merged = format!("{}{}", prev.text(), text);
                *prev = TextRun::new(merged, self.style);
            }
            _ => self.segments.push(Segment::Run(TextRun::new(text, self.style))),
        }
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document::from_segments(self.segments)
    }

    fn set_style(&mut self, style: StyleState) {
        if style != self.style {
            self.flush();
            self.style = style;
        }
    }

    /// Apply SGR parameters to the current style.
    fn handle_sgr(&mut self, params: &[u16]) {
        let mut style = self.style;
        let mut iter = params.iter().peekable();

        if params.is_empty() {
            style = StyleState::default();
        }

        while let Some(&param) = iter.next() {
            match param {
                0 => style = StyleState::default(),
                1 => style.set_bold(true),
                4 => style.set_underline(true),
                22 => style.set_bold(false),
                24 => style.set_underline(false),
                39 => style.clear_foreground(),
                49 => style.clear_background(),
                38 | 48 => {
                    // Extended colors are outside the palette; skip their arguments
                    let skip = match iter.next() {
                        Some(5) => 1,
                        Some(2) => 3,
                        _ => 0,
                    };
                    for _ in 0..skip {
                        iter.next();
                    }
                    trace!(param, "Ignoring extended color");
                }
                30..=37 | 40..=47 => {
                    if let Ok(code) = StyleCode::try_from(param as u8) {
                        style.apply(code);
                    }
                }
                _ => trace!(param, "Ignoring unsupported SGR parameter"),
            }
        }

        self.set_style(style);
    }
}

impl Perform for ImportPerformer {
    fn print(&mut self, c: char) {
        self.pending.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.flush();
                self.segments.push(Segment::LineBreak);
            }
            b'\t' => self.pending.push('\t'),
            b'\r' => {}
            _ => trace!(byte, "Ignoring control character"),
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();

        if action == 'm' && intermediates.is_empty() {
            self.handle_sgr(&params);
        } else {
            trace!(
                action = %action,
                params = ?params,
                intermediates = ?intermediates,
                "Ignoring CSI sequence"
            );
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        trace!(
            byte = byte,
            byte_char = %char::from(byte),
            intermediates = ?intermediates,
            "Ignoring ESC sequence"
        );
    }
}
