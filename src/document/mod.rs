//! Style-run document model
//!
//! A [`Document`] is an ordered list of [`Segment`]s: styled text runs and
//! explicit line breaks. Editing is done with pure functions that take a
//! document and return a new one; nothing here holds state between calls.

mod scope;
mod selection;

pub use scope::{ScopeNode, StyleScope};
pub use selection::{Selection, SelectionParseError};

use serde::Serialize;
use tracing::debug;

use crate::style::{StyleCode, StyleState};

/// A contiguous piece of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    text: String,
    style: StyleState,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleState::default())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One element of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Run(TextRun),
    LineBreak,
}

impl Segment {
    fn char_len(&self) -> usize {
        match self {
            Segment::Run(run) => run.char_len(),
            Segment::LineBreak => 1,
        }
    }
}

/// Styled text as runs and line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text runs only, skipping line breaks.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Run(run) => Some(run),
            Segment::LineBreak => None,
        })
    }

    /// Concatenated text, with `\n` for every line break.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Run(run) => text.push_str(run.text()),
                Segment::LineBreak => text.push('\n'),
            }
        }
        text
    }

    pub fn char_len(&self) -> usize {
        self.segments.iter().map(Segment::char_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.char_len() == 0
    }

    /// Text covered by `selection`, clamped to the document.
    pub fn selected_text(&self, selection: Selection) -> String {
        let range = selection.clamp(self.char_len());
        self.plain_text()
            .chars()
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    /// Merge neighbouring runs with identical style and drop empty runs.
    pub fn compact(&self) -> Document {
        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Run(run) if run.is_empty() => {}
                Segment::Run(run) => match segments.last_mut() {
                    Some(Segment::Run(prev)) if prev.style == run.style => {
                        prev.text.push_str(&run.text);
                    }
                    _ => segments.push(segment.clone()),
                },
                Segment::LineBreak => segments.push(Segment::LineBreak),
            }
        }
        Document { segments }
    }
}

/// Start over with unstyled `initial_text`.
///
/// Text without line breaks becomes exactly one run (even when empty).
/// Each `\n` (or `\r\n`) becomes a line-break marker between the runs of
/// the surrounding lines; empty lines contribute no run.
pub fn reset_document(initial_text: &str) -> Document {
    if !initial_text.contains('\n') {
        return Document::from_segments(vec![Segment::Run(TextRun::plain(initial_text))]);
    }

    let mut segments = Vec::new();
    for (index, line) in initial_text.split('\n').enumerate() {
        if index > 0 {
            segments.push(Segment::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            segments.push(Segment::Run(TextRun::plain(line)));
        }
    }
    Document::from_segments(segments)
}

/// Apply `code` to the text covered by `selection`.
///
/// Runs that straddle a selection boundary are split so the selected part
/// gets its own run; the parts outside keep their original style. Line
/// breaks are never restyled. An empty selection, or one covering only
/// whitespace, returns the document unchanged.
pub fn apply_style(document: &Document, selection: Selection, code: StyleCode) -> Document {
    let range = selection.clamp(document.char_len());
    if range.is_empty() {
        debug!(%selection, "Empty selection, nothing to style");
        return document.clone();
    }
    if document.selected_text(range).trim().is_empty() {
        debug!(%selection, "Blank selection, nothing to style");
        return document.clone();
    }

    let mut segments = Vec::with_capacity(document.segments.len() + 2);
    let mut offset = 0;

    for segment in &document.segments {
        let run = match segment {
            Segment::Run(run) => run,
            Segment::LineBreak => {
                segments.push(Segment::LineBreak);
                offset += 1;
                continue;
            }
        };

        let run_start = offset;
        let run_end = offset + run.char_len();
        offset = run_end;

        if run_end <= range.start || run_start >= range.end {
            segments.push(segment.clone());
            continue;
        }

        let cut_from = range.start.saturating_sub(run_start);
        let cut_to = (range.end - run_start).min(run.char_len());
        let (before, middle, after) = split_at_chars(run.text(), cut_from, cut_to);

        if !before.is_empty() {
            segments.push(Segment::Run(TextRun::new(before, run.style)));
        }
        segments.push(Segment::Run(TextRun::new(middle, run.style.with(code))));
        if !after.is_empty() {
            segments.push(Segment::Run(TextRun::new(after, run.style)));
        }
    }

    debug!(%selection, code = code.number(), segments = segments.len(), "Applied style");
    Document::from_segments(segments)
}

/// Split `text` into `[..from]`, `[from..to]` and `[to..]` by character index.
fn split_at_chars(text: &str, from: usize, to: usize) -> (&str, &str, &str) {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len())
    };
    let (from, to) = (byte_at(from), byte_at(to));
    (&text[..from], &text[from..to], &text[to..])
}
