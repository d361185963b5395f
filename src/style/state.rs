//! Active style at a point in the text.

use serde::Serialize;
use std::collections::BTreeSet;

use super::registry::{Category, StyleCode};

/// A set of style codes, ordered by SGR number.
pub type StyleSet = BTreeSet<StyleCode>;

/// The style codes active for a run of text.
///
/// Holds at most one foreground and one background code. Applying a code of
/// a color category replaces whatever occupied that slot; bold and underline
/// are independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StyleState {
    foreground: Option<StyleCode>,
    background: Option<StyleCode>,
    bold: bool,
    underline: bool,
}

impl StyleState {
    /// Build a state by applying `codes` in order.
    pub fn from_codes<I: IntoIterator<Item = StyleCode>>(codes: I) -> Self {
        let mut state = Self::default();
        for code in codes {
            state.apply(code);
        }
        state
    }

    pub fn foreground(&self) -> Option<StyleCode> {
        self.foreground
    }

    pub fn background(&self) -> Option<StyleCode> {
        self.background
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn underline(&self) -> bool {
        self.underline
    }

    /// True when no code is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply one code in place.
    pub fn apply(&mut self, code: StyleCode) {
        match code.category() {
            Category::Foreground => self.foreground = Some(code),
            Category::Background => self.background = Some(code),
            Category::Attribute => match code {
                StyleCode::Bold => self.bold = true,
                _ => self.underline = true,
            },
        }
    }

    /// Copy of `self` with `code` applied.
    pub fn with(mut self, code: StyleCode) -> Self {
        self.apply(code);
        self
    }

    pub fn clear_foreground(&mut self) {
        self.foreground = None;
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }

    pub fn set_bold(&mut self, on: bool) {
        self.bold = on;
    }

    pub fn set_underline(&mut self, on: bool) {
        self.underline = on;
    }

    /// Active codes in emission order: bold, underline, foreground, background.
    pub fn codes(&self) -> Vec<StyleCode> {
        let mut codes = Vec::with_capacity(4);
        if self.bold {
            codes.push(StyleCode::Bold);
        }
        if self.underline {
            codes.push(StyleCode::Underline);
        }
        codes.extend(self.foreground);
        codes.extend(self.background);
        codes
    }

    pub fn code_set(&self) -> StyleSet {
        self.codes().into_iter().collect()
    }

    /// Parameters of the opening SGR sequence, e.g. `"1;31"`.
    pub fn sgr_params(&self) -> String {
        self.codes()
            .iter()
            .map(|code| code.number().to_string())
            .collect::<Vec<_>>()
            .join(";")
    }
}
