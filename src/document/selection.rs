//! Selection ranges over a document's flattened text.

use std::fmt;
use std::str::FromStr;

/// Errors from parsing a `START..END` range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    #[error("Invalid range '{0}': expected START..END (e.g. 0..5)")]
    Malformed(String),

    #[error("Invalid range '{input}': start {start} is after end {end}")]
    Reversed {
        input: String,
        start: usize,
        end: usize,
    },
}

/// A half-open `[start, end)` range of character offsets.
///
/// Offsets count Unicode scalar values; a line break counts as one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clamp both ends to `len`.
    pub fn clamp(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for Selection {
    type Err = SelectionParseError;

    /// Parses `START..END`; an omitted bound means the start or the end of the text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SelectionParseError::Malformed(s.to_string());
        let (start, end) = s.trim().split_once("..").ok_or_else(malformed)?;

        let start = if start.is_empty() {
            0
        } else {
            start.parse().map_err(|_| malformed())?
        };
        let end = if end.is_empty() {
            usize::MAX
        } else {
            end.parse().map_err(|_| malformed())?
        };

        if start > end {
            return Err(SelectionParseError::Reversed {
                input: s.to_string(),
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }
}
