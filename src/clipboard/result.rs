//! Outcome of a successful clipboard copy.

/// The tool that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    Xclip,
    Xsel,
    WlCopy,
}

impl CopyMethod {
    /// Command name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
            CopyMethod::WlCopy => "wl-copy",
        }
    }
}

/// Result of copying text to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-facing confirmation line.
    pub fn message(&self, what: &str) -> String {
        format!("Copied {} to clipboard ({} bytes via {})", what, self.size_bytes, self.tool.name())
    }
}
