//! Copy orchestrator for clipboard operations.

use tracing::{debug, warn};

use super::error::{ClipboardError, MAX_CONTENT_SIZE};
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
/// A failing tool is logged and skipped, never retried.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
    max_size: usize,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self::with_tools(platform_tools())
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self {
            tools,
            max_size: MAX_CONTENT_SIZE,
        }
    }

    /// Override the content size limit (bytes).
    pub fn max_size(mut self, bytes: usize) -> Self {
        self.max_size = bytes;
        self
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    ///
    /// # Errors
    /// - `ClipboardError::ContentTooLarge` - text exceeds the size limit
    /// - `ClipboardError::UnsupportedPlatform` - no tools exist for this OS
    /// - `ClipboardError::NoToolAvailable` - every tool was missing or failed
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.len() > self.max_size {
            return Err(ClipboardError::ContentTooLarge {
                size_kb: text.len().div_ceil(1024),
                max_kb: self.max_size / 1024,
            });
        }
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_error: Option<String> = None;
        for tool in &self.tools {
            if !tool.is_available() {
                debug!(tool = tool.name(), "Clipboard tool not available");
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => return Ok(CopyResult::new(tool.method(), text.len())),
                Err(CopyToolError::NotSupported) | Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    warn!(
                        tool = tool.name(),
                        error = %msg,
                        "Clipboard tool failed, trying next tool"
                    );
                    last_error = Some(msg);
                }
            }
        }

        if let Some(err) = last_error {
            warn!(error = %err, "All clipboard tools failed");
        }
        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
