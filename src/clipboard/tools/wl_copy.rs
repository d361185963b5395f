//! Wayland wl-copy clipboard tool.

use super::{pipe_text, tool_exists};
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Wayland clipboard tool from wl-clipboard.
///
/// Only offered when a Wayland session is detected.
pub struct WlCopy;

impl WlCopy {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && tool_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("wl-copy", &["--type", "text/plain;charset=utf-8"], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
