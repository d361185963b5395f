//! macOS pbcopy clipboard tool.

use std::process::Command;

use super::pipe_command;
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// macOS pasteboard tool.
pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Pbcopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::Pbcopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        // pbcopy decodes stdin using LANG; without it non-ASCII text is mangled
        let mut command = Command::new("pbcopy");
        if std::env::var_os("LANG").is_none() {
            command.env("LANG", "en_US.UTF-8");
        }
        pipe_command(command, text)
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
