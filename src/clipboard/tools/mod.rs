//! Platform clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(Pbcopy::new())]
    } else if cfg!(target_os = "linux") {
        vec![
            Box::new(WlCopy::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    } else {
        Vec::new()
    }
}

/// Check whether `program` is on the PATH.
pub(crate) fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` with `args` and write `text` to its stdin.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut command = Command::new(program);
    command.args(args);
    pipe_command(command, text)
}

/// Spawn `command`, write `text` to its stdin and wait for it to exit.
///
/// Only stdin is piped. xclip and wl-copy leave a child behind to serve the
/// selection, and that child must not hold any pipe we read to EOF.
pub(crate) fn pipe_command(mut command: Command, text: &str) -> Result<(), CopyToolError> {
    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // stdin is dropped by now, so the tool sees EOF

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;
    written.map_err(|e| CopyToolError::Failed(format!("{program}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{program} exited with {status}")))
    }
}
