//! The clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool cannot be used for this operation.
    NotSupported,
    /// The tool binary is missing.
    NotFound,
    /// The tool ran and failed.
    Failed(String),
}

/// A platform command that can place text on the clipboard.
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    /// Whether the tool can run on this machine.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;

    fn name(&self) -> &'static str {
        self.method().name()
    }
}
