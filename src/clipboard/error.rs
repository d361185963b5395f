//! Clipboard operation errors.

/// Default upper bound for clipboard content (512 KiB).
pub const MAX_CONTENT_SIZE: usize = 512 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Text too large for clipboard ({size_kb} KB). Maximum is {max_kb} KB.")]
    ContentTooLarge { size_kb: usize, max_kb: usize },

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
