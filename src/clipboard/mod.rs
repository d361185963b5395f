//! Clipboard sink for exported text.
//!
//! Platform tools (`pbcopy` on macOS; `wl-copy`, `xclip`, `xsel` on Linux)
//! are tried in order until one accepts the text. A failed copy is reported
//! to the caller once; the document being exported is never touched.
//!
//! # Example
//!
//! ```ignore
//! use chromatext::clipboard::copy::Copy;
//!
//! let result = Copy::new().max_size(64 * 1024).text("```ansi\nhello\n```")?;
//! println!("{}", result.message("ansi block"));
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::{ClipboardError, MAX_CONTENT_SIZE};
pub use result::{CopyMethod, CopyResult};
