//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::ansi::{EncodeOptions, LinePolicy};
use crate::clipboard::MAX_CONTENT_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Encoder settings derived from `[output]`.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            line_policy: self.output.line_policy,
            fence: self.output.fence,
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Text a fresh or reset document starts with
    #[serde(default = "default_initial_text")]
    pub initial_text: String,
}

pub fn default_initial_text() -> String {
    "Welcome to Rebane's Discord Colored Text Generator!".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: default_initial_text(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Style handling at line breaks: "carry" or "reopen"
    #[serde(default)]
    pub line_policy: LinePolicy,
    /// Wrap output in an ```ansi fence
    #[serde(default = "default_fence")]
    pub fence: bool,
}

pub fn default_fence() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_policy: LinePolicy::default(),
            fence: default_fence(),
        }
    }
}

/// Clipboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Copy every encoded block to the clipboard without --copy
    #[serde(default)]
    pub enabled: bool,
    /// Refuse to copy blocks larger than this
    #[serde(default = "default_max_size_kb")]
    pub max_size_kb: usize,
}

pub fn default_max_size_kb() -> usize {
    MAX_CONTENT_SIZE / 1024
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_size_kb: default_max_size_kb(),
        }
    }
}
