//! Command handlers for the chromatext CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod encode;
pub mod import;
pub mod markup;
pub mod palette;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use chromatext::clipboard::copy::Copy;
use chromatext::clipboard::{ClipboardError, CopyResult};
use chromatext::Config;

/// Read a whole file, dropping one trailing newline.
pub fn read_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(strip_trailing_newline(text))
}

/// Read stdin if it is piped; `None` when stdin is a terminal or empty.
pub fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(strip_trailing_newline(text)))
}

/// Input from `--file`, else stdin.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_file(path),
        None => Ok(read_piped_stdin()?.unwrap_or_default()),
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Clipboard orchestrator honouring the configured size limit.
pub fn clipboard(config: &Config) -> Copy {
    Copy::new().max_size(config.clipboard_max_bytes())
}

/// Report a clipboard outcome on stderr. Failures are warnings, not errors.
pub fn report_copy(result: Result<CopyResult, ClipboardError>) {
    match result {
        Ok(result) => eprintln!("{}", result.message("ansi block")),
        Err(e) => eprintln!("Warning: {}", e),
    }
}
