//! Markup subcommands handler

use anyhow::Result;
use std::path::Path;

use chromatext::ansi::import;
use chromatext::markup::{ingest, render};
use chromatext::{Config, Editor};

use super::{clipboard, read_input, report_copy};

/// Render an ansi block as HTML spans.
#[cfg(not(tarpaulin_include))]
pub fn handle_render(file: Option<&Path>) -> Result<()> {
    let input = read_input(file)?;
    println!("{}", render(&import(&input).compact()));
    Ok(())
}

/// Sanitize pasted markup and print it as an ansi block.
#[cfg(not(tarpaulin_include))]
pub fn handle_ingest(file: Option<&Path>, copy: bool) -> Result<()> {
    let config = Config::load()?;
    let input = read_input(file)?;
    let options = config.encode_options();
    let editor = Editor::from_document(ingest(&input).compact());
    println!("{}", editor.export(&options));

    if copy || config.clipboard.enabled {
        report_copy(editor.copy_to(&clipboard(&config), &options));
    }
    Ok(())
}
