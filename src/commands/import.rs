//! Import command handler

use anyhow::{Context, Result};
use std::path::Path;

use chromatext::ansi::import;
use chromatext::document::{Document, Segment};
use chromatext::{Config, Editor};

use super::read_input;

/// Parse an ansi block and show (or re-emit) its runs.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, json: bool, encode: bool) -> Result<()> {
    let input = read_input(file)?;
    let document = import(&input).compact();

    if encode {
        let config = Config::load()?;
        let editor = Editor::from_document(document);
        println!("{}", editor.export(&config.encode_options()));
    } else if json {
        let out = serde_json::to_string_pretty(&document).context("Failed to serialize runs")?;
        println!("{}", out);
    } else {
        print!("{}", format_runs(&document));
    }
    Ok(())
}

/// One line per segment: offset, style codes and the quoted text.
pub(crate) fn format_runs(document: &Document) -> String {
    let mut out = String::new();
    let mut offset = 0;
    for segment in document.segments() {
        match segment {
            Segment::Run(run) => {
                let codes = match run.style().sgr_params() {
                    params if params.is_empty() => "-".to_string(),
                    params => params,
                };
                out.push_str(&format!("{:>5}  {:<12} {:?}\n", offset, codes, run.text()));
                offset += run.char_len();
            }
            Segment::LineBreak => {
                out.push_str(&format!("{:>5}  line break\n", offset));
                offset += 1;
            }
        }
    }
    out
}
