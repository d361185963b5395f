//! Encode command handler

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use chromatext::ansi::LinePolicy;
use chromatext::cli::StyleSpec;
use chromatext::{Config, Editor};

use super::{clipboard, read_file, read_piped_stdin, report_copy};

/// Options for the encode command, straight from the CLI.
pub struct EncodeArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub styles: Vec<StyleSpec>,
    pub line_policy: Option<LinePolicy>,
    pub copy: bool,
    pub no_fence: bool,
}

/// Style the input text and print the ansi block.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let config = Config::load()?;

    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_file(&path)?,
        (None, None) => match read_piped_stdin()? {
            Some(text) => text,
            None => config.editor.initial_text.clone(),
        },
    };

    let editor = build_editor(text, &args.styles);

    let mut options = config.encode_options();
    if let Some(policy) = args.line_policy {
        options.line_policy = policy;
    }
    if args.no_fence {
        options.fence = false;
    }

    println!("{}", editor.export(&options));

    if args.copy || config.clipboard.enabled {
        report_copy(editor.copy_to(&clipboard(&config), &options));
    }
    Ok(())
}

/// Apply `styles` in order, warning about selections that cover no text.
pub(crate) fn build_editor(text: String, styles: &[StyleSpec]) -> Editor {
    let mut editor = Editor::new(text);
    for spec in styles {
        let selected = editor.document().selected_text(spec.selection);
        if selected.trim().is_empty() {
            eprintln!(
                "Warning: selection {} covers no text, skipping style {}",
                spec.selection,
                spec.code.name()
            );
            continue;
        }
        editor.apply(spec.selection, spec.code);
        debug!(
            selection = %spec.selection,
            code = spec.code.number(),
            text = %selected,
            "Styled selection"
        );
    }
    editor
}
