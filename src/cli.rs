//! CLI definitions for chromatext
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be tested without running the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ansi::LinePolicy;
use crate::document::{Selection, SelectionParseError};
use crate::style::{StyleCode, UnknownStyleName};

/// Build clap styles using the palette's accent colors.
///
/// - Blue: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Blue.on_default() | Effects::BOLD)
        .usage(AnsiColor::Blue.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Errors from parsing a `--style` argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleSpecError {
    #[error("Invalid style '{0}': expected START..END=CODE (e.g. 0..5=red)")]
    MissingCode(String),

    #[error(transparent)]
    Range(#[from] SelectionParseError),

    #[error(transparent)]
    Code(#[from] UnknownStyleName),
}

/// One `--style START..END=CODE` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub selection: Selection,
    pub code: StyleCode,
}

impl FromStr for StyleSpec {
    type Err = StyleSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (range, code) = s
            .rsplit_once('=')
            .ok_or_else(|| StyleSpecError::MissingCode(s.to_string()))?;
        Ok(Self {
            selection: range.parse()?,
            code: code.parse()?,
        })
    }
}

#[derive(Parser)]
#[command(name = "chromatext")]
#[command(
    about = "[ chromatext ] - color text with the 16-color ANSI palette for chat code blocks"
)]
#[command(
    long_about = "chromatext - style text with foreground colors, background colors, bold and
underline, then export it as an ```ansi code block that chat clients render in color.

QUICK START:
    chromatext encode \"Hello world\" -s 0..5=red -s 0..5=bold
    chromatext encode --file notes.txt -s 6..=light-blue --copy
    chromatext palette                 List every code and its color
    chromatext import --file block.txt Inspect an existing ansi block

Selections are character offsets; a line break counts as one character."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Style text and print it as an ansi code block
    #[command(long_about = "Style text and print it as an ansi code block.

Text comes from the argument, from --file, or from stdin when neither is
given and stdin is not a terminal. Without any input the configured
initial text is used. Styles are applied left to right; a later color
replaces an earlier one on the same range, bold and underline accumulate.

EXAMPLES:
    chromatext encode \"Hello\" -s 0..5=31 -s 0..5=bold
    echo 'error: oops' | chromatext encode -s 0..5=red
    chromatext encode --file motd.txt -s ..=blurple --line-policy reopen
    chromatext encode \"Copy me\" -s 0..4=gold --copy")]
    Encode {
        /// Text to style
        text: Option<String>,
        /// Read text from a file instead
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Style to apply, as START..END=CODE (code number or name)
        #[arg(long = "style", short = 's', value_name = "START..END=CODE")]
        styles: Vec<StyleSpec>,
        /// How styles continue across line breaks (default from config)
        #[arg(long, value_enum)]
        line_policy: Option<LinePolicy>,
        /// Also copy the result to the clipboard
        #[arg(long, short)]
        copy: bool,
        /// Print the escape text without the ```ansi fence
        #[arg(long)]
        no_fence: bool,
    },

    /// List the style codes
    #[command(long_about = "List every style code with its name and palette color.

Names in the second column can be used wherever a code is expected,
e.g. -s 0..5=light-blue or -s 0..5=34.

EXAMPLE:
    chromatext palette")]
    Palette,

    /// Parse an ansi block and show its runs
    #[command(long_about = "Parse escape-coded text (with or without the ```ansi fence)
and show the styled runs it contains.

EXAMPLES:
    chromatext import --file block.txt
    pbpaste | chromatext import --json
    chromatext import --file block.txt --encode    Re-emit a minimal block")]
    Import {
        /// Read from a file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Print runs as JSON
        #[arg(long, conflicts_with = "encode")]
        json: bool,
        /// Re-encode the parsed document instead of listing runs
        #[arg(long)]
        encode: bool,
    },

    /// Convert between ansi blocks and styled HTML markup
    #[command(subcommand)]
    Markup(MarkupCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    chromatext completions bash > ~/.local/share/bash-completion/completions/chromatext
    chromatext completions zsh > ~/.zfunc/_chromatext")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum MarkupCommands {
    /// Render an ansi block as HTML spans
    #[command(long_about = "Read escape-coded text and print it as HTML markup with
inline-styled <span> elements and <br> line breaks.

EXAMPLE:
    chromatext markup render --file block.txt > preview.html")]
    Render {
        /// Read from a file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Sanitize HTML markup and encode it as an ansi block
    #[command(long_about = "Read styled HTML (for example pasted from a rich text editor),
strip scripts, iframes and event handlers, recover the palette codes
from inline styles and print the ansi block. Colors outside the palette
are dropped.

EXAMPLE:
    chromatext markup ingest --file pasted.html --copy")]
    Ingest {
        /// Read from a file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Also copy the result to the clipboard
        #[arg(long, short)]
        copy: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Config file location: ~/.config/chromatext/config.toml

EXAMPLE:
    chromatext config show")]
    Show,
    /// Write a config file with default values
    #[command(long_about = "Write the default configuration to ~/.config/chromatext/config.toml.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    chromatext config init")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
