//! chromatext - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chromatext::cli::{Cli, Commands, ConfigCommands, MarkupCommands};
use commands::encode::EncodeArgs;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "CHROMATEXT_LOG";

/// Log to stderr; `CHROMATEXT_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "chromatext=debug",
        _ => "chromatext=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            text,
            file,
            styles,
            line_policy,
            copy,
            no_fence,
        } => commands::encode::handle(EncodeArgs {
            text,
            file,
            styles,
            line_policy,
            copy,
            no_fence,
        }),
        Commands::Palette => commands::palette::handle(),
        Commands::Import { file, json, encode } => {
            commands::import::handle(file.as_deref(), json, encode)
        }
        Commands::Markup(cmd) => match cmd {
            MarkupCommands::Render { file } => commands::markup::handle_render(file.as_deref()),
            MarkupCommands::Ingest { file, copy } => {
                commands::markup::handle_ingest(file.as_deref(), copy)
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
