//! Palette command handler

use anyhow::Result;
use std::io::{self, IsTerminal};

use chromatext::ansi::{open_sequence, RESET};
use chromatext::style::{entries, Category, StyleState};

/// Print every style code with its name, slug and color.
pub fn handle() -> Result<()> {
    let color = use_color();
    println!("{:<5} {:<18} {:<18} {:<8} SAMPLE", "CODE", "NAME", "USE AS", "COLOR");

    for entry in entries() {
        let kind = match entry.code.category() {
            Category::Foreground => "fg",
            Category::Background => "bg",
            Category::Attribute => "attr",
        };
        let hex = entry
            .color()
            .map(|rgb| rgb.hex())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<5} {:<18} {:<18} {:<8} {}",
            entry.code.number(),
            entry.name,
            entry.code.slug(),
            hex,
            sample(entry.code, kind, color)
        );
    }
    Ok(())
}

fn sample(code: chromatext::StyleCode, kind: &str, color: bool) -> String {
    let label = format!(" {kind} sample ");
    if !color {
        return label;
    }
    match open_sequence(&StyleState::default().with(code)) {
        Some(open) => format!("{open}{label}{RESET}"),
        None => label,
    }
}

/// Colors only on a terminal, and never with NO_COLOR set.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}
