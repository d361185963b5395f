//! Config subcommands handler

use anyhow::{bail, Result};

use chromatext::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let config_path = Config::config_path()?;
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "defaults, no config file".to_string()
    };
    println!("# {}", source);
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Write the default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    let written = Config::default().save()?;
    println!("Wrote {}", written.display());
    Ok(())
}
