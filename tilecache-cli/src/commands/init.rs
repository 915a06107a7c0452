//! Init command - initialize configuration file.

use std::path::{Path, PathBuf};

use tilecache::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run(config_path: Option<PathBuf>) -> Result<(), CliError> {
    let path = config_path.unwrap_or_else(config_file_path);
    let created = write_default_config(&path)?;

    if created {
        println!("Created configuration file: {}", path.display());
    } else {
        println!("Configuration file already exists: {}", path.display());
    }
    println!();
    println!("Set user_agent in the [proxy] section before running 'tilecache serve'.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}

fn write_default_config(path: &Path) -> Result<bool, CliError> {
    Ok(ConfigFile::ensure_exists_at(path)?)
}
