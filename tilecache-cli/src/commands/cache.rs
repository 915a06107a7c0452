//! Cache management CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use tilecache::cache::disk_cache_stats;
use tilecache::config::{config_file_path, ConfigFile};

use super::common::format_size;
use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show disk cache statistics
    Stats {
        /// Cache directory (overrides proxy.cache_dir)
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
}

/// Run a cache subcommand.
pub fn run(config_path: Option<PathBuf>, action: CacheAction) -> Result<(), CliError> {
    let config_path = config_path.unwrap_or_else(config_file_path);
    let config = ConfigFile::load_from(&config_path)?;

    match action {
        CacheAction::Stats { cache_dir } => {
            let cache_dir = cache_dir.unwrap_or(config.proxy.cache_dir);
            println!("Disk cache: {}", cache_dir.display());

            match disk_cache_stats(&cache_dir) {
                Ok(stats) => {
                    println!("  Tiles:       {}", stats.tiles);
                    println!("  Size:        {}", format_size(stats.bytes));
                    println!("  Zoom levels: {}", stats.zoom_levels);
                    Ok(())
                }
                Err(e) => Err(CliError::CacheStats(e.to_string())),
            }
        }
    }
}
