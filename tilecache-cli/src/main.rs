//! TileCache CLI - Command-line interface
//!
//! This binary runs the TileCache proxy and offers small maintenance
//! commands around its configuration and cache directory.

mod commands;
mod error;
mod runner;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::cache::CacheAction;
use commands::common::ProxyOverrides;
use commands::fetch::FetchArgs;
use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "tilecache")]
#[command(version, about = "Local read-through cache for map tiles", long_about = None)]
struct Cli {
    /// Path to config.ini (default: ~/.tilecache/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file if none exists
    Init,

    /// Run the tile proxy HTTP server until Ctrl+C
    Serve {
        /// Address to listen on (overrides server.listen)
        #[arg(long)]
        listen: Option<SocketAddr>,

        /// Cache directory (overrides proxy.cache_dir)
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// User-Agent sent upstream (overrides proxy.user_agent)
        #[arg(long)]
        user_agent: Option<String>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Fetch one tile through the cache
    Fetch {
        /// Zoom level
        z: String,

        /// Tile column
        x: String,

        /// Tile row
        y: String,

        /// Write the tile to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Cache directory (overrides proxy.cache_dir)
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// User-Agent sent upstream (overrides proxy.user_agent)
        #[arg(long)]
        user_agent: Option<String>,
    },

    /// Inspect the tile cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Init => commands::init::run(config_path),
        Commands::Serve {
            listen,
            cache_dir,
            user_agent,
            debug,
        } => commands::serve::run(ServeArgs {
            config_path,
            listen,
            overrides: ProxyOverrides {
                cache_dir,
                user_agent,
            },
            debug,
        }),
        Commands::Fetch {
            z,
            x,
            y,
            output,
            cache_dir,
            user_agent,
        } => commands::fetch::run(FetchArgs {
            config_path,
            z,
            x,
            y,
            output,
            overrides: ProxyOverrides {
                cache_dir,
                user_agent,
            },
        }),
        Commands::Cache { action } => commands::cache::run(config_path, action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
