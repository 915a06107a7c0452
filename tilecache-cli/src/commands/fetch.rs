//! Fetch command - run a single tile request through the cache.
//!
//! Useful to warm the cache or to check upstream connectivity without
//! starting the server.

use std::path::PathBuf;
use std::time::Instant;

use tilecache::app::TileCacheApp;
use tilecache::logging::LoggingOptions;
use tilecache::proxy::TileSource;

use super::common::{format_size, ProxyOverrides};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the fetch command.
pub struct FetchArgs {
    pub config_path: Option<PathBuf>,
    pub z: String,
    pub x: String,
    pub y: String,
    pub output: Option<PathBuf>,
    pub overrides: ProxyOverrides,
}

/// Run the fetch command.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config_path, LoggingOptions::default())?;
    runner.log_startup("fetch");

    let proxy_config = runner.proxy_config(args.overrides)?;
    let app = TileCacheApp::build(proxy_config)?;
    let proxy = app.proxy();

    println!("Fetching tile {}/{}/{}", args.z, args.x, args.y);
    let start = Instant::now();

    let runtime = runner.runtime()?;
    let tile = runtime
        .block_on(proxy.serve(&args.z, &args.x, &args.y))
        .map_err(CliError::Fetch)?;

    let origin = match tile.source {
        TileSource::Cache => "cache",
        TileSource::Upstream => "upstream",
    };
    println!(
        "Served {} from {} in {:.2}s",
        format_size(tile.data.len() as u64),
        origin,
        start.elapsed().as_secs_f64()
    );

    if let Some(output) = args.output {
        runner.save_output(&output, &tile.data)?;
        println!("Saved to {}", output.display());
    }

    Ok(())
}
