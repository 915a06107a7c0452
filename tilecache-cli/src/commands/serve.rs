//! Serve command - run the tile proxy until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use tilecache::app::TileCacheApp;
use tilecache::logging::LoggingOptions;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::common::ProxyOverrides;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
pub struct ServeArgs {
    pub config_path: Option<PathBuf>,
    pub listen: Option<SocketAddr>,
    pub overrides: ProxyOverrides,
    pub debug: bool,
}

/// Run the serve command.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(
        args.config_path,
        LoggingOptions {
            stdout: true,
            debug: args.debug,
        },
    )?;
    runner.log_startup("serve");

    let listen = args.listen.unwrap_or(runner.config().server.listen);
    let proxy_config = runner.proxy_config(args.overrides)?;
    let app = TileCacheApp::build(proxy_config)?;

    println!("Cache directory: {}", app.config().cache_dir().display());
    println!("Serving tiles on http://{}/{{z}}/{{x}}/{{y}}", listen);
    println!("Press Ctrl+C to stop.");

    let runtime = runner.runtime()?;
    let shutdown = CancellationToken::new();

    runtime.block_on(async {
        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutdown requested"),
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
            }
            signal_token.cancel();
        });

        app.serve(listen, shutdown).await
    })?;

    println!("Stopped.");
    Ok(())
}
