//! TileCache - a local read-through cache for map tiles
//!
//! Serves `/{z}/{x}/{y}` tile requests from a directory on disk and fills
//! misses from an upstream tile server (tile.openstreetmap.org by default).
//!
//! # Modules
//!
//! - [`coord`]: tile key validation
//! - [`cache`]: disk-backed tile store
//! - [`provider`]: upstream tile fetching
//! - [`proxy`]: the read-through request pipeline
//! - [`server`]: axum routing
//! - [`config`], [`logging`], [`app`]: configuration, tracing and bootstrap

pub mod app;
pub mod cache;
pub mod config;
pub mod coord;
pub mod logging;
pub mod provider;
pub mod proxy;
pub mod server;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
