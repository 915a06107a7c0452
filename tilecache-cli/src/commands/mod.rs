//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cache`] - Cache inspection (stats)
//! - [`fetch`] - Single tile fetch through the cache
//! - [`init`] - Configuration initialization
//! - [`serve`] - Run the proxy HTTP server

pub mod cache;
pub mod common;
pub mod fetch;
pub mod init;
pub mod serve;
