//! Support library for the `dirichlet` command-line client.
//!
//! - [`config`]: TOML configuration (series truncation, log level)
//! - [`catalog`]: function specs such as `mobius` or `phi_k:0,2`
//! - [`report`]: JSON output records

pub mod catalog;
pub mod config;
pub mod report;

pub use catalog::{CatalogError, FuncSpec, CATALOG};
pub use config::{ClientConfig, ConfigError, DEFAULT_CONFIG_FILE};
