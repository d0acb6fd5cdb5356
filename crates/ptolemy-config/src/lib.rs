//! Typed configuration for Ptolemy.
//!
//! This crate provides a strongly-typed configuration for aggregation runs with
//! support for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! The root type is [`PtolemyConfig`]:
//!
//! - [`AggregationConfig`] - Context settings and the duplicate-endpoint policy
//! - [`NamespaceConfig`] - Prefix generation and reserved prefixes
//! - [`LoggingConfig`] - Log level and output format
//!
//! # Example
//!
//! ```no_run
//! use ptolemy_config::{ConfigLoader, PtolemyConfig};
//!
//! # fn main() -> Result<(), ptolemy_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("ptolemy.toml")?
//!     .with_env_prefix("PTOLEMY")
//!     .load()?;
//!
//! println!("Generated prefixes start with: {}", config.namespaces.prefix_base);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [aggregation]
//! use_source_parameter_names = true
//! context_path = ""
//! duplicate_endpoints = "append"
//!
//! [namespaces]
//! prefix_base = "ns"
//!
//! [namespaces.reserved]
//! "http://www.w3.org/2001/XMLSchema" = "xs"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "pretty"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Scalar values can be overridden with variables of the form
//! `PREFIX__SECTION__KEY`:
//!
//! - `PTOLEMY__AGGREGATION__DUPLICATE_ENDPOINTS=skip`
//! - `PTOLEMY__NAMESPACES__PREFIX_BASE=tns`
//! - `PTOLEMY__LOGGING__LEVEL=debug`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
