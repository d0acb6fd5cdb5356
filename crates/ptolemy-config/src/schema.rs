//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What to do when an endpoint with an already-seen qualified name is added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// File the endpoint again; it appears twice in its document.
    #[default]
    Append,
    /// Ignore the second add entirely.
    Skip,
}

/// Aggregation context section.
///
/// # Example
///
/// ```
/// use ptolemy_config::{AggregationConfig, DuplicatePolicy};
///
/// let config = AggregationConfig {
///     use_source_parameter_names: true,
///     context_path: String::new(),
///     duplicate_endpoints: DuplicatePolicy::Skip,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct AggregationConfig {
    /// Whether renderers should use parameter names found in source.
    #[serde(default)]
    pub use_source_parameter_names: bool,

    /// Context path the generated documents are published under.
    #[serde(default)]
    pub context_path: String,

    /// Duplicate endpoint handling.
    #[serde(default)]
    pub duplicate_endpoints: DuplicatePolicy,
}

/// Namespace prefix section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamespaceConfig {
    /// Stem of generated prefixes (`ns` gives `ns0`, `ns1`, ...).
    #[serde(default = "default_prefix_base")]
    pub prefix_base: String,

    /// Namespace → prefix pairs assigned before any endpoint is added, in
    /// declaration order.
    #[serde(default)]
    pub reserved: IndexMap<String, String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            prefix_base: default_prefix_base(),
            reserved: IndexMap::new(),
        }
    }
}

fn default_prefix_base() -> String {
    "ns".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (CI, log collectors).
    Json,
    /// Human-readable pretty format.
    #[default]
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log filter (e.g., "info", "ptolemy_docs=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
