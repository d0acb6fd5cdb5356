//! Main configuration types.
//!
//! This module provides the top-level [`PtolemyConfig`] struct and its builder.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{AggregationConfig, ConfigError, LogFormat, LoggingConfig, NamespaceConfig};

/// Complete configuration for one aggregation run.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use ptolemy_config::PtolemyConfig;
///
/// let config = PtolemyConfig::default();
/// assert_eq!(config.namespaces.prefix_base, "ns");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct PtolemyConfig {
    /// Aggregation context settings.
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Namespace prefix settings.
    #[serde(default)]
    pub namespaces: NamespaceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PtolemyConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> PtolemyConfigBuilder {
        PtolemyConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `namespaces.prefix_base` is not usable as the start of an XML prefix
    /// - a reserved prefix is not a valid XML prefix
    /// - two reserved namespaces claim the same prefix
    /// - `logging.level` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_prefix_like(&self.namespaces.prefix_base) {
            return Err(ConfigError::invalid_value(
                "namespaces.prefix_base",
                format!(
                    "'{}' is not a valid XML namespace prefix",
                    self.namespaces.prefix_base
                ),
            ));
        }

        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for (namespace, prefix) in &self.namespaces.reserved {
            if !is_prefix_like(prefix) {
                return Err(ConfigError::invalid_value(
                    format!("namespaces.reserved.\"{namespace}\""),
                    format!("'{prefix}' is not a valid XML namespace prefix"),
                ));
            }
            if let Some(previous) = claimed.insert(prefix.as_str(), namespace.as_str()) {
                return Err(ConfigError::validation_error(format!(
                    "prefix '{prefix}' is reserved for both '{previous}' and '{namespace}'"
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "logging.level",
                "must not be empty",
            ));
        }

        Ok(())
    }

    /// Create a development configuration preset.
    ///
    /// - Pretty log formatting
    /// - Debug log level with source locations
    ///
    /// # Example
    ///
    /// ```
    /// use ptolemy_config::PtolemyConfig;
    ///
    /// let config = PtolemyConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.include_location = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// - JSON log formatting
    /// - Info log level
    /// - Duplicate endpoints are skipped
    ///
    /// # Example
    ///
    /// ```
    /// use ptolemy_config::{LogFormat, PtolemyConfig};
    ///
    /// let config = PtolemyConfig::production();
    /// assert_eq!(config.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;

        config.aggregation.duplicate_endpoints = crate::DuplicatePolicy::Skip;

        config
    }
}

// XML NCName-ish check; "xml" prefixes are reserved by the XML namespaces recommendation.
fn is_prefix_like(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if candidate
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("xml"))
    {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Builder for [`PtolemyConfig`].
#[derive(Debug, Default)]
pub struct PtolemyConfigBuilder {
    aggregation: Option<AggregationConfig>,
    namespaces: Option<NamespaceConfig>,
    logging: Option<LoggingConfig>,
}

impl PtolemyConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the aggregation configuration.
    #[must_use]
    pub fn aggregation(mut self, aggregation: AggregationConfig) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    /// Set the namespace configuration.
    #[must_use]
    pub fn namespaces(mut self, namespaces: NamespaceConfig) -> Self {
        self.namespaces = Some(namespaces);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> PtolemyConfig {
        PtolemyConfig {
            aggregation: self.aggregation.unwrap_or_default(),
            namespaces: self.namespaces.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }
}
