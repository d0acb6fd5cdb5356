//! # Ptolemy
//!
//! **Namespace-scoped aggregation of discovered web service endpoints**
//!
//! Ptolemy takes the endpoint interfaces found by a discovery pass and files
//! them into one interface description (WSDL) document per target namespace,
//! alongside one schema document per namespace for the implicit elements
//! their methods declare:
//!
//! - **Stable prefixes** – every namespace gets one prefix, shared by its WSDL
//!   and schema documents
//! - **Ordered output** – documents and their members keep discovery order
//! - **Quiet diagnostics** – missing source files are reported loudly three
//!   times, then at debug level
//! - **Layered configuration** – defaults, TOML/JSON files and environment
//!
//! ## Quick Start
//!
//! ```rust
//! use ptolemy::prelude::*;
//!
//! let config = PtolemyConfig::default();
//! let mut context = ptolemy::aggregation_context(&config).unwrap();
//!
//! context.add(ptolemy::core::fixtures::order_service());
//! assert_eq!(context.wsdls().len(), 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! EndpointInterface ──add──▶ AggregationContext ──▶ WsdlStore ───┐
//!                                 │                              ├──▶ NamespacePrefixes
//!                                 ├──────────────▶ SchemaStore ──┘
//!                                 ▼
//!                         DiagnosticReporter ──▶ tracing
//! ```

#![doc(html_root_url = "https://docs.rs/ptolemy/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error;

// Re-export descriptor types
pub use ptolemy_core as core;

// Re-export logging and diagnostics
pub use ptolemy_telemetry as telemetry;

// Re-export configuration
pub use ptolemy_config as config;

// Re-export aggregation
pub use ptolemy_docs as docs;

use ptolemy_config::{DuplicatePolicy as ConfiguredPolicy, LogFormat, LoggingConfig, PtolemyConfig};
use ptolemy_docs::{
    AggregationContext, ContextOptions, DocsError, DuplicatePolicy, NamespacePrefixes,
    NamespaceRegistry, SchemaContext,
};
use ptolemy_telemetry::{LogConfig, TelemetryError};

/// Errors raised while wiring a run from configuration.
#[derive(Debug, Error)]
pub enum PtolemyError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ptolemy_config::ConfigError),

    /// Logging could not be initialized.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// The aggregation context could not be built.
    #[error(transparent)]
    Docs(#[from] DocsError),
}

/// Maps the `aggregation` section onto context options.
#[must_use]
pub fn context_options(config: &PtolemyConfig) -> ContextOptions {
    let duplicate_policy = match config.aggregation.duplicate_endpoints {
        ConfiguredPolicy::Append => DuplicatePolicy::Append,
        ConfiguredPolicy::Skip => DuplicatePolicy::Skip,
    };

    ContextOptions::default()
        .use_source_parameter_names(config.aggregation.use_source_parameter_names)
        .context_path(config.aggregation.context_path.clone())
        .duplicate_policy(duplicate_policy)
}

/// Builds an aggregation context from configuration.
///
/// Reserved prefixes are pinned in declaration order before any endpoint is
/// added.
///
/// # Errors
///
/// Returns an error if two reserved pairs conflict.
pub fn aggregation_context(config: &PtolemyConfig) -> Result<AggregationContext, DocsError> {
    let mut registry = NamespaceRegistry::with_prefix_base(config.namespaces.prefix_base.clone());
    for (namespace, prefix) in &config.namespaces.reserved {
        registry.reserve(namespace, prefix)?;
    }

    let schema_context = SchemaContext::new(NamespacePrefixes::new(registry));
    Ok(AggregationContext::new(schema_context).with_options(context_options(config)))
}

/// Maps the `logging` section onto a [`LogConfig`].
#[must_use]
pub fn log_config(logging: &LoggingConfig) -> LogConfig {
    LogConfig {
        enabled: logging.enabled,
        level: logging.level.clone(),
        json_format: logging.format == LogFormat::Json,
        file_line_info: logging.include_location,
        include_target: true,
    }
}

/// Initializes logging from configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed or the filter
/// is invalid.
pub fn init_telemetry(config: &PtolemyConfig) -> Result<(), TelemetryError> {
    ptolemy_telemetry::init_logging(&log_config(&config.logging))
}

/// Validates `config`, initializes logging and builds the context.
///
/// # Errors
///
/// Returns an error if validation, logging setup or context wiring fails.
pub fn bootstrap(config: &PtolemyConfig) -> Result<AggregationContext, PtolemyError> {
    config.validate()?;
    init_telemetry(config)?;
    Ok(aggregation_context(config)?)
}

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use ptolemy::prelude::*;
/// ```
pub mod prelude {
    pub use ptolemy_core::{
        EndpointInterface, ImplicitSchemaElement, MessageKind, QName, SourcePosition, WebMessage,
        WebMessagePart, WebMethod,
    };

    // Re-export aggregation types
    pub use ptolemy_docs::{
        AggregationContext, AggregationSnapshot, ContextOptions, DocsError, DocsResult,
        DuplicatePolicy, NamespacePrefixes, SchemaContext, SharedAggregationContext,
    };

    // Re-export diagnostics
    pub use ptolemy_telemetry::{DiagnosticKind, DiagnosticReporter, RecordingSink, Severity};

    // Re-export configuration
    pub use ptolemy_config::{ConfigError, ConfigLoader, PtolemyConfig};

    pub use crate::PtolemyError;
}
