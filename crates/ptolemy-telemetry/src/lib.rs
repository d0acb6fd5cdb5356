//! Logging and diagnostics for Ptolemy.
//!
//! This crate provides the observability pieces of an aggregation run:
//!
//! - **Logging**: `tracing-subscriber` setup with JSON or pretty output
//! - **Diagnostics**: a per-run [`DiagnosticReporter`] that reports each
//!   diagnostic kind at informational severity for its first few occurrences
//!   and at debug severity afterwards
//!
//! # Architecture
//!
//! ```text
//! AggregationContext ──report(kind, msg)──▶ DiagnosticReporter
//!                                               │ counts per kind
//!                                               ▼
//!                                         DiagnosticSink
//!                                   (TracingSink │ RecordingSink)
//!                                               │
//!                                               ▼
//!                                       tracing subscriber
//! ```
//!
//! # Example
//!
//! ```
//! use ptolemy_telemetry::{DiagnosticKind, DiagnosticReporter};
//!
//! let mut reporter = DiagnosticReporter::default();
//! reporter.report(DiagnosticKind::SourceFilesNotFound, "Unable to find source file for com.acme.Svc.");
//! assert_eq!(reporter.count(DiagnosticKind::SourceFilesNotFound), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod logging;

pub use diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticReporter, DiagnosticSink, RecordingSink, Severity,
    TracingSink, DEFAULT_THRESHOLD,
};
pub use error::TelemetryError;
pub use logging::{init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
