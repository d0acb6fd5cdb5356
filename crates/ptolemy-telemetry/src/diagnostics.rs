//! Rate-limited diagnostics.
//!
//! Some conditions are worth telling the user about, but not hundreds of times
//! in one run. A [`DiagnosticReporter`] counts how often each
//! [`DiagnosticKind`] has fired; the first [`DEFAULT_THRESHOLD`] occurrences of
//! a kind are emitted at [`Severity::Info`], later ones at [`Severity::Debug`].
//!
//! The reporter is an ordinary value owned by one aggregation run, so a new run
//! starts with every counter at zero.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ptolemy_telemetry::{DiagnosticKind, DiagnosticReporter, RecordingSink, Severity};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut reporter = DiagnosticReporter::new(sink.clone());
//!
//! for i in 0..5 {
//!     reporter.report(DiagnosticKind::SourceFilesNotFound, format!("missing {i}"));
//! }
//!
//! let severities: Vec<Severity> = sink.records().iter().map(|d| d.severity).collect();
//! assert_eq!(
//!     severities,
//!     vec![Severity::Info, Severity::Info, Severity::Info, Severity::Debug, Severity::Debug]
//! );
//! ```

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number of occurrences of a kind reported at informational severity.
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Kinds of rate-limited diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An endpoint interface was added without a source position.
    SourceFilesNotFound,
    /// An endpoint interface with an already-seen qualified name was added.
    DuplicateEndpointInterface,
}

impl DiagnosticKind {
    /// Every diagnostic kind.
    pub const ALL: [Self; 2] = [Self::SourceFilesNotFound, Self::DuplicateEndpointInterface];

    /// Returns the stable identifier used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceFilesNotFound => "SOURCE_FILES_NOT_FOUND",
            Self::DuplicateEndpointInterface => "DUPLICATE_ENDPOINT_INTERFACE",
        }
    }

    /// Returns how many occurrences are reported at [`Severity::Info`].
    #[must_use]
    pub const fn threshold(self) -> u32 {
        DEFAULT_THRESHOLD
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier chosen by the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Shown to the user.
    Info,
    /// Suppressed to debug output.
    Debug,
}

/// One emitted diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic kind.
    pub kind: DiagnosticKind,
    /// Severity tier.
    pub severity: Severity,
    /// 1-based count of this kind at the time it fired.
    pub occurrence: u32,
    /// Human-readable message.
    pub message: String,
}

/// Destination for emitted diagnostics.
///
/// The reporter only picks a severity; formatting and routing belong to the
/// sink.
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    /// Handles one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!(
                diagnostic = diagnostic.kind.as_str(),
                occurrence = diagnostic.occurrence,
                "{}",
                diagnostic.message
            ),
            Severity::Debug => tracing::debug!(
                diagnostic = diagnostic.kind.as_str(),
                occurrence = diagnostic.occurrence,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
///
/// Intended for tests and for tooling that wants to summarise a run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Returns the diagnostics of one kind, in emission order.
    #[must_use]
    pub fn records_of(&self, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.records
            .lock()
            .iter()
            .filter(|d| d.kind == kind)
            .cloned()
            .collect()
    }

    /// Returns how many diagnostics were emitted at `severity`.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.records.lock().push(diagnostic.clone());
    }
}

/// Per-run diagnostic counters.
#[derive(Debug)]
pub struct DiagnosticReporter {
    counters: HashMap<DiagnosticKind, u32>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl DiagnosticReporter {
    /// Creates a reporter with all counters at zero.
    #[must_use]
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            counters: HashMap::new(),
            sink,
        }
    }

    /// Counts one occurrence of `kind` and emits `message` at the severity the
    /// new count calls for.
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter = counter.saturating_add(1);
        let occurrence = *counter;

        let severity = if occurrence <= kind.threshold() {
            Severity::Info
        } else {
            Severity::Debug
        };

        self.sink.emit(&Diagnostic {
            kind,
            severity,
            occurrence,
            message: message.into(),
        });
    }

    /// Returns how many times `kind` has fired in this run.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> u32 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the sink diagnostics are emitted to.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }
}
