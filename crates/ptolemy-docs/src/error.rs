//! Error types for the document aggregation crate.
//!
//! Aggregation itself never fails; these errors cover prefix reservation and
//! snapshot export.

use thiserror::Error;

/// Errors that can occur around document aggregation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to serialize an aggregation snapshot to JSON.
    #[error("Failed to serialize aggregation snapshot: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A reserved prefix is already held by another namespace.
    #[error("Prefix '{prefix}' for '{namespace}' is already assigned to '{holder}'")]
    PrefixTaken {
        /// The prefix that was requested.
        prefix: String,
        /// The namespace that requested it.
        namespace: String,
        /// The namespace currently holding it.
        holder: String,
    },

    /// The namespace already has a different prefix.
    #[error("Namespace '{namespace}' is already assigned prefix '{assigned}'")]
    NamespaceAssigned {
        /// The namespace that was reserved.
        namespace: String,
        /// The prefix it already holds.
        assigned: String,
    },
}

/// Result type for document aggregation operations.
pub type DocsResult<T> = Result<T, DocsError>;
