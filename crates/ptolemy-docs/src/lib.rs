//! # Ptolemy Docs
//!
//! Namespace-scoped aggregation of discovered web service endpoints into
//! interface description (WSDL) and schema documents.
//!
//! This crate provides:
//! - **Prefix registry**: one stable, unique prefix per namespace, shared by
//!   every document store of a run
//! - **Document stores**: get-or-create WSDL and schema documents keyed by
//!   namespace
//! - **Aggregation context**: files endpoints and their implicit schema
//!   elements, reporting missing source files through a rate-limited
//!   diagnostic reporter
//! - **Snapshots**: a serializable view of the finished run
//!
//! ## Quick Start
//!
//! ```rust
//! use ptolemy_core::fixtures;
//! use ptolemy_docs::{AggregationContext, SchemaContext};
//!
//! let schema_context = SchemaContext::default();
//! let mut context = AggregationContext::new(schema_context);
//!
//! context.add(fixtures::order_service());
//! context.add(fixtures::inventory_service());
//!
//! assert_eq!(context.wsdls().len(), 2);
//! assert_eq!(context.endpoint_interfaces().len(), 2);
//!
//! let json = context.snapshot().to_json().unwrap();
//! assert!(json.contains("urn:acme:orders"));
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod namespace;
mod schema;
mod snapshot;
mod store;
mod wsdl;

pub use context::{AggregationContext, ContextOptions, DuplicatePolicy, SharedAggregationContext};
pub use error::{DocsError, DocsResult};
pub use namespace::{NamespacePrefixes, NamespaceRegistry, DEFAULT_PREFIX_BASE};
pub use schema::{SchemaContext, SchemaInfo, SchemaStore};
pub use snapshot::{AggregationSnapshot, SchemaSnapshot, WsdlSnapshot};
pub use store::{DocumentStore, NamespacedDocument};
pub use wsdl::{WsdlInfo, WsdlStore};
