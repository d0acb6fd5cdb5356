//! Serializable view of a finished aggregation run.

use indexmap::IndexMap;
use ptolemy_core::ImplicitSchemaElement;
use ptolemy_telemetry::DiagnosticKind;
use serde::Serialize;

use crate::context::AggregationContext;
use crate::error::DocsResult;

/// One WSDL document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsdlSnapshot {
    /// Document id.
    pub id: String,
    /// Target namespace.
    pub target_namespace: String,
    /// Qualified names of the filed endpoints, in filing order.
    pub endpoint_interfaces: Vec<String>,
}

/// One schema document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaSnapshot {
    /// Document id.
    pub id: String,
    /// Schema namespace.
    pub namespace: String,
    /// Implicit elements, in filing order.
    pub implicit_schema_elements: Vec<ImplicitSchemaElement>,
}

/// Prefix table, documents and diagnostic counts of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationSnapshot {
    /// Namespace → prefix, in first-seen order.
    pub prefixes: IndexMap<String, String>,
    /// WSDL documents, in creation order.
    pub wsdls: Vec<WsdlSnapshot>,
    /// Schema documents, in creation order.
    pub schemas: Vec<SchemaSnapshot>,
    /// Qualified names of every added endpoint, in `add` order.
    pub endpoint_interfaces: Vec<String>,
    /// Occurrences per diagnostic kind.
    pub diagnostics: IndexMap<String, u32>,
}

impl AggregationSnapshot {
    pub(crate) fn capture(context: &AggregationContext) -> Self {
        let wsdls = context
            .wsdls()
            .documents()
            .map(|wsdl| WsdlSnapshot {
                id: wsdl.id().to_string(),
                target_namespace: wsdl.target_namespace().to_string(),
                endpoint_interfaces: wsdl
                    .endpoint_interfaces()
                    .iter()
                    .map(|e| e.qualified_name().to_string())
                    .collect(),
            })
            .collect();

        let schemas = context
            .schemas()
            .documents()
            .map(|schema| SchemaSnapshot {
                id: schema.id().to_string(),
                namespace: schema.namespace().to_string(),
                implicit_schema_elements: schema.implicit_schema_elements().to_vec(),
            })
            .collect();

        let diagnostics = DiagnosticKind::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), context.reporter().count(*kind)))
            .collect();

        Self {
            prefixes: context.prefixes().to_map(),
            wsdls,
            schemas,
            endpoint_interfaces: context
                .endpoint_interfaces()
                .iter()
                .map(|e| e.qualified_name().to_string())
                .collect(),
            diagnostics,
        }
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::SerializationError`](crate::DocsError::SerializationError)
    /// if serialization fails.
    pub fn to_json(&self) -> DocsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
