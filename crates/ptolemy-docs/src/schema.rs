//! Schema documents and the schema-model context that owns them.
//!
//! The [`SchemaContext`] is the sibling of the aggregation context that models
//! data types. It owns the run's prefix registry; anything it registers is
//! visible to the WSDL side and the other way round.

use ptolemy_core::ImplicitSchemaElement;

use crate::namespace::NamespacePrefixes;
use crate::store::{DocumentStore, NamespacedDocument};

/// Every implicit schema element sharing one namespace.
#[derive(Debug, Clone)]
pub struct SchemaInfo {
    id: String,
    namespace: String,
    implicit_schema_elements: Vec<ImplicitSchemaElement>,
}

impl SchemaInfo {
    /// Returns the document id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the schema namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the implicit elements in the order they were filed.
    ///
    /// The same element filed twice appears twice.
    #[must_use]
    pub fn implicit_schema_elements(&self) -> &[ImplicitSchemaElement] {
        &self.implicit_schema_elements
    }

    /// Appends an implicit element.
    pub fn push_implicit_element(&mut self, element: ImplicitSchemaElement) {
        self.implicit_schema_elements.push(element);
    }
}

impl NamespacedDocument for SchemaInfo {
    fn create(id: String, namespace: String) -> Self {
        Self {
            id,
            namespace,
            implicit_schema_elements: Vec::new(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Schema documents keyed by namespace.
pub type SchemaStore = DocumentStore<SchemaInfo>;

/// Schema-model context: the prefix registry plus the schema documents.
#[derive(Debug)]
pub struct SchemaContext {
    prefixes: NamespacePrefixes,
    schemas: SchemaStore,
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new(NamespacePrefixes::default())
    }
}

impl SchemaContext {
    /// Creates a context around an existing prefix registry.
    #[must_use]
    pub fn new(prefixes: NamespacePrefixes) -> Self {
        Self {
            schemas: SchemaStore::new(prefixes.clone()),
            prefixes,
        }
    }

    /// Registers `namespace` and returns its prefix.
    pub fn add_namespace(&self, namespace: &str) -> String {
        self.prefixes.assign_or_get(namespace)
    }

    /// Returns the shared prefix registry.
    #[must_use]
    pub fn prefixes(&self) -> &NamespacePrefixes {
        &self.prefixes
    }

    /// Returns the schema documents.
    #[must_use]
    pub fn schemas(&self) -> &SchemaStore {
        &self.schemas
    }

    /// Returns the schema documents for filing.
    pub fn schemas_mut(&mut self) -> &mut SchemaStore {
        &mut self.schemas
    }
}
