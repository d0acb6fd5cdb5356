//! Get-or-create document registries keyed by namespace.
//!
//! [`WsdlStore`](crate::WsdlStore) and [`SchemaStore`](crate::SchemaStore) are
//! both a [`DocumentStore`]; they differ only in the document type they hold.

use indexmap::IndexMap;

use crate::namespace::NamespacePrefixes;

/// A document aggregating content for exactly one namespace.
pub trait NamespacedDocument {
    /// Creates an empty document.
    fn create(id: String, namespace: String) -> Self;

    /// Returns the document id (the namespace's prefix).
    fn id(&self) -> &str;

    /// Returns the namespace the document aggregates.
    fn namespace(&self) -> &str;
}

/// One document per namespace, in creation order.
#[derive(Debug, Clone)]
pub struct DocumentStore<D> {
    prefixes: NamespacePrefixes,
    documents: IndexMap<String, D>,
}

impl<D: NamespacedDocument> DocumentStore<D> {
    /// Creates an empty store drawing ids from `prefixes`.
    #[must_use]
    pub fn new(prefixes: NamespacePrefixes) -> Self {
        Self {
            prefixes,
            documents: IndexMap::new(),
        }
    }

    /// Returns the document for `namespace`, creating it on first request.
    ///
    /// A new document's id is the namespace's prefix in the shared registry.
    pub fn get_or_create(&mut self, namespace: &str) -> &mut D {
        let prefixes = &self.prefixes;
        self.documents
            .entry(namespace.to_string())
            .or_insert_with(|| {
                let id = prefixes.assign_or_get(namespace);
                tracing::trace!(namespace, id = %id, "Created document");
                D::create(id, namespace.to_string())
            })
    }

    /// Returns the document for `namespace`, if one exists.
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&D> {
        self.documents.get(namespace)
    }

    /// Returns `true` if a document exists for `namespace`.
    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.documents.contains_key(namespace)
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates `(namespace, document)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &D)> {
        self.documents
            .iter()
            .map(|(namespace, document)| (namespace.as_str(), document))
    }

    /// Iterates documents in creation order.
    pub fn documents(&self) -> impl Iterator<Item = &D> {
        self.documents.values()
    }

    /// Iterates namespaces in creation order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Returns the prefix registry this store draws ids from.
    #[must_use]
    pub fn prefixes(&self) -> &NamespacePrefixes {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Note {
        id: String,
        namespace: String,
        lines: Vec<&'static str>,
    }

    impl NamespacedDocument for Note {
        fn create(id: String, namespace: String) -> Self {
            Self {
                id,
                namespace,
                lines: Vec::new(),
            }
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn namespace(&self) -> &str {
            &self.namespace
        }
    }

    #[test]
    fn test_get_or_create_returns_existing() {
        let mut store: DocumentStore<Note> = DocumentStore::new(NamespacePrefixes::default());

        store.get_or_create("urn:a").lines.push("first");
        store.get_or_create("urn:a").lines.push("second");

        assert_eq!(store.len(), 1);
        let note = store.get("urn:a").unwrap();
        assert_eq!(note.id(), "ns0");
        assert_eq!(note.namespace(), "urn:a");
        assert_eq!(note.lines, vec!["first", "second"]);
    }

    #[test]
    fn test_creation_order() {
        let mut store: DocumentStore<Note> = DocumentStore::new(NamespacePrefixes::default());
        store.get_or_create("urn:z");
        store.get_or_create("urn:a");
        store.get_or_create("urn:z");

        let namespaces: Vec<&str> = store.namespaces().collect();
        assert_eq!(namespaces, vec!["urn:z", "urn:a"]);
        let ids: Vec<&str> = store.documents().map(Note::id).collect();
        assert_eq!(ids, vec!["ns0", "ns1"]);
    }

    #[test]
    fn test_stores_share_prefix_pool() {
        let prefixes = NamespacePrefixes::default();
        let mut left: DocumentStore<Note> = DocumentStore::new(prefixes.clone());
        let mut right: DocumentStore<Note> = DocumentStore::new(prefixes);

        left.get_or_create("urn:a");
        right.get_or_create("urn:b");
        right.get_or_create("urn:a");

        assert_eq!(right.get("urn:a").unwrap().id(), "ns0");
        assert_eq!(right.get("urn:b").unwrap().id(), "ns1");
        assert!(!left.contains("urn:b"));
    }

    #[test]
    fn test_lookup_does_not_create() {
        let store: DocumentStore<Note> = DocumentStore::new(NamespacePrefixes::default());
        assert!(store.get("urn:a").is_none());
        assert!(store.is_empty());
        assert!(store.prefixes().is_empty());
    }
}
