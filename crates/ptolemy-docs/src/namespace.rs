//! Namespace prefix registry.
//!
//! Every namespace seen during a run gets one short prefix, assigned the first
//! time it is requested and never changed afterwards. Generated prefixes are
//! `{base}{n}` with `n` counting up from zero, so a namespace requested earlier
//! always receives a lower counter value than one requested later. Prefixes
//! reserved up front are skipped by the counter.
//!
//! [`NamespacePrefixes`] is the shared handle handed to every document store
//! of a run, so WSDL and schema documents for the same namespace carry the same
//! prefix.
//!
//! # Example
//!
//! ```
//! use ptolemy_docs::NamespacePrefixes;
//!
//! let prefixes = NamespacePrefixes::default();
//! let wsdl_side = prefixes.clone();
//!
//! assert_eq!(prefixes.assign_or_get("urn:svc:a"), "ns0");
//! assert_eq!(prefixes.assign_or_get("urn:types:a"), "ns1");
//! assert_eq!(wsdl_side.assign_or_get("urn:svc:a"), "ns0");
//! ```

use indexmap::IndexMap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DocsError, DocsResult};

/// Default stem of generated prefixes.
pub const DEFAULT_PREFIX_BASE: &str = "ns";

/// Namespace → prefix assignments for one run, in first-seen order.
#[derive(Debug, Clone)]
pub struct NamespaceRegistry {
    base: String,
    prefixes: IndexMap<String, String>,
    holders: HashMap<String, String>,
    counter: usize,
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::with_prefix_base(DEFAULT_PREFIX_BASE)
    }
}

impl NamespaceRegistry {
    /// Creates an empty registry generating `ns0`, `ns1`, ...
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry generating `{base}0`, `{base}1`, ...
    #[must_use]
    pub fn with_prefix_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            prefixes: IndexMap::new(),
            holders: HashMap::new(),
            counter: 0,
        }
    }

    /// Returns the prefix for `namespace`, assigning a fresh one on first
    /// request.
    pub fn assign_or_get(&mut self, namespace: &str) -> String {
        if let Some(prefix) = self.prefixes.get(namespace) {
            return prefix.clone();
        }

        let prefix = self.next_free_prefix();
        tracing::debug!(namespace, prefix = %prefix, "Assigned namespace prefix");
        self.insert(namespace, prefix.clone());
        prefix
    }

    /// Pins `namespace` to `prefix` before it is first requested.
    ///
    /// Reserving the same pair twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::NamespaceAssigned`] if the namespace already holds
    /// another prefix, or [`DocsError::PrefixTaken`] if another namespace holds
    /// `prefix`.
    pub fn reserve(&mut self, namespace: &str, prefix: &str) -> DocsResult<()> {
        if let Some(assigned) = self.prefixes.get(namespace) {
            if assigned == prefix {
                return Ok(());
            }
            return Err(DocsError::NamespaceAssigned {
                namespace: namespace.to_string(),
                assigned: assigned.clone(),
            });
        }

        if let Some(holder) = self.holders.get(prefix) {
            return Err(DocsError::PrefixTaken {
                prefix: prefix.to_string(),
                namespace: namespace.to_string(),
                holder: holder.clone(),
            });
        }

        self.insert(namespace, prefix.to_string());
        Ok(())
    }

    /// Returns the prefix of `namespace`, if assigned.
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.prefixes.get(namespace).map(String::as_str)
    }

    /// Returns the namespace holding `prefix`, if any.
    #[must_use]
    pub fn namespace_for(&self, prefix: &str) -> Option<&str> {
        self.holders.get(prefix).map(String::as_str)
    }

    /// Returns the 0-based first-seen position of `namespace`.
    #[must_use]
    pub fn position(&self, namespace: &str) -> Option<usize> {
        self.prefixes.get_index_of(namespace)
    }

    /// Returns the stem of generated prefixes.
    #[must_use]
    pub fn prefix_base(&self) -> &str {
        &self.base
    }

    /// Returns the number of assigned namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterates `(namespace, prefix)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(namespace, prefix)| (namespace.as_str(), prefix.as_str()))
    }

    fn next_free_prefix(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", self.base, self.counter);
            self.counter += 1;
            if !self.holders.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn insert(&mut self, namespace: &str, prefix: String) {
        self.holders.insert(prefix.clone(), namespace.to_string());
        self.prefixes.insert(namespace.to_string(), prefix);
    }
}

/// Shared handle to one run's [`NamespaceRegistry`].
///
/// Cloning the handle shares the registry. Each call takes the lock for its
/// own duration only.
#[derive(Debug, Clone, Default)]
pub struct NamespacePrefixes {
    inner: Arc<Mutex<NamespaceRegistry>>,
}

impl NamespacePrefixes {
    /// Wraps a registry for sharing.
    #[must_use]
    pub fn new(registry: NamespaceRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Returns the prefix for `namespace`, assigning a fresh one on first
    /// request.
    pub fn assign_or_get(&self, namespace: &str) -> String {
        self.inner.lock().assign_or_get(namespace)
    }

    /// Pins `namespace` to `prefix`. See [`NamespaceRegistry::reserve`].
    ///
    /// # Errors
    ///
    /// Returns an error if either side of the pair is already taken.
    pub fn reserve(&self, namespace: &str, prefix: &str) -> DocsResult<()> {
        self.inner.lock().reserve(namespace, prefix)
    }

    /// Returns the prefix of `namespace`, if assigned.
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<String> {
        self.inner.lock().get(namespace).map(str::to_string)
    }

    /// Returns the 0-based first-seen position of `namespace`.
    #[must_use]
    pub fn position(&self, namespace: &str) -> Option<usize> {
        self.inner.lock().position(namespace)
    }

    /// Returns the number of assigned namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copies the current assignments, in first-seen order.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.inner
            .lock()
            .iter()
            .map(|(namespace, prefix)| (namespace.to_string(), prefix.to_string()))
            .collect()
    }

    /// Returns `true` if both handles share one registry.
    #[must_use]
    pub fn shares_registry_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
