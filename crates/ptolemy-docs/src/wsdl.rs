//! Interface description (WSDL) documents.

use ptolemy_core::EndpointInterface;
use std::sync::Arc;

use crate::store::{DocumentStore, NamespacedDocument};

/// Every endpoint interface sharing one target namespace.
#[derive(Debug, Clone)]
pub struct WsdlInfo {
    id: String,
    target_namespace: String,
    endpoint_interfaces: Vec<Arc<EndpointInterface>>,
}

impl WsdlInfo {
    /// Returns the document id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the target namespace.
    #[must_use]
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Returns the endpoint interfaces in the order they were added.
    #[must_use]
    pub fn endpoint_interfaces(&self) -> &[Arc<EndpointInterface>] {
        &self.endpoint_interfaces
    }

    /// Appends an endpoint interface.
    pub fn push_endpoint(&mut self, endpoint: Arc<EndpointInterface>) {
        self.endpoint_interfaces.push(endpoint);
    }
}

impl NamespacedDocument for WsdlInfo {
    fn create(id: String, namespace: String) -> Self {
        Self {
            id,
            target_namespace: namespace,
            endpoint_interfaces: Vec::new(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> &str {
        &self.target_namespace
    }
}

/// WSDL documents keyed by target namespace.
pub type WsdlStore = DocumentStore<WsdlInfo>;
