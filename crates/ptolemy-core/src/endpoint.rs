//! Endpoint interface descriptors.
//!
//! # Example
//!
//! ```
//! use ptolemy_core::{EndpointInterface, SourcePosition};
//!
//! let endpoint = EndpointInterface::builder("com.acme.OrderService", "urn:svc:orders")
//!     .source_position(SourcePosition::new("src/com/acme/OrderService.java", 12, 1))
//!     .build();
//!
//! assert_eq!(endpoint.simple_name(), "OrderService");
//! assert!(endpoint.source_position().is_some());
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{ImplicitSchemaElement, WebMethod};

/// Where an endpoint interface was declared in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    path: PathBuf,
    line: u32,
    column: u32,
}

impl SourcePosition {
    /// Creates a source position.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// Returns the source file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the 1-based line.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// A discovered service endpoint interface.
///
/// Descriptors are built once by the source parser and treated as read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointInterface {
    qualified_name: String,
    target_namespace: String,
    methods: Vec<WebMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_position: Option<SourcePosition>,
}

impl EndpointInterface {
    /// Creates a new endpoint builder.
    ///
    /// # Arguments
    ///
    /// * `qualified_name` - Fully qualified name of the declaring type
    /// * `target_namespace` - Namespace the endpoint's interface document is grouped under
    #[must_use]
    pub fn builder(
        qualified_name: impl Into<String>,
        target_namespace: impl Into<String>,
    ) -> EndpointInterfaceBuilder {
        EndpointInterfaceBuilder::new(qualified_name, target_namespace)
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Returns the last segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Returns the target namespace.
    #[must_use]
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Returns the methods in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[WebMethod] {
        &self.methods
    }

    /// Returns the source position, or `None` when the source was not found.
    #[must_use]
    pub fn source_position(&self) -> Option<&SourcePosition> {
        self.source_position.as_ref()
    }

    /// Iterates every implicit schema element, methods → messages → parts.
    pub fn implicit_elements(&self) -> impl Iterator<Item = &ImplicitSchemaElement> {
        self.methods.iter().flat_map(WebMethod::implicit_elements)
    }
}

/// Builder for [`EndpointInterface`].
#[derive(Debug)]
pub struct EndpointInterfaceBuilder {
    qualified_name: String,
    target_namespace: String,
    methods: Vec<WebMethod>,
    source_position: Option<SourcePosition>,
}

impl EndpointInterfaceBuilder {
    /// Creates a new endpoint builder.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, target_namespace: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            target_namespace: target_namespace.into(),
            methods: Vec::new(),
            source_position: None,
        }
    }

    /// Appends a method.
    #[must_use]
    pub fn method(mut self, method: WebMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Appends several methods.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = WebMethod>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Sets the source position.
    #[must_use]
    pub fn source_position(mut self, position: SourcePosition) -> Self {
        self.source_position = Some(position);
        self
    }

    /// Builds the endpoint.
    #[must_use]
    pub fn build(self) -> EndpointInterface {
        EndpointInterface {
            qualified_name: self.qualified_name,
            target_namespace: self.target_namespace,
            methods: self.methods,
            source_position: self.source_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageKind, QName, WebMessage};

    #[test]
    fn test_endpoint_builder() {
        let endpoint = EndpointInterface::builder("com.acme.Svc", "urn:svc:a")
            .method(WebMethod::builder("ping").build())
            .method(WebMethod::builder("pong").build())
            .build();

        assert_eq!(endpoint.qualified_name(), "com.acme.Svc");
        assert_eq!(endpoint.target_namespace(), "urn:svc:a");
        assert_eq!(endpoint.methods().len(), 2);
        assert!(endpoint.source_position().is_none());
    }

    #[test]
    fn test_simple_name() {
        let nested = EndpointInterface::builder("com.acme.Outer$Inner", "").build();
        assert_eq!(nested.simple_name(), "Inner");

        let bare = EndpointInterface::builder("Svc", "").build();
        assert_eq!(bare.simple_name(), "Svc");
    }

    #[test]
    fn test_implicit_elements_follow_declaration_order() {
        let endpoint = EndpointInterface::builder("com.acme.Svc", "urn:svc:a")
            .method(
                WebMethod::builder("a")
                    .message(
                        WebMessage::builder("a", MessageKind::Input)
                            .implicit(ImplicitSchemaElement::new(QName::new("urn:t", "a")))
                            .build(),
                    )
                    .build(),
            )
            .method(
                WebMethod::builder("b")
                    .message(
                        WebMessage::builder("b", MessageKind::Input)
                            .implicit(ImplicitSchemaElement::new(QName::new("urn:u", "b")))
                            .build(),
                    )
                    .build(),
            )
            .build();

        let names: Vec<String> = endpoint
            .implicit_elements()
            .map(|e| e.particle().to_string())
            .collect();
        assert_eq!(names, vec!["{urn:t}a", "{urn:u}b"]);
    }

    #[test]
    fn test_source_position_display() {
        let position = SourcePosition::new("src/Svc.java", 7, 3);
        assert_eq!(position.to_string(), "src/Svc.java:7:3");
    }
}
