//! Web methods, their messages, and message parts.
//!
//! A [`WebMethod`] owns an ordered list of [`WebMessage`]s, each of which owns
//! an ordered list of [`WebMessagePart`]s. Parts come in two flavours:
//!
//! - [`WebMessagePart::Explicit`] references an element declared elsewhere
//! - [`WebMessagePart::Implicit`] carries schema content that only exists
//!   because of the method signature (wrapper elements, for instance)
//!
//! # Example
//!
//! ```
//! use ptolemy_core::{ImplicitSchemaElement, MessageKind, QName, WebMessage, WebMethod};
//!
//! let method = WebMethod::builder("getOrder")
//!     .message(
//!         WebMessage::builder("getOrder", MessageKind::Input)
//!             .implicit(ImplicitSchemaElement::new(QName::new("urn:types:a", "getOrder")))
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(method.implicit_elements().count(), 1);
//! ```

use serde::Serialize;

use crate::QName;

/// An operation exposed by an endpoint interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebMethod {
    operation_name: String,
    messages: Vec<WebMessage>,
}

impl WebMethod {
    /// Creates a new method builder.
    #[must_use]
    pub fn builder(operation_name: impl Into<String>) -> WebMethodBuilder {
        WebMethodBuilder::new(operation_name)
    }

    /// Returns the operation name.
    #[must_use]
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// Returns the messages in declaration order.
    #[must_use]
    pub fn messages(&self) -> &[WebMessage] {
        &self.messages
    }

    /// Iterates the implicit schema elements of every message, in order.
    pub fn implicit_elements(&self) -> impl Iterator<Item = &ImplicitSchemaElement> {
        self.messages
            .iter()
            .flat_map(|message| message.parts().iter())
            .filter_map(WebMessagePart::as_implicit)
    }
}

/// Builder for [`WebMethod`].
#[derive(Debug)]
pub struct WebMethodBuilder {
    operation_name: String,
    messages: Vec<WebMessage>,
}

impl WebMethodBuilder {
    /// Creates a new method builder.
    #[must_use]
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            messages: Vec::new(),
        }
    }

    /// Appends a message.
    #[must_use]
    pub fn message(mut self, message: WebMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Appends several messages.
    #[must_use]
    pub fn messages(mut self, messages: impl IntoIterator<Item = WebMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Builds the method.
    #[must_use]
    pub fn build(self) -> WebMethod {
        WebMethod {
            operation_name: self.operation_name,
            messages: self.messages,
        }
    }
}

/// Direction of a message within an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Request message.
    Input,
    /// Response message.
    Output,
    /// Fault message.
    Fault,
}

/// One message of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebMessage {
    name: String,
    kind: MessageKind,
    parts: Vec<WebMessagePart>,
}

impl WebMessage {
    /// Creates a new message builder.
    #[must_use]
    pub fn builder(name: impl Into<String>, kind: MessageKind) -> WebMessageBuilder {
        WebMessageBuilder::new(name, kind)
    }

    /// Returns the message name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message direction.
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the parts in declaration order.
    #[must_use]
    pub fn parts(&self) -> &[WebMessagePart] {
        &self.parts
    }
}

/// Builder for [`WebMessage`].
#[derive(Debug)]
pub struct WebMessageBuilder {
    name: String,
    kind: MessageKind,
    parts: Vec<WebMessagePart>,
}

impl WebMessageBuilder {
    /// Creates a new message builder.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parts: Vec::new(),
        }
    }

    /// Appends a part.
    #[must_use]
    pub fn part(mut self, part: WebMessagePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Appends an explicit part referencing an element declared elsewhere.
    #[must_use]
    pub fn explicit(self, name: impl Into<String>, particle: QName) -> Self {
        self.part(WebMessagePart::Explicit(ExplicitPart::new(name, particle)))
    }

    /// Appends an implicit schema element part.
    #[must_use]
    pub fn implicit(self, element: ImplicitSchemaElement) -> Self {
        self.part(WebMessagePart::Implicit(element))
    }

    /// Builds the message.
    #[must_use]
    pub fn build(self) -> WebMessage {
        WebMessage {
            name: self.name,
            kind: self.kind,
            parts: self.parts,
        }
    }
}

/// One part of a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WebMessagePart {
    /// A part whose element is declared elsewhere.
    Explicit(ExplicitPart),
    /// A part whose element must be filed into a schema document on the
    /// endpoint's behalf.
    Implicit(ImplicitSchemaElement),
}

impl WebMessagePart {
    /// Returns the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Explicit(part) => part.name(),
            Self::Implicit(element) => element.name(),
        }
    }

    /// Returns the qualified name of the element carried by this part.
    #[must_use]
    pub fn particle(&self) -> &QName {
        match self {
            Self::Explicit(part) => part.particle(),
            Self::Implicit(element) => element.particle(),
        }
    }

    /// Returns the particle namespace.
    #[must_use]
    pub fn particle_namespace(&self) -> &str {
        self.particle().namespace()
    }

    /// Returns `true` for implicit schema element parts.
    #[must_use]
    pub fn is_implicit_schema_element(&self) -> bool {
        matches!(self, Self::Implicit(_))
    }

    /// Returns the implicit element form of this part, if any.
    #[must_use]
    pub fn as_implicit(&self) -> Option<&ImplicitSchemaElement> {
        match self {
            Self::Implicit(element) => Some(element),
            Self::Explicit(_) => None,
        }
    }
}

/// A part referencing an element declared elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplicitPart {
    name: String,
    particle: QName,
}

impl ExplicitPart {
    /// Creates an explicit part.
    #[must_use]
    pub fn new(name: impl Into<String>, particle: QName) -> Self {
        Self {
            name: name.into(),
            particle,
        }
    }

    /// Returns the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the referenced element name.
    #[must_use]
    pub fn particle(&self) -> &QName {
        &self.particle
    }
}

/// Schema content implied by a message part.
///
/// The element's particle namespace decides which schema document receives
/// it; that namespace may differ from the endpoint's target namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplicitSchemaElement {
    name: String,
    particle: QName,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_name: Option<QName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

impl ImplicitSchemaElement {
    /// Creates an implicit element named after the particle's local part.
    #[must_use]
    pub fn new(particle: QName) -> Self {
        Self {
            name: particle.local_part().to_string(),
            particle,
            type_name: None,
            documentation: None,
        }
    }

    /// Overrides the part name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the declared element type.
    #[must_use]
    pub fn with_type(mut self, type_name: QName) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Sets the element documentation.
    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Returns the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element's qualified name.
    #[must_use]
    pub fn particle(&self) -> &QName {
        &self.particle
    }

    /// Returns the declared element type, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&QName> {
        self.type_name.as_ref()
    }

    /// Returns the element documentation, if any.
    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implicit(ns: &str, local: &str) -> ImplicitSchemaElement {
        ImplicitSchemaElement::new(QName::new(ns, local))
    }

    #[test]
    fn test_message_builder_preserves_part_order() {
        let message = WebMessage::builder("placeOrder", MessageKind::Input)
            .implicit(implicit("urn:types:a", "first"))
            .explicit("second", QName::new("urn:types:b", "second"))
            .implicit(implicit("urn:types:a", "third"))
            .build();

        let names: Vec<&str> = message.parts().iter().map(WebMessagePart::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(message.kind(), MessageKind::Input);
    }

    #[test]
    fn test_part_variant_checks() {
        let explicit = WebMessagePart::Explicit(ExplicitPart::new(
            "order",
            QName::new("urn:types:b", "order"),
        ));
        let implicit = WebMessagePart::Implicit(implicit("urn:types:a", "wrapper"));

        assert!(!explicit.is_implicit_schema_element());
        assert!(explicit.as_implicit().is_none());
        assert_eq!(explicit.particle_namespace(), "urn:types:b");

        assert!(implicit.is_implicit_schema_element());
        assert_eq!(implicit.as_implicit().map(ImplicitSchemaElement::name), Some("wrapper"));
        assert_eq!(implicit.particle_namespace(), "urn:types:a");
    }

    #[test]
    fn test_method_implicit_elements_skip_explicit_parts() {
        let method = WebMethod::builder("placeOrder")
            .message(
                WebMessage::builder("placeOrder", MessageKind::Input)
                    .implicit(implicit("urn:types:a", "placeOrder"))
                    .explicit("header", QName::new("urn:types:h", "header"))
                    .build(),
            )
            .message(
                WebMessage::builder("placeOrderResponse", MessageKind::Output)
                    .implicit(implicit("urn:types:a", "placeOrderResponse"))
                    .build(),
            )
            .build();

        let locals: Vec<&str> = method
            .implicit_elements()
            .map(|e| e.particle().local_part())
            .collect();
        assert_eq!(locals, vec!["placeOrder", "placeOrderResponse"]);
    }

    #[test]
    fn test_implicit_element_options() {
        let element = implicit("urn:types:a", "order")
            .with_name("arg0")
            .with_type(QName::new("urn:types:a", "orderType"))
            .with_documentation("The order to place");

        assert_eq!(element.name(), "arg0");
        assert_eq!(element.type_name().map(QName::local_part), Some("orderType"));
        assert_eq!(element.documentation(), Some("The order to place"));
    }

    #[test]
    fn test_part_serializes_with_kind_tag() {
        let part = WebMessagePart::Implicit(implicit("urn:types:a", "order"));
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["kind"], "implicit");
        assert_eq!(json["particle"]["namespace"], "urn:types:a");
        assert!(json.get("type_name").is_none());
    }
}
