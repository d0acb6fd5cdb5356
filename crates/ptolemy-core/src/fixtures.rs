//! Test fixtures for Ptolemy development and testing.
//!
//! Pre-built endpoint descriptors shared by tests across the workspace.
//!
//! # Example
//!
//! ```
//! use ptolemy_core::fixtures;
//!
//! let endpoint = fixtures::order_service();
//! assert_eq!(endpoint.target_namespace(), fixtures::ORDERS_NS);
//! assert_eq!(endpoint.implicit_elements().count(), 4);
//! ```

use crate::{
    EndpointInterface, ImplicitSchemaElement, MessageKind, QName, SourcePosition, WebMessage,
    WebMethod,
};

/// Target namespace of [`order_service`].
pub const ORDERS_NS: &str = "urn:acme:orders";

/// Data namespace used by [`order_service`]'s wrapper elements.
pub const ORDER_TYPES_NS: &str = "urn:acme:orders:types";

/// Target namespace of [`inventory_service`].
pub const INVENTORY_NS: &str = "urn:acme:inventory";

/// Creates an order service whose wrapper elements live in [`ORDER_TYPES_NS`].
///
/// Operations:
/// - `placeOrder` - input and output wrappers
/// - `cancelOrder` - input and output wrappers
#[must_use]
pub fn order_service() -> EndpointInterface {
    EndpointInterface::builder("com.acme.orders.OrderService", ORDERS_NS)
        .method(request_response(ORDER_TYPES_NS, "placeOrder"))
        .method(request_response(ORDER_TYPES_NS, "cancelOrder"))
        .source_position(SourcePosition::new(
            "src/main/java/com/acme/orders/OrderService.java",
            24,
            1,
        ))
        .build()
}

/// Creates an inventory service whose wrapper elements share its target namespace.
///
/// Operations:
/// - `checkStock` - input and output wrappers, plus an explicit `warehouse` header
#[must_use]
pub fn inventory_service() -> EndpointInterface {
    EndpointInterface::builder("com.acme.inventory.InventoryService", INVENTORY_NS)
        .method(
            WebMethod::builder("checkStock")
                .message(
                    WebMessage::builder("checkStock", MessageKind::Input)
                        .implicit(ImplicitSchemaElement::new(QName::new(
                            INVENTORY_NS,
                            "checkStock",
                        )))
                        .explicit("warehouse", QName::new(ORDER_TYPES_NS, "warehouse"))
                        .build(),
                )
                .message(
                    WebMessage::builder("checkStockResponse", MessageKind::Output)
                        .implicit(ImplicitSchemaElement::new(QName::new(
                            INVENTORY_NS,
                            "checkStockResponse",
                        )))
                        .build(),
                )
                .build(),
        )
        .source_position(SourcePosition::new(
            "src/main/java/com/acme/inventory/InventoryService.java",
            18,
            1,
        ))
        .build()
}

/// Creates an endpoint with no methods and no source position.
///
/// Handy for exercising the "source files not found" diagnostic.
#[must_use]
pub fn sourceless_endpoint(qualified_name: &str, target_namespace: &str) -> EndpointInterface {
    EndpointInterface::builder(qualified_name, target_namespace).build()
}

/// Creates a document-literal-wrapped operation with `{name}` and
/// `{name}Response` wrapper elements in `namespace`.
#[must_use]
pub fn request_response(namespace: &str, name: &str) -> WebMethod {
    let response = format!("{name}Response");
    WebMethod::builder(name)
        .message(
            WebMessage::builder(name, MessageKind::Input)
                .implicit(ImplicitSchemaElement::new(QName::new(namespace, name)))
                .build(),
        )
        .message(
            WebMessage::builder(response.clone(), MessageKind::Output)
                .implicit(ImplicitSchemaElement::new(QName::new(namespace, response)))
                .build(),
        )
        .build()
}
