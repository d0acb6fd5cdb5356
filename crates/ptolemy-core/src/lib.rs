//! # Ptolemy Core
//!
//! Descriptor model consumed by the Ptolemy aggregation engine.
//!
//! Descriptors are produced by an external collaborator that parses annotated
//! source; this crate only defines their shape:
//!
//! - [`EndpointInterface`] - A discovered service endpoint and its target namespace
//! - [`WebMethod`] - One operation on an endpoint
//! - [`WebMessage`] - One input, output, or fault message of an operation
//! - [`WebMessagePart`] - One part of a message, explicit or implicit
//! - [`ImplicitSchemaElement`] - Schema content implied by a message part
//! - [`QName`] - A namespace-qualified XML name

#![doc(html_root_url = "https://docs.rs/ptolemy-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod endpoint;
pub mod fixtures;
mod message;
mod qname;

pub use endpoint::{EndpointInterface, EndpointInterfaceBuilder, SourcePosition};
pub use message::{
    ExplicitPart, ImplicitSchemaElement, MessageKind, WebMessage, WebMessageBuilder,
    WebMessagePart, WebMethod, WebMethodBuilder,
};
pub use qname::QName;
