//! Endpoint aggregation.
//!
//! [`AggregationContext::add`] files each discovered endpoint interface into
//! the WSDL document of its target namespace and every implicit schema
//! element it declares into the schema document of the element's namespace.
//! Both stores draw ids from the prefix registry owned by the
//! [`SchemaContext`], so one namespace carries one id on both sides.

use parking_lot::Mutex;
use ptolemy_core::{EndpointInterface, WebMessagePart};
use ptolemy_telemetry::{DiagnosticKind, DiagnosticReporter};
use std::collections::HashSet;
use std::sync::Arc;

use crate::namespace::NamespacePrefixes;
use crate::schema::{SchemaContext, SchemaStore};
use crate::snapshot::AggregationSnapshot;
use crate::wsdl::WsdlStore;

/// What to do when an endpoint with an already-added qualified name arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// File it again; documents list it once per `add`.
    #[default]
    Append,
    /// Ignore it.
    Skip,
}

/// Run-wide aggregation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextOptions {
    /// Whether renderers should prefer parameter names taken from source.
    pub use_source_parameter_names: bool,
    /// Path the generated documents are served under. Empty by default.
    pub context_path: String,
    /// Handling of repeated qualified names.
    pub duplicate_policy: DuplicatePolicy,
}

impl ContextOptions {
    /// Sets [`ContextOptions::use_source_parameter_names`].
    #[must_use]
    pub fn use_source_parameter_names(mut self, enabled: bool) -> Self {
        self.use_source_parameter_names = enabled;
        self
    }

    /// Sets [`ContextOptions::context_path`].
    #[must_use]
    pub fn context_path(mut self, path: impl Into<String>) -> Self {
        self.context_path = path.into();
        self
    }

    /// Sets [`ContextOptions::duplicate_policy`].
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Aggregates endpoint interfaces into namespace-scoped documents.
///
/// # Example
///
/// ```
/// use ptolemy_core::fixtures;
/// use ptolemy_docs::{AggregationContext, SchemaContext};
///
/// let mut context = AggregationContext::new(SchemaContext::default());
/// context.add(fixtures::order_service());
///
/// let wsdl = context.wsdls().get(fixtures::ORDERS_NS).unwrap();
/// assert_eq!(wsdl.id(), "ns0");
/// assert_eq!(context.schemas().len(), 1);
/// ```
#[derive(Debug)]
pub struct AggregationContext {
    schema_context: SchemaContext,
    wsdls: WsdlStore,
    endpoint_interfaces: Vec<Arc<EndpointInterface>>,
    seen: HashSet<String>,
    reporter: DiagnosticReporter,
    options: ContextOptions,
}

impl Default for AggregationContext {
    fn default() -> Self {
        Self::new(SchemaContext::default())
    }
}

impl AggregationContext {
    /// Creates a context on top of `schema_context`, sharing its prefixes.
    #[must_use]
    pub fn new(schema_context: SchemaContext) -> Self {
        Self {
            wsdls: WsdlStore::new(schema_context.prefixes().clone()),
            schema_context,
            endpoint_interfaces: Vec::new(),
            seen: HashSet::new(),
            reporter: DiagnosticReporter::default(),
            options: ContextOptions::default(),
        }
    }

    /// Replaces the run settings.
    #[must_use]
    pub fn with_options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the diagnostic reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: DiagnosticReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Files one endpoint interface.
    ///
    /// The endpoint's target namespace is registered before any implicit
    /// element namespace it declares. Parts are visited method by method,
    /// message by message, in declaration order. An endpoint without a
    /// source position is still filed; the gap is reported as
    /// [`DiagnosticKind::SourceFilesNotFound`].
    pub fn add(&mut self, endpoint: impl Into<Arc<EndpointInterface>>) {
        let endpoint = endpoint.into();
        let qualified_name = endpoint.qualified_name();

        if !self.seen.insert(qualified_name.to_string()) {
            self.reporter.report(
                DiagnosticKind::DuplicateEndpointInterface,
                format!("Endpoint interface {qualified_name} was added more than once."),
            );
            if self.options.duplicate_policy == DuplicatePolicy::Skip {
                return;
            }
        }

        let wsdl = self.wsdls.get_or_create(endpoint.target_namespace());

        let schemas = self.schema_context.schemas_mut();
        for method in endpoint.methods() {
            for message in method.messages() {
                for part in message.parts() {
                    if let WebMessagePart::Implicit(element) = part {
                        schemas
                            .get_or_create(element.particle().namespace())
                            .push_implicit_element(element.clone());
                    }
                }
            }
        }

        wsdl.push_endpoint(Arc::clone(&endpoint));
        self.endpoint_interfaces.push(Arc::clone(&endpoint));
        tracing::debug!(
            endpoint = qualified_name,
            namespace = endpoint.target_namespace(),
            "Added {} as an endpoint interface.",
            qualified_name
        );

        if endpoint.source_position().is_none() {
            self.reporter.report(
                DiagnosticKind::SourceFilesNotFound,
                format!("Unable to find source file for {qualified_name}."),
            );
        }
    }

    /// Files every endpoint in iteration order.
    pub fn add_all<I>(&mut self, endpoints: I)
    where
        I: IntoIterator,
        I::Item: Into<Arc<EndpointInterface>>,
    {
        for endpoint in endpoints {
            self.add(endpoint);
        }
    }

    /// Returns the WSDL documents.
    #[must_use]
    pub fn wsdls(&self) -> &WsdlStore {
        &self.wsdls
    }

    /// Returns the schema documents.
    #[must_use]
    pub fn schemas(&self) -> &SchemaStore {
        self.schema_context.schemas()
    }

    /// Returns every added endpoint in `add` order.
    #[must_use]
    pub fn endpoint_interfaces(&self) -> &[Arc<EndpointInterface>] {
        &self.endpoint_interfaces
    }

    /// Returns the shared prefix registry.
    #[must_use]
    pub fn prefixes(&self) -> &NamespacePrefixes {
        self.schema_context.prefixes()
    }

    /// Returns the schema-model context.
    #[must_use]
    pub fn schema_context(&self) -> &SchemaContext {
        &self.schema_context
    }

    /// Returns the schema-model context for direct registration.
    pub fn schema_context_mut(&mut self) -> &mut SchemaContext {
        &mut self.schema_context
    }

    /// Returns this run's diagnostic reporter.
    #[must_use]
    pub fn reporter(&self) -> &DiagnosticReporter {
        &self.reporter
    }

    /// Returns the run settings.
    #[must_use]
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Whether renderers should prefer parameter names taken from source.
    #[must_use]
    pub fn use_source_parameter_names(&self) -> bool {
        self.options.use_source_parameter_names
    }

    /// Returns the context path. Empty unless configured.
    #[must_use]
    pub fn context_path(&self) -> &str {
        &self.options.context_path
    }

    /// Captures a serializable view of the aggregated documents.
    #[must_use]
    pub fn snapshot(&self) -> AggregationSnapshot {
        AggregationSnapshot::capture(self)
    }

    /// Wraps the context for use from several discovery threads.
    #[must_use]
    pub fn into_shared(self) -> SharedAggregationContext {
        SharedAggregationContext::new(self)
    }
}

/// An [`AggregationContext`] behind a lock.
///
/// Each `add` holds the lock for the whole call, so the documents always
/// reflect a sequence of complete additions.
#[derive(Debug, Clone)]
pub struct SharedAggregationContext {
    inner: Arc<Mutex<AggregationContext>>,
}

impl SharedAggregationContext {
    /// Wraps `context`.
    #[must_use]
    pub fn new(context: AggregationContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Files one endpoint interface under the lock.
    pub fn add(&self, endpoint: impl Into<Arc<EndpointInterface>>) {
        self.inner.lock().add(endpoint);
    }

    /// Runs `f` with the context locked.
    pub fn with<R>(&self, f: impl FnOnce(&AggregationContext) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Captures a snapshot under the lock.
    #[must_use]
    pub fn snapshot(&self) -> AggregationSnapshot {
        self.inner.lock().snapshot()
    }

    /// Returns the context if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged while other handles are alive.
    pub fn into_inner(self) -> Result<AggregationContext, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| inner.into_inner())
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptolemy_core::{fixtures, ImplicitSchemaElement, MessageKind, QName, WebMessage, WebMethod};
    use ptolemy_telemetry::{RecordingSink, Severity};

    fn recording_context(options: ContextOptions) -> (Arc<RecordingSink>, AggregationContext) {
        let sink = Arc::new(RecordingSink::new());
        let context = AggregationContext::default()
            .with_options(options)
            .with_reporter(DiagnosticReporter::new(sink.clone()));
        (sink, context)
    }

    #[test]
    fn test_target_namespace_registered_first() {
        let endpoint = EndpointInterface::builder("com.acme.Svc", "urn:svc:a")
            .method(
                WebMethod::builder("op")
                    .message(
                        WebMessage::builder("op", MessageKind::Input)
                            .implicit(ImplicitSchemaElement::new(QName::new("urn:types:a", "P1")))
                            .build(),
                    )
                    .build(),
            )
            .build();

        let mut context = AggregationContext::default();
        context.add(endpoint);

        assert_eq!(context.prefixes().position("urn:svc:a"), Some(0));
        assert_eq!(context.prefixes().position("urn:types:a"), Some(1));
    }

    #[test]
    fn test_explicit_parts_are_not_filed() {
        let mut context = AggregationContext::default();
        context.add(fixtures::inventory_service());

        let schema = context.schemas().get(fixtures::INVENTORY_NS).unwrap();
        assert_eq!(schema.implicit_schema_elements().len(), 2);
        assert_eq!(context.schemas().len(), 1);
    }

    #[test]
    fn test_missing_source_is_reported() {
        let (sink, mut context) = recording_context(ContextOptions::default());
        context.add(fixtures::sourceless_endpoint("com.acme.Lost", "urn:lost"));
        context.add(fixtures::order_service());

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, DiagnosticKind::SourceFilesNotFound);
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[0].message, "Unable to find source file for com.acme.Lost.");
        assert_eq!(context.endpoint_interfaces().len(), 2);
    }

    #[test]
    fn test_duplicate_append_files_twice() {
        let (sink, mut context) = recording_context(ContextOptions::default());
        context.add(fixtures::order_service());
        context.add(fixtures::order_service());

        assert_eq!(context.endpoint_interfaces().len(), 2);
        let wsdl = context.wsdls().get(fixtures::ORDERS_NS).unwrap();
        assert_eq!(wsdl.endpoint_interfaces().len(), 2);
        let schema = context.schemas().get(fixtures::ORDER_TYPES_NS).unwrap();
        assert_eq!(schema.implicit_schema_elements().len(), 8);
        assert_eq!(
            sink.records_of(DiagnosticKind::DuplicateEndpointInterface).len(),
            1
        );
    }

    #[test]
    fn test_duplicate_skip_ignores_second() {
        let options = ContextOptions::default().duplicate_policy(DuplicatePolicy::Skip);
        let (sink, mut context) = recording_context(options);
        context.add(fixtures::order_service());
        context.add(fixtures::order_service());

        assert_eq!(context.endpoint_interfaces().len(), 1);
        let schema = context.schemas().get(fixtures::ORDER_TYPES_NS).unwrap();
        assert_eq!(schema.implicit_schema_elements().len(), 4);
        assert_eq!(
            context.reporter().count(DiagnosticKind::DuplicateEndpointInterface),
            1
        );
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn test_context_settings() {
        let context = AggregationContext::default();
        assert!(!context.use_source_parameter_names());
        assert_eq!(context.context_path(), "");

        let context = AggregationContext::default().with_options(
            ContextOptions::default()
                .use_source_parameter_names(true)
                .context_path("/soap"),
        );
        assert!(context.use_source_parameter_names());
        assert_eq!(context.context_path(), "/soap");
    }

    #[test]
    fn test_schema_context_registration_is_shared() {
        let mut context = AggregationContext::default();
        let prefix = context.schema_context().add_namespace(fixtures::ORDERS_NS);
        context.add(fixtures::order_service());

        assert_eq!(prefix, "ns0");
        assert_eq!(context.wsdls().get(fixtures::ORDERS_NS).unwrap().id(), prefix);
    }

    #[test]
    fn test_shared_into_inner() {
        let shared = AggregationContext::default().into_shared();
        let other = shared.clone();
        other.add(fixtures::order_service());

        let shared = shared.into_inner().unwrap_err();
        drop(other);
        let context = shared.into_inner().unwrap();
        assert_eq!(context.endpoint_interfaces().len(), 1);
    }
}
