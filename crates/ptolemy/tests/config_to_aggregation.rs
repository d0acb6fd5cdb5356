//! Configuration-driven aggregation tests.
//!
//! A TOML file is loaded through the [`ConfigLoader`], mapped onto an
//! [`AggregationContext`], and the resulting documents are checked.

use std::io::Write;

use ptolemy::core::fixtures;
use ptolemy::prelude::*;

/// Writes `content` to a temporary `.toml` file.
fn toml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_settings_reach_the_context() {
    let file = toml_file(
        r#"
[aggregation]
use_source_parameter_names = true
context_path = "/services"
duplicate_endpoints = "skip"

[namespaces]
prefix_base = "tns"

[namespaces.reserved]
"urn:acme:orders:types" = "ord"
"#,
    );

    let config = ConfigLoader::new()
        .with_defaults()
        .with_file(file.path())
        .unwrap()
        .load()
        .unwrap();
    let mut context = ptolemy::aggregation_context(&config).unwrap();

    assert!(context.use_source_parameter_names());
    assert_eq!(context.context_path(), "/services");

    context.add(fixtures::order_service());
    context.add(fixtures::order_service());

    assert_eq!(context.endpoint_interfaces().len(), 1);
    assert_eq!(context.wsdls().get(fixtures::ORDERS_NS).unwrap().id(), "tns0");
    assert_eq!(
        context.schemas().get(fixtures::ORDER_TYPES_NS).unwrap().id(),
        "ord"
    );
    assert_eq!(
        context
            .reporter()
            .count(DiagnosticKind::DuplicateEndpointInterface),
        1
    );
}

#[test]
fn test_defaults_append_duplicates() {
    let config = ConfigLoader::new().with_defaults().load().unwrap();
    let mut context = ptolemy::aggregation_context(&config).unwrap();

    context.add(fixtures::inventory_service());
    context.add(fixtures::inventory_service());

    assert_eq!(context.endpoint_interfaces().len(), 2);
    assert_eq!(context.context_path(), "");
    assert!(!context.use_source_parameter_names());
}

#[test]
fn test_snapshot_export_after_config_wiring() {
    let config = PtolemyConfig::development();
    let mut context = ptolemy::aggregation_context(&config).unwrap();
    context.add(fixtures::order_service());
    context.add(fixtures::sourceless_endpoint("com.acme.Lost", fixtures::ORDERS_NS));

    let snapshot = context.snapshot();
    assert_eq!(snapshot.diagnostics["SOURCE_FILES_NOT_FOUND"], 1);
    let json = snapshot.to_json().unwrap();
    assert!(json.contains("com.acme.Lost"));
    assert!(json.contains(fixtures::ORDER_TYPES_NS));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let file = toml_file(
        r#"
[aggregation]
context_root = "/typo"
"#,
    );

    let result = ConfigLoader::new().with_defaults().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::TomlError(_))));
}
