//! Nested objects, arrays and renamed properties, generated from YAML.

use cfgen_core::detail::{DoubleAdaptor, Range, StringViewAdaptor};
use cfgen_integration_tests::server::{
    make_config, ServerConfig, ServerConfigListenersItemClass, ServerConfigTlsClass,
};
use serde_json::{json, Value};

fn server_tree() -> Value {
    json!({
        "name": "edge",
        "listen-port": 8443,
        "type": "canary",
        "tls": {"cert": "/etc/tls/cert.pem", "key": "/etc/tls/key.pem"},
        "listeners": [
            {"host": "0.0.0.0", "port": 80},
            {"host": "::", "port": 443}
        ],
        "tags": ["public", "eu"],
        "weights": [[0.5, 0.5], [1.0]]
    })
}

#[test]
fn test_scalar_and_renamed_properties() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    assert_eq!(conf.name(), "edge");
    let port: u16 = conf.listen_port();
    assert_eq!(port, 8443);
    assert_eq!(conf.r#type(), Some("canary"));
}

#[test]
fn test_nested_object() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    let tls: ServerConfigTlsClass<'_> = conf.tls().unwrap();
    assert_eq!(tls.cert(), "/etc/tls/cert.pem");
    assert_eq!(tls.key(), "/etc/tls/key.pem");
    assert_eq!(tls.verify(), None);
    assert!(std::ptr::eq(tls.node(), &tree["tls"]));
}

#[test]
fn test_absent_optional_object() {
    let mut tree = server_tree();
    tree.as_object_mut().unwrap().remove("tls");
    let conf = make_config(&tree).unwrap();
    assert!(conf.tls().is_none());
}

#[test]
fn test_array_of_objects() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    let listeners: Range<'_, ServerConfigListenersItemClass<'_>> = conf.listeners();

    assert_eq!(listeners.len(), 2);
    let ports: Vec<u16> = listeners.iter().map(|l| l.port()).collect();
    assert_eq!(ports, vec![80, 443]);
    assert_eq!(listeners.get(1).map(|l| l.host()), Some("::"));
    assert!(listeners.get(2).is_none());
}

#[test]
fn test_ranges_restart() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    let listeners = conf.listeners();
    let first: Vec<&str> = listeners.iter().map(|l| l.host()).collect();
    let second: Vec<&str> = listeners.into_iter().map(|l| l.host()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_array_of_strings() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    let tags: Range<'_, StringViewAdaptor> = conf.tags().unwrap();
    assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["public", "eu"]);
}

#[test]
fn test_array_of_arrays() {
    let tree = server_tree();
    let conf = make_config(&tree).unwrap();
    let weights: Range<'_, Range<'_, DoubleAdaptor>> = conf.weights().unwrap();
    let sums: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();
    assert_eq!(sums, vec![1.0, 1.0]);
}

#[test]
fn test_scalar_node_is_single_element_range() {
    let tree = json!({"tags": "solo"});
    let conf = ServerConfig::new(&tree);
    let tags = conf.tags().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get(0), Some("solo"));
}

#[test]
fn test_missing_required_array_is_empty() {
    let tree = json!({});
    let conf = ServerConfig::new(&tree);
    assert!(conf.listeners().is_empty());
    assert_eq!(conf.listeners().iter().count(), 0);
}

#[test]
fn test_invalid_nested_value_is_rejected() {
    let mut tree = server_tree();
    tree["listeners"][1]["port"] = json!(70_000);
    let err = make_config(&tree).unwrap_err();
    assert!(err
        .violations()
        .iter()
        .any(|v| v.instance_path == "/listeners/1/port"));
}

#[test]
fn test_invalid_port_is_rejected() {
    let mut tree = server_tree();
    tree["listen-port"] = json!(0);
    assert!(make_config(&tree).is_err());
}
