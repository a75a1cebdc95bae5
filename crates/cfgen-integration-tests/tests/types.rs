//! Scalar accessors and embedded-schema validation.

use cfgen_core::SchemaError;
use cfgen_integration_tests::types::{make_config, TypeConfig};
use serde_json::{json, Value};

fn valid_tree() -> Value {
    json!({
        "aString": "hello",
        "i8": -12,
        "u8": 200,
        "anInt": 1_234_567_890_123_i64,
        "aDouble": 3.25,
        "aWholeNumber": 42,
        "aBool": true
    })
}

#[test]
fn test_typed_accessors() {
    let tree = valid_tree();
    let conf = make_config(&tree).unwrap();

    let s: &str = conf.aString();
    let i: i8 = conf.i8();
    let u: u8 = conf.u8();
    let n: i64 = conf.anInt();
    let d: f64 = conf.aDouble();
    let w: u16 = conf.aWholeNumber();
    let b: bool = conf.aBool();

    assert_eq!(s, "hello");
    assert_eq!(i, -12);
    assert_eq!(u, 200);
    assert_eq!(n, 1_234_567_890_123);
    assert_eq!(d, 3.25);
    assert_eq!(w, 42);
    assert!(b);
}

#[test]
fn test_optional_accessors() {
    let tree = valid_tree();
    let conf = make_config(&tree).unwrap();
    let s: Option<&str> = conf.anOptionalString();
    let p: Option<u16> = conf.anOptionalU16();
    assert_eq!(s, None);
    assert_eq!(p, None);

    let mut tree = valid_tree();
    tree["anOptionalString"] = json!("present");
    tree["anOptionalU16"] = json!(8080);
    let conf = make_config(&tree).unwrap();
    assert_eq!(conf.anOptionalString(), Some("present"));
    assert_eq!(conf.anOptionalU16(), Some(8080));
}

#[test]
fn test_string_borrows_from_tree() {
    let tree = valid_tree();
    let s = {
        let conf = TypeConfig::new(&tree);
        conf.aString()
    };
    assert_eq!(s, "hello");
    assert!(std::ptr::eq(s, tree["aString"].as_str().unwrap()));
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut tree = valid_tree();
    tree["i8"] = json!(-22);

    let err = make_config(&tree).unwrap_err();
    assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].instance_path, "/i8");
    assert!(violations[0].schema_path.ends_with("minimum"));
}

#[test]
fn test_missing_required_is_rejected() {
    let mut tree = valid_tree();
    tree.as_object_mut().unwrap().remove("aBool");
    let err = make_config(&tree).unwrap_err();
    assert!(err.to_string().contains("aBool"));
}

#[test]
fn test_wrong_kind_is_rejected() {
    let mut tree = valid_tree();
    tree["aString"] = json!(5);
    assert!(make_config(&tree).is_err());
}

#[test]
fn test_unvalidated_tree_reads_zero_values() {
    let tree = json!({});
    let conf = TypeConfig::new(&tree);
    assert_eq!(conf.aString(), "");
    assert_eq!(conf.i8(), 0);
    assert_eq!(conf.anInt(), 0);
    assert_eq!(conf.aDouble(), 0.0);
    assert!(!conf.aBool());
    assert_eq!(conf.anOptionalString(), None);
}

#[test]
fn test_node_returns_bound_tree() {
    let tree = valid_tree();
    let conf = make_config(&tree).unwrap();
    assert!(std::ptr::eq(conf.node(), &tree));
}

#[test]
fn test_concurrent_first_use() {
    let tree = valid_tree();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| make_config(&tree).map(|conf| conf.i8())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), -12);
        }
    });
}
