use serde::Serialize;
use serde_ndf::{ndf, to_text, NdfMap, Number, Value};

#[test]
fn test_ndf_macro_null() {
    assert_eq!(ndf!(null), Value::Null);
}

#[test]
fn test_ndf_macro_booleans() {
    assert_eq!(ndf!(true), Value::Bool(true));
    assert_eq!(ndf!(false), Value::Bool(false));
}

#[test]
fn test_ndf_macro_numbers() {
    assert_eq!(ndf!(42), Value::Number(Number::Integer(42)));
    assert_eq!(ndf!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(ndf!(-123), Value::Number(Number::Integer(-123)));
    assert!(matches!(ndf!(u64::MAX), Value::Number(Number::BigInt(_))));
}

#[test]
fn test_ndf_macro_strings() {
    assert_eq!(ndf!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(ndf!(""), Value::String(String::new()));
}

#[test]
fn test_ndf_macro_lists() {
    assert_eq!(ndf!([]), Value::List(vec![]));

    assert_eq!(
        ndf!([1, "hello", true, null]),
        Value::List(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_ndf_macro_maps_keep_order() {
    assert_eq!(ndf!({}), Value::Map(NdfMap::new()));

    let value = ndf!({
        "zeta": 1,
        "alpha": 2,
        "mid": { "inner": [true, false] },
    });

    let map = value.as_map().unwrap();
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        ["zeta", "alpha", "mid"]
    );
    assert_eq!(
        map.get("mid").and_then(|v| v.as_map()).and_then(|m| m.get("inner")),
        Some(&Value::List(vec![Value::Bool(true), Value::Bool(false)]))
    );
}

#[test]
fn test_ndf_macro_expression_fallback() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let origin = Point { x: 0, y: 5 };
    let value = ndf!({ "origin": origin, "label": (format!("p{}", 1)) });

    let map = value.as_map().unwrap();
    assert_eq!(
        map.get("origin").and_then(|v| v.as_map()).and_then(|m| m.get("y")),
        Some(&Value::from(5))
    );
    assert_eq!(map.get("label"), Some(&Value::from("p1")));
}

#[test]
fn test_ndf_macro_renders() {
    let value = ndf!({
        "title": "Inbox",
        "count": 2,
        "labels": ["a", "b"]
    });
    let text = to_text(value.as_map().unwrap()).unwrap();
    assert_eq!(text, "title: Inbox\ncount: 2\nlabels: a, b");
}
