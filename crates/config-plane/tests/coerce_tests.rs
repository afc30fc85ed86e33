use config_plane::{coerce, CoerceError, TypeTag};
use serde_json::{json, Value};

#[test]
fn int_accepts_numbers_and_numeric_strings() {
    assert_eq!(coerce(&json!(256), TypeTag::Int).expect("int"), json!(256));
    assert_eq!(
        coerce(&Value::String("30000".to_string()), TypeTag::Int).expect("int"),
        json!(30000)
    );
}

#[test]
fn int_rejects_garbage() {
    let err = coerce(&Value::String("not_int".to_string()), TypeTag::Int).expect_err("error");
    assert!(matches!(err, CoerceError::Int(_)));
}

#[test]
fn float_keeps_integral_strings_integral() {
    assert_eq!(
        coerce(&Value::String("1".to_string()), TypeTag::Float).expect("float"),
        json!(1)
    );
    assert_eq!(
        coerce(&Value::String("0.5".to_string()), TypeTag::Float).expect("float"),
        json!(0.5)
    );
    assert_eq!(coerce(&json!(2.5), TypeTag::Float).expect("float"), json!(2.5));
}

#[test]
fn boolean_parses_common_spellings() {
    assert_eq!(
        coerce(&Value::String("true".to_string()), TypeTag::Boolean).expect("bool"),
        json!(true)
    );
    assert_eq!(
        coerce(&Value::String("0".to_string()), TypeTag::Boolean).expect("bool"),
        json!(false)
    );
    assert_eq!(coerce(&json!(true), TypeTag::Boolean).expect("bool"), json!(true));
    let err = coerce(&Value::String("maybe".to_string()), TypeTag::Boolean).expect_err("error");
    assert!(matches!(err, CoerceError::Boolean(_)));
}

#[test]
fn json_parses_strings_and_passes_objects_through() {
    assert_eq!(
        coerce(&Value::String(r#"{"host":"influx"}"#.to_string()), TypeTag::Json).expect("json"),
        json!({ "host": "influx" })
    );
    assert_eq!(
        coerce(&json!({ "host": "influx" }), TypeTag::Json).expect("json"),
        json!({ "host": "influx" })
    );
    let err = coerce(&Value::String("{broken".to_string()), TypeTag::Json).expect_err("error");
    assert!(matches!(err, CoerceError::Json(_)));
}

#[test]
fn string_passes_through_unchanged() {
    assert_eq!(
        coerce(&Value::String("prometheus".to_string()), TypeTag::String).expect("string"),
        json!("prometheus")
    );
}
