use jsonschema_draft3::{loader, JsonValidator};
use serde_json::{json, Value};
use test_case::test_case;

fn meta_schema() -> Value {
    loader::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/draft-03-schema.json"))
        .expect("Valid fixture")
}

#[test]
fn schema_validates_itself() {
    let schema = meta_schema();
    let report = JsonValidator::new(schema.clone()).validate(&schema);
    assert!(report.is_success(), "{}", report);
}

#[test_case(json!({}))]
#[test_case(json!({"type": ["string", {"type": "integer"}], "disallow": "null"}))]
#[test_case(json!({"properties": {"a": {"required": true, "$ref": "#"}}, "additionalProperties": false}))]
#[test_case(json!({"items": [{}, {"type": "any"}], "additionalItems": {"minimum": 0, "exclusiveMinimum": true}}))]
#[test_case(json!({"dependencies": {"a": "b", "c": ["d"], "e": {"maxLength": 1}}}))]
#[test_case(json!({"enum": [1, "1"], "divisibleBy": 0.5, "pattern": "^[a-z]+$"}))]
fn valid_schemas(schema: Value) {
    let report = JsonValidator::new(meta_schema()).validate(&schema);
    assert!(report.is_success(), "{}", report);
}

#[test_case(json!({"type": 5}), "#/type: instance is of type integer, which is none of the allowed types (array, string)")]
#[test_case(json!({"minItems": -1}), "#/minItems: instance is lower than the required minimum 0")]
#[test_case(json!({"divisibleBy": 0}), "#/divisibleBy: instance is not strictly greater than the required minimum 0")]
#[test_case(json!({"exclusiveMinimum": true}), r#"#: property "exclusiveMinimum" depends on "minimum", which is missing"#)]
#[test_case(json!({"enum": [1, 1.0]}), "#/enum: array elements are not unique")]
#[test_case(json!({"pattern": "(unclosed"}), "#/pattern: string is not a valid regex")]
#[test_case(json!({"properties": {"a": 1}}), "#/properties/a: instance is of type integer, which is none of the allowed types (object)")]
fn invalid_schemas(schema: Value, expected: &str) {
    let report = JsonValidator::new(meta_schema()).validate(&schema);
    assert!(!report.is_success());
    assert!(!report.is_error());
    let messages: Vec<String> = report.messages().iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec![expected.to_string()]);
}
