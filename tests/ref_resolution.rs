use jsonschema_draft3::{validate, JsonValidator, SchemaResolver, SchemaResolverError, ValidationState};
use serde_json::{json, Value};
use std::sync::Arc;
use url::Url;

fn messages(schema: &Value, instance: &Value) -> Vec<String> {
    validate(schema, instance)
        .messages()
        .iter()
        .map(ToString::to_string)
        .collect()
}

struct UnknownHost;

impl SchemaResolver for UnknownHost {
    fn resolve(&self, url: &Url) -> Result<Arc<Value>, SchemaResolverError> {
        Err(anyhow::anyhow!(
            "unknown host {}",
            url.host_str().unwrap_or_default()
        ))
    }
}

#[test]
fn self_loop_is_fatal() {
    let schema = json!({"$ref": "#"});
    let report = validate(&schema, &json!(1));
    assert_eq!(report.state(), ValidationState::Fatal);
    assert!(report.is_error());
    assert_eq!(
        messages(&schema, &json!(1)),
        vec![r##"#: FATAL: schema {"$ref":"#"} loops on itself"##]
    );
}

#[test]
fn indirect_loop_is_fatal() {
    let schema = json!({
        "definitions": {
            "a": {"$ref": "#/definitions/b"},
            "b": {"$ref": "#/definitions/a"}
        },
        "properties": {"x": {"$ref": "#/definitions/a"}}
    });
    let found = messages(&schema, &json!({"x": 1}));
    assert_eq!(found.len(), 1);
    assert!(found[0].starts_with("#/x: FATAL: schema "), "{}", found[0]);
    assert!(found[0].ends_with(" loops on itself"), "{}", found[0]);
}

#[test]
fn recursive_schema_is_not_a_loop() {
    let schema = json!({
        "properties": {
            "value": {"type": "integer"},
            "next": {"$ref": "#"}
        }
    });
    let instance = json!({"value": 1, "next": {"value": 2, "next": {"value": "3"}}});
    assert_eq!(
        messages(&schema, &instance),
        vec!["#/next/next/value: instance is of type string, which is none of the allowed types (integer)"]
    );
}

#[test]
fn disallow_loop_is_fatal() {
    let schema = json!({"disallow": [{"$ref": "#"}]});
    let report = validate(&schema, &json!(null));
    assert_eq!(report.state(), ValidationState::Fatal);
    assert_eq!(
        messages(&schema, &json!(null)),
        vec![r##"#: FATAL: schema {"disallow":[{"$ref":"#"}]} loops on itself"##]
    );
}

#[test]
fn missing_pointer_is_fatal() {
    let schema = json!({"$ref": "#/nope"});
    assert_eq!(
        messages(&schema, &json!(null)),
        vec!["#: FATAL: no match in schema for path #/nope"]
    );
}

#[test]
fn fatal_path_is_where_the_fault_occurs() {
    let schema = json!({"items": {"properties": {"a": {"$ref": "#/missing"}}}});
    assert_eq!(
        messages(&schema, &json!([{}, {"a": 1}])),
        vec!["#/1/a: FATAL: no match in schema for path #/missing"]
    );
}

#[test]
fn fatal_stops_further_messages() {
    let schema = json!({
        "properties": {
            "a": {"$ref": "#/missing"},
            "b": {"type": "string"}
        },
        "minLength": 10
    });
    let report = validate(&schema, &json!({"a": 1, "b": 2}));
    assert_eq!(report.state(), ValidationState::Fatal);
    assert_eq!(report.messages().len(), 1);
}

#[test]
fn unsupported_scheme() {
    let schema = json!({"$ref": "ftp://example.com/schema.json"});
    assert_eq!(
        messages(&schema, &json!(1)),
        vec!["#: FATAL: cannot use ref ftp://example.com/schema.json, only HTTP is supported currently"]
    );
}

#[test]
fn relative_reference_is_invalid() {
    let schema = json!({"$ref": "a/b/c#/d/e"});
    assert_eq!(
        messages(&schema, &json!(1)),
        vec!["#: FATAL: invalid URI a/b/c#/d/e: non absolute URI but non empty scheme specific part"]
    );
}

#[test]
fn download_failure_is_fatal() {
    let schema = json!({"properties": {"a": {"$ref": "http://host#/definitions/x"}}});
    let report = JsonValidator::options()
        .with_resolver(UnknownHost)
        .build(schema)
        .validate(&json!({"a": 1}));
    assert!(report.is_error());
    let found: Vec<String> = report.messages().iter().map(ToString::to_string).collect();
    assert_eq!(
        found,
        vec!["#/a: FATAL: cannot download schema at ref http://host: unknown host host"]
    );
}

#[test]
fn unreachable_host_with_default_resolver() {
    let schema = json!({"$ref": "http://nonexistent.invalid/schema.json"});
    let found = messages(&schema, &json!(1));
    assert_eq!(found.len(), 1);
    assert!(
        found[0].starts_with("#: FATAL: cannot download schema at ref http://nonexistent.invalid/schema.json: "),
        "{}",
        found[0]
    );
}

#[test]
fn remote_documents_are_fetched_once() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/schema.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r##"{"definitions": {"positive": {"$ref": "#/definitions/number"}, "number": {"type": "number", "minimum": 0}}}"##,
        )
        .expect(1)
        .create();
    let reference = format!("{}/schema.json#/definitions/positive", server.url());
    let schema = json!({
        "properties": {
            "a": {"$ref": reference},
            "b": {"$ref": reference}
        }
    });
    assert_eq!(
        messages(&schema, &json!({"a": -1, "b": -2})),
        vec![
            "#/a: instance is lower than the required minimum 0",
            "#/b: instance is lower than the required minimum 0"
        ]
    );
    mock.assert();
}

#[test]
fn loop_across_documents_is_fatal() {
    let mut server = mockito::Server::new();
    let first = format!("{}/a.json", server.url());
    let second = format!("{}/b.json", server.url());
    let first_mock = server
        .mock("GET", "/a.json")
        .with_header("content-type", "application/json")
        .with_body(json!({"$ref": format!("{}#", second)}).to_string())
        .expect(1)
        .create();
    let second_mock = server
        .mock("GET", "/b.json")
        .with_header("content-type", "application/json")
        .with_body(json!({"$ref": format!("{}#", first)}).to_string())
        .expect(1)
        .create();
    let schema = json!({"$ref": format!("{}#", first)});
    assert_eq!(
        messages(&schema, &json!(1)),
        vec![format!(r#"#: FATAL: schema {{"$ref":"{}#"}} loops on itself"#, second)]
    );
    first_mock.assert();
    second_mock.assert();
}

#[test]
fn remote_http_error_is_fatal() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/missing.json").with_status(404).create();
    let reference = format!("{}/missing.json", server.url());
    let found = messages(&json!({"$ref": reference}), &json!(1));
    assert_eq!(found.len(), 1);
    assert!(
        found[0].starts_with(&format!("#: FATAL: cannot download schema at ref {}: ", reference)),
        "{}",
        found[0]
    );
    mock.assert();
}

#[test]
fn runs_are_independent() {
    let schema = json!({
        "properties": {
            "a": {"$ref": "#/definitions/small"},
            "b": {"disallow": "string"}
        },
        "definitions": {"small": {"maximum": 3}}
    });
    let validator = JsonValidator::new(schema);
    let instance = json!({"a": 5, "b": "x"});
    let first = validator.validate(&instance);
    let second = validator.validate(&instance);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.messages().len(), 2);
    assert!(!first.is_success());
    assert!(!first.is_error());
}

#[test]
fn schema_defects_are_errors_not_fatal() {
    let schema = json!({"properties": {"a": {"minimum": "zero"}}});
    let report = validate(&schema, &json!({"a": 1}));
    assert_eq!(report.state(), ValidationState::Error);
    assert!(report.is_error());
    assert_eq!(
        report.messages()[0].to_string(),
        r#"#/a: ERROR: keyword "minimum" must be a number, found "zero""#
    );
}
