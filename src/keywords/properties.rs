use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Validates declared properties. A sub-schema carrying `"required": true` makes its
/// property mandatory.
#[derive(Debug)]
pub(crate) struct PropertiesValidator<'s> {
    properties: &'s Map<String, Value>,
}

impl Validate for PropertiesValidator<'_> {
    fn validate_object(
        &self,
        schema: &JsonSchema<'_>,
        ctx: &mut ValidationContext<'_>,
        item: &Map<String, Value>,
    ) {
        for (name, subschema) in self.properties {
            if let Some(value) = item.get(name) {
                let mut child = ctx.descend(name.as_str());
                schema.validate_child(subschema, &mut child, value);
                ctx.merge(child);
                if ctx.is_fatal() {
                    return;
                }
            } else if subschema.get("required") == Some(&Value::Bool(true)) {
                ctx.add_message(format!(r#"required property "{}" is missing"#, name));
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Object(properties) => Ok(KeywordValidator::Properties(PropertiesValidator { properties })),
        _ => Err(SchemaError::invalid_keyword("properties", "an object", schema)),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn nested_paths() {
        let schema = json!({
            "properties": {
                "a": {"type": "string"},
                "b": {"properties": {"c": {"minimum": 3}}},
                "d": {"required": true}
            }
        });
        tests_util::is_valid(&schema, &json!({"a": "x", "b": {"c": 4}, "d": null}));
        tests_util::is_valid(&schema, &json!(12));
        tests_util::expect_messages(
            &schema,
            &json!({"a": 1, "b": {"c": 2}}),
            &[
                "#/a: instance is of type integer, which is none of the allowed types (string)",
                "#/b/c: instance is lower than the required minimum 3",
                r#"#: required property "d" is missing"#,
            ],
        );
    }

    #[test]
    fn required_false() {
        tests_util::is_valid(&json!({"properties": {"a": {"required": false}}}), &json!({}));
    }

    #[test]
    fn escaped_path() {
        tests_util::expect_messages(
            &json!({"properties": {"a/b": {"type": "null"}}}),
            &json!({"a/b": 1}),
            &["#/a~1b: instance is of type integer, which is none of the allowed types (null)"],
        );
    }
}
