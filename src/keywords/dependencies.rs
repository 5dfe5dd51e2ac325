use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
enum Dependency<'s> {
    /// Sibling properties that must be present.
    Simple(Vec<&'s str>),
    /// A schema the whole instance must validate against.
    Schema(&'s Value),
}

#[derive(Debug)]
pub(crate) struct DependenciesValidator<'s> {
    dependencies: Vec<(&'s str, Dependency<'s>)>,
}

impl Validate for DependenciesValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        let item = match instance {
            Value::Object(item) => item,
            _ => return,
        };
        for (property, dependency) in &self.dependencies {
            if !item.contains_key(*property) {
                continue;
            }
            match dependency {
                Dependency::Simple(required) => {
                    for name in required {
                        if !item.contains_key(*name) {
                            ctx.add_message(format!(
                                r#"property "{}" depends on "{}", which is missing"#,
                                property, name
                            ));
                        }
                    }
                }
                Dependency::Schema(node) => {
                    schema.validate_child(node, ctx, instance);
                    if ctx.is_fatal() {
                        return;
                    }
                }
            }
        }
    }
}

fn unsupported_dependency() -> SchemaError {
    SchemaError::unsupported_keyword(
        "dependencies",
        "dependency is neither a simple dependency nor a schema dependency",
    )
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    let map = match schema {
        Value::Object(map) => map,
        _ => return Err(SchemaError::invalid_keyword("dependencies", "an object", schema)),
    };
    let mut dependencies = Vec::with_capacity(map.len());
    for (property, value) in map {
        let dependency = match value {
            Value::String(name) => Dependency::Simple(vec![name.as_str()]),
            Value::Array(names) => Dependency::Simple(
                names
                    .iter()
                    .map(|name| name.as_str().ok_or_else(unsupported_dependency))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(_) => Dependency::Schema(value),
            _ => return Err(unsupported_dependency()),
        };
        dependencies.push((property.as_str(), dependency));
    }
    Ok(KeywordValidator::Dependencies(DependenciesValidator {
        dependencies,
    }))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"a": "b"}), json!({"a": 1, "b": 2}))]
    #[test_case(json!({"a": "b"}), json!({"c": 1}))]
    #[test_case(json!({"a": ["b", "c"]}), json!({"a": 1, "b": 2, "c": 3}))]
    #[test_case(json!({"a": {"properties": {"b": {"type": "integer"}}}}), json!({"a": 1, "b": 2}))]
    #[test_case(json!({"a": "b"}), json!(["a"]))]
    fn valid(dependencies: Value, instance: Value) {
        tests_util::is_valid(&json!({ "dependencies": dependencies }), &instance)
    }

    #[test_case(json!({"a": "b"}), json!({"a": 1}), r#"#: property "a" depends on "b", which is missing"#)]
    #[test_case(json!({"a": ["b", "c"]}), json!({"a": 1, "b": 2}), r#"#: property "a" depends on "c", which is missing"#)]
    #[test_case(
        json!({"a": {"properties": {"b": {"type": "integer"}}}}),
        json!({"a": 1, "b": "x"}),
        "#/b: instance is of type string, which is none of the allowed types (integer)"
    )]
    #[test_case(
        json!({"a": 5}),
        json!({}),
        r#"#: ERROR: unsupported keyword "dependencies": dependency is neither a simple dependency nor a schema dependency"#
    )]
    #[test_case(
        json!({"a": ["b", 1]}),
        json!({}),
        r#"#: ERROR: unsupported keyword "dependencies": dependency is neither a simple dependency nor a schema dependency"#
    )]
    fn invalid(dependencies: Value, instance: Value, expected: &str) {
        tests_util::expect_messages(&json!({ "dependencies": dependencies }), &instance, &[expected])
    }
}
