use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{
        helpers::quoted, pattern_properties::compile_patterns, CompilationResult,
        KeywordValidator,
    },
    validator::Validate,
};
use regex::Regex;
use serde_json::{Map, Value};

/// Applies to properties matched by neither the sibling `properties` nor the sibling
/// `patternProperties`.
#[derive(Debug)]
pub(crate) struct AdditionalPropertiesValidator<'s> {
    properties: Option<&'s Map<String, Value>>,
    patterns: Vec<Regex>,
    extra: Extra<'s>,
}

#[derive(Debug)]
enum Extra<'s> {
    Allowed,
    Forbidden,
    Schema(&'s Value),
}

impl AdditionalPropertiesValidator<'_> {
    fn is_additional(&self, name: &str) -> bool {
        !self
            .properties
            .map_or(false, |properties| properties.contains_key(name))
            && !self.patterns.iter().any(|re| re.is_match(name))
    }
}

impl Validate for AdditionalPropertiesValidator<'_> {
    fn validate_object(
        &self,
        schema: &JsonSchema<'_>,
        ctx: &mut ValidationContext<'_>,
        item: &Map<String, Value>,
    ) {
        match self.extra {
            Extra::Allowed => {}
            Extra::Forbidden => {
                let unexpected: Vec<&str> = item
                    .keys()
                    .map(String::as_str)
                    .filter(|name| self.is_additional(name))
                    .collect();
                if !unexpected.is_empty() {
                    ctx.add_message(format!(
                        "additional properties are not permitted (unexpected: {})",
                        quoted(unexpected)
                    ));
                }
            }
            Extra::Schema(node) => {
                for (name, value) in item {
                    if self.is_additional(name) {
                        let mut child = ctx.descend(name.as_str());
                        schema.validate_child(node, &mut child, value);
                        ctx.merge(child);
                        if ctx.is_fatal() {
                            return;
                        }
                    }
                }
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(parent: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    let extra = match schema {
        Value::Bool(true) => Extra::Allowed,
        Value::Bool(false) => Extra::Forbidden,
        Value::Object(_) => Extra::Schema(schema),
        _ => {
            return Err(SchemaError::invalid_keyword(
                "additionalProperties",
                "a boolean or a schema",
                schema,
            ))
        }
    };
    let patterns = match parent.get("patternProperties") {
        Some(Value::Object(map)) => compile_patterns(map)?
            .into_iter()
            .map(|(re, _)| re)
            .collect(),
        _ => Vec::new(),
    };
    Ok(KeywordValidator::AdditionalProperties(
        AdditionalPropertiesValidator {
            properties: parent.get("properties").and_then(Value::as_object),
            patterns,
            extra,
        },
    ))
}
