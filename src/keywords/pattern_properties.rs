use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{pattern::convert_regex, CompilationResult, KeywordValidator},
    validator::Validate,
};
use regex::Regex;
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct PatternPropertiesValidator<'s> {
    patterns: Vec<(Regex, &'s Value)>,
}

/// Compile the keys of a `patternProperties` value.
pub(crate) fn compile_patterns(
    map: &Map<String, Value>,
) -> Result<Vec<(Regex, &Value)>, SchemaError> {
    let mut patterns = Vec::with_capacity(map.len());
    for (pattern, subschema) in map {
        patterns.push((convert_regex("patternProperties", pattern)?, subschema));
    }
    Ok(patterns)
}

impl Validate for PatternPropertiesValidator<'_> {
    fn validate_object(
        &self,
        schema: &JsonSchema<'_>,
        ctx: &mut ValidationContext<'_>,
        item: &Map<String, Value>,
    ) {
        for (name, value) in item {
            for (re, subschema) in &self.patterns {
                if re.is_match(name) {
                    let mut child = ctx.descend(name.as_str());
                    schema.validate_child(subschema, &mut child, value);
                    ctx.merge(child);
                    if ctx.is_fatal() {
                        return;
                    }
                }
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Object(map) => Ok(KeywordValidator::PatternProperties(
            PatternPropertiesValidator {
                patterns: compile_patterns(map)?,
            },
        )),
        _ => Err(SchemaError::invalid_keyword(
            "patternProperties",
            "an object",
            schema,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn every_matching_pattern_applies() {
        let schema = json!({"patternProperties": {"^a": {"type": "integer"}, "b$": {"minimum": 10}}});
        tests_util::is_valid(&schema, &json!({"ab": 11, "c": "ignored"}));
        tests_util::expect_messages(
            &schema,
            &json!({"ab": 1.5}),
            &[
                "#/ab: instance is of type number, which is none of the allowed types (integer)",
                "#/ab: instance is lower than the required minimum 10",
            ],
        );
    }
}
