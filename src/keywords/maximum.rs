use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{helpers::compare, minimum::exclusive_flag, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// `maximum`, strict when the sibling `exclusiveMaximum` is `true`.
#[derive(Debug)]
pub(crate) struct MaximumValidator {
    limit: Number,
    exclusive: bool,
}

impl Validate for MaximumValidator {
    fn validate_number(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, item: &Number) {
        match compare(item, &self.limit) {
            Some(Ordering::Greater) => ctx.add_message(format!(
                "instance is greater than the required maximum {}",
                self.limit
            )),
            Some(Ordering::Equal) if self.exclusive => ctx.add_message(format!(
                "instance is not strictly lower than the required maximum {}",
                self.limit
            )),
            _ => {}
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(parent: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Number(limit) => Ok(KeywordValidator::Maximum(MaximumValidator {
            limit: limit.clone(),
            exclusive: exclusive_flag(parent, "exclusiveMaximum")?,
        })),
        _ => Err(SchemaError::invalid_keyword("maximum", "a number", schema)),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"maximum": 3}), json!(3))]
    #[test_case(json!({"maximum": 3.5}), json!(3))]
    #[test_case(json!({"maximum": 3, "exclusiveMaximum": true}), json!(2.9))]
    #[test_case(json!({"maximum": 3}), json!(null))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance)
    }

    #[test_case(json!({"maximum": 3}), json!(4), "#: instance is greater than the required maximum 3")]
    #[test_case(json!({"maximum": 3, "exclusiveMaximum": true}), json!(3), "#: instance is not strictly lower than the required maximum 3")]
    fn invalid(schema: Value, instance: Value, expected: &str) {
        tests_util::expect_messages(&schema, &instance, &[expected])
    }
}
