use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{helpers::compare, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// `minimum`, strict when the sibling `exclusiveMinimum` is `true`.
#[derive(Debug)]
pub(crate) struct MinimumValidator {
    limit: Number,
    exclusive: bool,
}

impl Validate for MinimumValidator {
    fn validate_number(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, item: &Number) {
        match compare(item, &self.limit) {
            Some(Ordering::Less) => ctx.add_message(format!(
                "instance is lower than the required minimum {}",
                self.limit
            )),
            Some(Ordering::Equal) if self.exclusive => ctx.add_message(format!(
                "instance is not strictly greater than the required minimum {}",
                self.limit
            )),
            _ => {}
        }
    }
}

/// Value of an `exclusiveMinimum` / `exclusiveMaximum` modifier.
pub(crate) fn exclusive_flag(
    parent: &Map<String, Value>,
    keyword: &'static str,
) -> Result<bool, SchemaError> {
    match parent.get(keyword) {
        None => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(value) => Err(SchemaError::invalid_keyword(keyword, "a boolean", value)),
    }
}

#[inline]
pub(crate) fn compile<'s>(parent: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Number(limit) => Ok(KeywordValidator::Minimum(MinimumValidator {
            limit: limit.clone(),
            exclusive: exclusive_flag(parent, "exclusiveMinimum")?,
        })),
        _ => Err(SchemaError::invalid_keyword("minimum", "a number", schema)),
    }
}
