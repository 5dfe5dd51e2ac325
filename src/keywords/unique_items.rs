use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{helpers::is_unique, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Bound even for `false`, which accepts everything.
#[derive(Debug)]
pub(crate) struct UniqueItemsValidator {
    enabled: bool,
}

impl Validate for UniqueItemsValidator {
    fn validate_array(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, items: &[Value]) {
        if self.enabled && !is_unique(items) {
            ctx.add_message("array elements are not unique");
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Bool(enabled) => Ok(KeywordValidator::UniqueItems(UniqueItemsValidator {
            enabled: *enabled,
        })),
        _ => Err(SchemaError::invalid_keyword("uniqueItems", "a boolean", schema)),
    }
}
