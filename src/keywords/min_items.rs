use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    keywords::{helpers::non_negative_integer, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct MinItemsValidator {
    limit: u64,
}

impl Validate for MinItemsValidator {
    fn validate_array(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, items: &[Value]) {
        if (items.len() as u64) < self.limit {
            ctx.add_message(format!("array has fewer than {} items", self.limit));
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    Ok(KeywordValidator::MinItems(MinItemsValidator {
        limit: non_negative_integer("minItems", schema)?,
    }))
}
