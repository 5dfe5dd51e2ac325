use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    keywords::{helpers::non_negative_integer, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct MaxItemsValidator {
    limit: u64,
}

impl Validate for MaxItemsValidator {
    fn validate_array(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, items: &[Value]) {
        if (items.len() as u64) > self.limit {
            ctx.add_message(format!("array has more than {} items", self.limit));
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    Ok(KeywordValidator::MaxItems(MaxItemsValidator {
        limit: non_negative_integer("maxItems", schema)?,
    }))
}
