use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    keywords::{helpers::non_negative_integer, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct MaxLengthValidator {
    limit: u64,
}

impl Validate for MaxLengthValidator {
    fn validate_string(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, item: &str) {
        if (item.chars().count() as u64) > self.limit {
            ctx.add_message(format!("string is longer than {} characters", self.limit));
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    Ok(KeywordValidator::MaxLength(MaxLengthValidator {
        limit: non_negative_integer("maxLength", schema)?,
    }))
}
