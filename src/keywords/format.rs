//! Validator for `format` keyword.
use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Delegates to the checker registered under the format name, if any.
#[derive(Debug)]
pub(crate) struct FormatValidator<'s> {
    name: &'s str,
}

impl Validate for FormatValidator<'_> {
    fn validate(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        let format = match ctx.factory().format(self.name) {
            Some(format) => format,
            None => return,
        };
        if format.instance_types().contains_instance(instance) {
            for message in format.validate(instance) {
                ctx.add_message(message);
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema.as_str() {
        Some(name) => Ok(KeywordValidator::Format(FormatValidator { name })),
        None => Err(SchemaError::invalid_keyword("format", "a string", schema)),
    }
}
