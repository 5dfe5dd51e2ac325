use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::{ResolutionError, SchemaError},
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Follows a reference and validates the instance against its target.
#[derive(Debug)]
pub(crate) struct RefValidator<'s> {
    reference: &'s str,
}

impl Validate for RefValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        let (container, pointer) = match schema.container.resolve(self.reference) {
            Ok(target) => target,
            Err(error) => {
                ctx.fatal(error);
                return;
            }
        };
        let target = match container.lookup(&pointer) {
            Ok(target) => target,
            Err(error) => {
                ctx.fatal(error);
                return;
            }
        };
        let link = container.link(&pointer);
        if ctx.in_chain(&link) {
            ctx.fatal(ResolutionError::self_reference_loop(target));
            return;
        }
        ctx.within(link, |ctx| {
            JsonSchema::validate_node(&container, target, ctx, instance)
        });
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema.as_str() {
        Some(reference) => Ok(KeywordValidator::Ref(RefValidator { reference })),
        None => Err(SchemaError::invalid_keyword("$ref", "a string", schema)),
    }
}
