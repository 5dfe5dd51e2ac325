use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// The instance must also be valid against every listed schema. Messages land in the
/// same context, at the same path.
#[derive(Debug)]
pub(crate) struct ExtendsValidator<'s> {
    schemas: Vec<&'s Value>,
}

impl Validate for ExtendsValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        for node in &self.schemas {
            schema.validate_child(node, ctx, instance);
            if ctx.is_fatal() {
                return;
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    let schemas = match schema {
        Value::Object(_) => vec![schema],
        Value::Array(nodes) => nodes.iter().collect(),
        _ => {
            return Err(SchemaError::invalid_keyword(
                "extends",
                "a schema or an array of schemas",
                schema,
            ))
        }
    };
    Ok(KeywordValidator::Extends(ExtendsValidator { schemas }))
}
