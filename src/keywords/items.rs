use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) enum ItemsValidator<'s> {
    /// Every element against one schema.
    Uniform(&'s Value),
    /// Elements against schemas at the same position.
    Tuple(&'s [Value]),
}

impl Validate for ItemsValidator<'_> {
    fn validate_array(
        &self,
        schema: &JsonSchema<'_>,
        ctx: &mut ValidationContext<'_>,
        items: &[Value],
    ) {
        let pairs: Box<dyn Iterator<Item = (&Value, &Value)> + '_> = match self {
            ItemsValidator::Uniform(node) => Box::new(items.iter().map(move |item| (*node, item))),
            ItemsValidator::Tuple(nodes) => Box::new(nodes.iter().zip(items.iter())),
        };
        for (idx, (node, item)) in pairs.enumerate() {
            let mut child = ctx.descend(idx);
            schema.validate_child(node, &mut child, item);
            ctx.merge(child);
            if ctx.is_fatal() {
                return;
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Object(_) => Ok(KeywordValidator::Items(ItemsValidator::Uniform(schema))),
        Value::Array(nodes) => Ok(KeywordValidator::Items(ItemsValidator::Tuple(nodes))),
        _ => Err(SchemaError::invalid_keyword(
            "items",
            "a schema or an array of schemas",
            schema,
        )),
    }
}
