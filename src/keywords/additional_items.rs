use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Applies to elements past the end of a tuple `items`. Without a tuple it accepts
/// everything.
#[derive(Debug)]
pub(crate) struct AdditionalItemsValidator<'s> {
    /// Length of the sibling tuple `items`.
    tuple: Option<usize>,
    extra: Extra<'s>,
}

#[derive(Debug)]
enum Extra<'s> {
    Allowed,
    Forbidden,
    Schema(&'s Value),
}

impl Validate for AdditionalItemsValidator<'_> {
    fn validate_array(
        &self,
        schema: &JsonSchema<'_>,
        ctx: &mut ValidationContext<'_>,
        items: &[Value],
    ) {
        let allowed = match self.tuple {
            Some(allowed) if items.len() > allowed => allowed,
            _ => return,
        };
        match self.extra {
            Extra::Allowed => {}
            Extra::Forbidden => ctx.add_message(format!(
                "additional items are not permitted ({} allowed, {} found)",
                allowed,
                items.len()
            )),
            Extra::Schema(node) => {
                for (idx, item) in items.iter().enumerate().skip(allowed) {
                    let mut child = ctx.descend(idx);
                    schema.validate_child(node, &mut child, item);
                    ctx.merge(child);
                    if ctx.is_fatal() {
                        return;
                    }
                }
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(parent: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    let extra = match schema {
        Value::Bool(true) => Extra::Allowed,
        Value::Bool(false) => Extra::Forbidden,
        Value::Object(_) => Extra::Schema(schema),
        _ => {
            return Err(SchemaError::invalid_keyword(
                "additionalItems",
                "a boolean or a schema",
                schema,
            ))
        }
    };
    let tuple = match parent.get("items") {
        Some(Value::Array(nodes)) => Some(nodes.len()),
        _ => None,
    };
    Ok(KeywordValidator::AdditionalItems(AdditionalItemsValidator {
        tuple,
        extra,
    }))
}
