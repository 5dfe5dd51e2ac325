use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// Declares how `$ref` fragments are read. Only JSON Pointer is supported, so once bound
/// there is nothing left to check.
#[derive(Debug)]
pub(crate) struct FragmentResolutionValidator;

impl Validate for FragmentResolutionValidator {
    fn validate(&self, _: &JsonSchema<'_>, _: &mut ValidationContext<'_>, _: &Value) {}
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema.as_str() {
        Some("json-pointer") => Ok(KeywordValidator::FragmentResolution(
            FragmentResolutionValidator,
        )),
        _ => Err(SchemaError::unsupported_keyword(
            "fragmentResolution",
            format!(r#"only "json-pointer" is supported, found {}"#, schema),
        )),
    }
}
