use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{helpers, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct EnumValidator<'s> {
    options: &'s [Value],
}

impl Validate for EnumValidator<'_> {
    fn validate(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        if !self
            .options
            .iter()
            .any(|option| helpers::equal(instance, option))
        {
            ctx.add_message("instance does not match any enum value");
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Array(options) => Ok(KeywordValidator::Enum(EnumValidator { options })),
        _ => Err(SchemaError::invalid_keyword("enum", "an array", schema)),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!(1))]
    #[test_case(json!(1.0))]
    #[test_case(json!({"a": [null]}))]
    fn valid(instance: Value) {
        tests_util::is_valid(&json!({"enum": [1, "x", {"a": [null]}]}), &instance)
    }

    #[test_case(json!("1"))]
    #[test_case(json!({"a": []}))]
    fn invalid(instance: Value) {
        tests_util::expect_messages(
            &json!({"enum": [1, "x", {"a": [null]}]}),
            &instance,
            &["#: instance does not match any enum value"],
        )
    }
}
