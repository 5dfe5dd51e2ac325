use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    keywords::{type_::TypeUnion, CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Value};

/// The negation of `type`.
///
/// A listed schema whose trial validation ends in a schema defect or a resolution fault
/// counts as matched, and the fault is reported.
#[derive(Debug)]
pub(crate) struct DisallowValidator<'s> {
    union: TypeUnion<'s>,
}

impl Validate for DisallowValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        if self.union.matches_primitive(instance) {
            ctx.add_message("instance is of a disallowed primitive type");
            return;
        }
        for node in &self.union.schemas {
            let mut fork = ctx.fork();
            schema.validate_child(node, &mut fork, instance);
            if fork.is_success() {
                ctx.add_message("instance matches a disallowed schema");
                return;
            }
            if fork.is_error() {
                ctx.merge(fork);
                return;
            }
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    Ok(KeywordValidator::Disallow(DisallowValidator {
        union: TypeUnion::parse("disallow", schema)?,
    }))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"disallow": "string"}), json!(1))]
    #[test_case(json!({"disallow": "number"}), json!(null))]
    #[test_case(json!({"disallow": [{"type": "string", "maxLength": 2}]}), json!("abc"))]
    fn valid(schema: Value, instance: Value) {
        tests_util::is_valid(&schema, &instance)
    }

    #[test_case(json!({"disallow": "any"}), json!({}), "#: instance is of a disallowed primitive type")]
    #[test_case(json!({"disallow": "number"}), json!(3), "#: instance is of a disallowed primitive type")]
    #[test_case(json!({"disallow": ["null", {"maxLength": 2}]}), json!("ab"), "#: instance matches a disallowed schema")]
    #[test_case(
        json!({"disallow": [{"$ref": "#"}]}),
        json!(null),
        r##"#: FATAL: schema {"disallow":[{"$ref":"#"}]} loops on itself"##
    )]
    #[test_case(
        json!({"disallow": [{"$ref": "#/nope"}]}),
        json!(1),
        "#: FATAL: no match in schema for path #/nope"
    )]
    fn invalid(schema: Value, instance: Value, expected: &str) {
        tests_util::expect_messages(&schema, &instance, &[expected])
    }

    #[test]
    fn defective_branch_counts_as_matched() {
        let report = crate::validate(&json!({"disallow": [{"minItems": -1}]}), &json!([]));
        assert!(report.is_error());
        assert_eq!(
            report.messages()[0].to_string(),
            r#"#: ERROR: keyword "minItems" must be a non-negative integer, found -1"#
        );
    }
}
