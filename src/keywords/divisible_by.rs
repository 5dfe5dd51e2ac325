use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use serde_json::{Map, Number, Value};

/// Relative error tolerated when the quotient of two floats is checked for integrality.
const TOLERANCE: f64 = 1e-10;

#[derive(Debug)]
pub(crate) struct DivisibleByValidator {
    divisor: Number,
}

impl DivisibleByValidator {
    fn is_divisible(&self, item: &Number) -> bool {
        if let (Some(item), Some(divisor)) = (item.as_i64(), self.divisor.as_u64()) {
            return i128::from(item) % i128::from(divisor) == 0;
        }
        if let (Some(item), Some(divisor)) = (item.as_u64(), self.divisor.as_u64()) {
            return item % divisor == 0;
        }
        match (item.as_f64(), self.divisor.as_f64()) {
            (Some(item), Some(divisor)) => {
                let remainder = (item / divisor).fract().abs();
                remainder < TOLERANCE || 1. - remainder < TOLERANCE
            }
            _ => true,
        }
    }
}

impl Validate for DivisibleByValidator {
    fn validate_number(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, item: &Number) {
        if !self.is_divisible(item) {
            ctx.add_message(format!("instance is not divisible by {}", self.divisor));
        }
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::Number(divisor) if divisor.as_f64().map_or(false, |value| value > 0.) => {
            Ok(KeywordValidator::DivisibleBy(DivisibleByValidator {
                divisor: divisor.clone(),
            }))
        }
        _ => Err(SchemaError::invalid_keyword(
            "divisibleBy",
            "a number greater than zero",
            schema,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!(3), json!(9))]
    #[test_case(json!(3), json!(-9))]
    #[test_case(json!(3), json!(9.0))]
    #[test_case(json!(0.1), json!(0.3))]
    #[test_case(json!(0.01), json!(19.99))]
    #[test_case(json!(2), json!(u64::MAX - 1))]
    fn valid(divisor: Value, instance: Value) {
        tests_util::is_valid(&json!({"divisibleBy": divisor}), &instance)
    }

    #[test_case(json!(3), json!(10), "#: instance is not divisible by 3")]
    #[test_case(json!(1.5), json!(4), "#: instance is not divisible by 1.5")]
    #[test_case(json!(0), json!(4), r#"#: ERROR: keyword "divisibleBy" must be a number greater than zero, found 0"#)]
    fn invalid(divisor: Value, instance: Value, expected: &str) {
        tests_util::expect_messages(&json!({"divisibleBy": divisor}), &instance, &[expected])
    }
}
