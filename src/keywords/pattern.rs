use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    validator::Validate,
};
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::ops::Index;

lazy_static::lazy_static! {
    static ref CONTROL_GROUPS_RE: Regex = Regex::new(r"\\c[A-Za-z]").expect("Is a valid regex");
}

#[derive(Debug)]
pub(crate) struct PatternValidator {
    original: String,
    pattern: Regex,
}

impl Validate for PatternValidator {
    fn validate_string(&self, _: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, item: &str) {
        if !self.pattern.is_match(item) {
            ctx.add_message(format!(r#"string does not match regex "{}""#, self.original));
        }
    }
}

/// Compile an ECMA 262 regex. Character classes keep their ASCII meaning.
pub(crate) fn convert_regex(keyword: &'static str, pattern: &str) -> Result<Regex, SchemaError> {
    // replace control chars
    let new_pattern = CONTROL_GROUPS_RE.replace_all(pattern, replace_control_group);
    Regex::new(
        &new_pattern
            .replace(r"\d", "[0-9]")
            .replace(r"\D", "[^0-9]")
            .replace(r"\w", "[A-Za-z0-9_]")
            .replace(r"\W", "[^A-Za-z0-9_]")
            .replace(r"\s", "[ \t\n\r\x0b\x0c]")
            .replace(r"\S", "[^ \t\n\r\x0b\x0c]"),
    )
    .map_err(|error| SchemaError::invalid_regex(keyword, pattern, error))
}

#[allow(clippy::integer_arithmetic)]
fn replace_control_group(captures: &Captures) -> String {
    // There will be no overflow, because the minimum value is 65 (char 'A')
    ((captures
        .index(0)
        .trim_start_matches(r"\c")
        .chars()
        .next()
        .expect("This is always present because of the regex rule. It has [A-Za-z] next")
        .to_ascii_uppercase() as u8
        - 64) as char)
        .to_string()
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    match schema {
        Value::String(item) => Ok(KeywordValidator::Pattern(PatternValidator {
            original: item.clone(),
            pattern: convert_regex("pattern", item)?,
        })),
        _ => Err(SchemaError::invalid_keyword("pattern", "a string", schema)),
    }
}
