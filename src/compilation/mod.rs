//! Building validation units out of schema nodes.
//! A unit binds one validator per recognized keyword of its node; units are built on
//! demand while the instance is walked and are never kept across runs.
pub(crate) mod options;

use crate::{
    context::ValidationContext,
    error::SchemaError,
    formats::{self, FormatValidator},
    keywords::{self, KeywordValidator},
    resolver::SchemaContainer,
    validator::Validate,
};
use ahash::AHashMap;
use serde_json::Value;
use std::{fmt, sync::Arc};
use tracing::trace;

/// A schema node paired with the validators bound to its keywords.
#[derive(Debug)]
pub struct JsonSchema<'s> {
    pub(crate) node: &'s Value,
    pub(crate) container: &'s SchemaContainer,
    pub(crate) validators: Vec<KeywordValidator<'s>>,
}

impl<'s> JsonSchema<'s> {
    /// Run every bound validator against `instance`, in registration order.
    /// Stops as soon as the context turns FATAL.
    pub fn validate(&self, ctx: &mut ValidationContext<'_>, instance: &Value) {
        for validator in &self.validators {
            trace!(
                keyword = validator.keyword().name(),
                path = %ctx.path(),
                "checking keyword"
            );
            validator.validate(self, ctx, instance);
            if ctx.is_fatal() {
                break;
            }
        }
    }

    /// Validate `instance` against `node`, a sub-schema of this unit's document.
    #[inline]
    pub(crate) fn validate_child(
        &self,
        node: &Value,
        ctx: &mut ValidationContext<'_>,
        instance: &Value,
    ) {
        JsonSchema::validate_node(self.container, node, ctx, instance)
    }

    /// Build the unit for `node` and validate `instance` against it.
    /// A defective node is recorded as a schema error on `ctx`.
    pub(crate) fn validate_node(
        container: &SchemaContainer,
        node: &Value,
        ctx: &mut ValidationContext<'_>,
        instance: &Value,
    ) {
        match ctx.factory().create(container, node) {
            Ok(schema) => schema.validate(ctx, instance),
            Err(error) => ctx.error(error),
        }
    }

    /// The schema node this unit was built from.
    #[must_use]
    pub fn node(&self) -> &'s Value {
        self.node
    }

    /// Number of bound keyword validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Builds [`JsonSchema`] units. Holds the formats registered for a validator; the keyword
/// registry itself is static.
#[derive(Clone, Default)]
pub struct JsonSchemaFactory {
    formats: AHashMap<String, Arc<dyn FormatValidator>>,
}

impl JsonSchemaFactory {
    pub(crate) fn new(formats: AHashMap<String, Arc<dyn FormatValidator>>) -> JsonSchemaFactory {
        JsonSchemaFactory { formats }
    }

    /// Bind a validator to every recognized keyword of `node`.
    ///
    /// When `$ref` is present it is the only validator; sibling keywords are ignored.
    /// Unknown keywords are skipped.
    pub fn create<'s>(
        &self,
        container: &'s SchemaContainer,
        node: &'s Value,
    ) -> Result<JsonSchema<'s>, SchemaError> {
        let object = node
            .as_object()
            .ok_or_else(|| SchemaError::not_an_object(node))?;
        let validators = if let Some(reference) = object.get(keywords::Keyword::Ref.name()) {
            vec![keywords::Keyword::Ref.compile(object, reference)?]
        } else {
            let mut validators = Vec::with_capacity(object.len());
            for keyword in keywords::REGISTERED.iter() {
                if let Some(value) = object.get(keyword.name()) {
                    validators.push(keyword.compile(object, value)?);
                }
            }
            validators
        };
        Ok(JsonSchema {
            node,
            container,
            validators,
        })
    }

    /// Registered checker for a `format` value. Custom formats shadow built-in ones.
    pub(crate) fn format(&self, name: &str) -> Option<&dyn FormatValidator> {
        match self.formats.get(name) {
            Some(format) => Some(format.as_ref()),
            None => formats::builtin(name),
        }
    }
}

impl fmt::Debug for JsonSchemaFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.formats.keys().collect();
        names.sort();
        f.debug_struct("JsonSchemaFactory")
            .field("formats", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keywords::Keyword, resolver::DefaultResolver};
    use serde_json::json;
    use test_case::test_case;

    fn container(schema: &Value) -> SchemaContainer {
        SchemaContainer::root(Arc::new(schema.clone()), Arc::new(DefaultResolver))
    }

    #[test]
    fn only_ref() {
        let schema = json!({"$ref": "#", "type": "string", "minimum": 1});
        let container = container(&schema);
        let factory = JsonSchemaFactory::default();
        let unit = factory.create(&container, &schema).expect("Valid schema");
        assert_eq!(unit.len(), 1);
        assert_eq!(unit.validators[0].keyword(), Keyword::Ref);
    }

    #[test]
    fn registration_order() {
        let schema = json!({
            "format": "email",
            "maxLength": 5,
            "title": "ignored",
            "x-vendor": true,
            "type": "string",
        });
        let container = container(&schema);
        let factory = JsonSchemaFactory::default();
        let unit = factory.create(&container, &schema).expect("Valid schema");
        let keywords: Vec<_> = unit.validators.iter().map(KeywordValidator::keyword).collect();
        assert_eq!(keywords, vec![Keyword::Type, Keyword::MaxLength, Keyword::Format]);
    }

    #[test_case(json!({"uniqueItems": false}), 1)]
    #[test_case(json!({"minimum": 1, "exclusiveMinimum": true}), 1)]
    #[test_case(json!({"items": {}, "additionalItems": false, "minItems": 0}), 3)]
    #[test_case(json!({"id": "http://example.com/", "$schema": "x", "description": "y"}), 0)]
    fn one_validator_per_keyword(schema: Value, expected: usize) {
        let container = container(&schema);
        let factory = JsonSchemaFactory::default();
        let unit = factory.create(&container, &schema).expect("Valid schema");
        assert_eq!(unit.len(), expected);
    }

    #[test_case(json!(1), "schema 1 is not a JSON object")]
    #[test_case(json!([]), "schema [] is not a JSON object")]
    #[test_case(json!({"fragmentResolution": "slash-delimited"}), r#"unsupported keyword "fragmentResolution": only "json-pointer" is supported, found "slash-delimited""#)]
    fn defective_nodes(schema: Value, expected: &str) {
        let container = container(&schema);
        let factory = JsonSchemaFactory::default();
        let error = factory.create(&container, &schema).expect_err("Invalid schema");
        assert_eq!(error.to_string(), expected);
    }
}
