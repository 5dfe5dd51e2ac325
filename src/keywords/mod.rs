//! The draft-03 keyword registry.
//!
//! [`Keyword`] lists every recognized keyword in registration order, which fixes the
//! order messages are produced in. [`KeywordValidator`] is the matching closed set of
//! bound validators.
pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod dependencies;
pub(crate) mod disallow;
pub(crate) mod divisible_by;
pub(crate) mod enum_;
pub(crate) mod extends;
pub(crate) mod format;
pub(crate) mod fragment_resolution;
pub(crate) mod helpers;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod minimum;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod properties;
pub(crate) mod ref_;
pub(crate) mod type_;
pub(crate) mod unique_items;

use crate::{
    compilation::JsonSchema, context::ValidationContext, error::SchemaError, validator::Validate,
};
use serde_json::{Map, Value};

pub(crate) type CompilationResult<'s> = Result<KeywordValidator<'s>, SchemaError>;

/// A keyword with a validator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Keyword {
    Ref,
    Type,
    Disallow,
    Extends,
    Properties,
    PatternProperties,
    AdditionalProperties,
    Items,
    AdditionalItems,
    Dependencies,
    Minimum,
    Maximum,
    MinItems,
    MaxItems,
    UniqueItems,
    Pattern,
    MinLength,
    MaxLength,
    Enum,
    DivisibleBy,
    Format,
    FragmentResolution,
}

/// Every keyword, in registration order.
pub(crate) const REGISTERED: [Keyword; 22] = [
    Keyword::Ref,
    Keyword::Type,
    Keyword::Disallow,
    Keyword::Extends,
    Keyword::Properties,
    Keyword::PatternProperties,
    Keyword::AdditionalProperties,
    Keyword::Items,
    Keyword::AdditionalItems,
    Keyword::Dependencies,
    Keyword::Minimum,
    Keyword::Maximum,
    Keyword::MinItems,
    Keyword::MaxItems,
    Keyword::UniqueItems,
    Keyword::Pattern,
    Keyword::MinLength,
    Keyword::MaxLength,
    Keyword::Enum,
    Keyword::DivisibleBy,
    Keyword::Format,
    Keyword::FragmentResolution,
];

impl Keyword {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Keyword::Ref => "$ref",
            Keyword::Type => "type",
            Keyword::Disallow => "disallow",
            Keyword::Extends => "extends",
            Keyword::Properties => "properties",
            Keyword::PatternProperties => "patternProperties",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::Items => "items",
            Keyword::AdditionalItems => "additionalItems",
            Keyword::Dependencies => "dependencies",
            Keyword::Minimum => "minimum",
            Keyword::Maximum => "maximum",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::UniqueItems => "uniqueItems",
            Keyword::Pattern => "pattern",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Enum => "enum",
            Keyword::DivisibleBy => "divisibleBy",
            Keyword::Format => "format",
            Keyword::FragmentResolution => "fragmentResolution",
        }
    }

    /// Bind this keyword's validator to `schema`, its value inside `parent`.
    pub(crate) fn compile<'s>(
        self,
        parent: &'s Map<String, Value>,
        schema: &'s Value,
    ) -> CompilationResult<'s> {
        match self {
            Keyword::Ref => ref_::compile(parent, schema),
            Keyword::Type => type_::compile(parent, schema),
            Keyword::Disallow => disallow::compile(parent, schema),
            Keyword::Extends => extends::compile(parent, schema),
            Keyword::Properties => properties::compile(parent, schema),
            Keyword::PatternProperties => pattern_properties::compile(parent, schema),
            Keyword::AdditionalProperties => additional_properties::compile(parent, schema),
            Keyword::Items => items::compile(parent, schema),
            Keyword::AdditionalItems => additional_items::compile(parent, schema),
            Keyword::Dependencies => dependencies::compile(parent, schema),
            Keyword::Minimum => minimum::compile(parent, schema),
            Keyword::Maximum => maximum::compile(parent, schema),
            Keyword::MinItems => min_items::compile(parent, schema),
            Keyword::MaxItems => max_items::compile(parent, schema),
            Keyword::UniqueItems => unique_items::compile(parent, schema),
            Keyword::Pattern => pattern::compile(parent, schema),
            Keyword::MinLength => min_length::compile(parent, schema),
            Keyword::MaxLength => max_length::compile(parent, schema),
            Keyword::Enum => enum_::compile(parent, schema),
            Keyword::DivisibleBy => divisible_by::compile(parent, schema),
            Keyword::Format => format::compile(parent, schema),
            Keyword::FragmentResolution => fragment_resolution::compile(parent, schema),
        }
    }
}

/// A keyword validator bound to its value.
#[derive(Debug)]
pub(crate) enum KeywordValidator<'s> {
    Ref(ref_::RefValidator<'s>),
    Type(type_::TypeValidator<'s>),
    Disallow(disallow::DisallowValidator<'s>),
    Extends(extends::ExtendsValidator<'s>),
    Properties(properties::PropertiesValidator<'s>),
    PatternProperties(pattern_properties::PatternPropertiesValidator<'s>),
    AdditionalProperties(additional_properties::AdditionalPropertiesValidator<'s>),
    Items(items::ItemsValidator<'s>),
    AdditionalItems(additional_items::AdditionalItemsValidator<'s>),
    Dependencies(dependencies::DependenciesValidator<'s>),
    Minimum(minimum::MinimumValidator),
    Maximum(maximum::MaximumValidator),
    MinItems(min_items::MinItemsValidator),
    MaxItems(max_items::MaxItemsValidator),
    UniqueItems(unique_items::UniqueItemsValidator),
    Pattern(pattern::PatternValidator),
    MinLength(min_length::MinLengthValidator),
    MaxLength(max_length::MaxLengthValidator),
    Enum(enum_::EnumValidator<'s>),
    DivisibleBy(divisible_by::DivisibleByValidator),
    Format(format::FormatValidator<'s>),
    FragmentResolution(fragment_resolution::FragmentResolutionValidator),
}

impl KeywordValidator<'_> {
    pub(crate) fn keyword(&self) -> Keyword {
        match self {
            KeywordValidator::Ref(_) => Keyword::Ref,
            KeywordValidator::Type(_) => Keyword::Type,
            KeywordValidator::Disallow(_) => Keyword::Disallow,
            KeywordValidator::Extends(_) => Keyword::Extends,
            KeywordValidator::Properties(_) => Keyword::Properties,
            KeywordValidator::PatternProperties(_) => Keyword::PatternProperties,
            KeywordValidator::AdditionalProperties(_) => Keyword::AdditionalProperties,
            KeywordValidator::Items(_) => Keyword::Items,
            KeywordValidator::AdditionalItems(_) => Keyword::AdditionalItems,
            KeywordValidator::Dependencies(_) => Keyword::Dependencies,
            KeywordValidator::Minimum(_) => Keyword::Minimum,
            KeywordValidator::Maximum(_) => Keyword::Maximum,
            KeywordValidator::MinItems(_) => Keyword::MinItems,
            KeywordValidator::MaxItems(_) => Keyword::MaxItems,
            KeywordValidator::UniqueItems(_) => Keyword::UniqueItems,
            KeywordValidator::Pattern(_) => Keyword::Pattern,
            KeywordValidator::MinLength(_) => Keyword::MinLength,
            KeywordValidator::MaxLength(_) => Keyword::MaxLength,
            KeywordValidator::Enum(_) => Keyword::Enum,
            KeywordValidator::DivisibleBy(_) => Keyword::DivisibleBy,
            KeywordValidator::Format(_) => Keyword::Format,
            KeywordValidator::FragmentResolution(_) => Keyword::FragmentResolution,
        }
    }
}

impl Validate for KeywordValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        match self {
            KeywordValidator::Ref(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Type(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Disallow(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Extends(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Properties(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::PatternProperties(validator) => {
                validator.validate(schema, ctx, instance)
            }
            KeywordValidator::AdditionalProperties(validator) => {
                validator.validate(schema, ctx, instance)
            }
            KeywordValidator::Items(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::AdditionalItems(validator) => {
                validator.validate(schema, ctx, instance)
            }
            KeywordValidator::Dependencies(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Minimum(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Maximum(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::MinItems(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::MaxItems(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::UniqueItems(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Pattern(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::MinLength(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::MaxLength(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Enum(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::DivisibleBy(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::Format(validator) => validator.validate(schema, ctx, instance),
            KeywordValidator::FragmentResolution(validator) => {
                validator.validate(schema, ctx, instance)
            }
        }
    }
}
