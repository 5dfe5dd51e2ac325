use crate::{
    compilation::JsonSchema,
    context::ValidationContext,
    error::SchemaError,
    keywords::{CompilationResult, KeywordValidator},
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
    validator::Validate,
};
use serde_json::{Map, Value};
use std::convert::TryFrom;

/// Value of `type` and `disallow`: primitive type names and schemas.
#[derive(Debug)]
pub(crate) struct TypeUnion<'s> {
    /// `any` was listed.
    pub(crate) any: bool,
    pub(crate) types: PrimitiveTypesBitMap,
    pub(crate) schemas: Vec<&'s Value>,
}

impl<'s> TypeUnion<'s> {
    pub(crate) fn parse(keyword: &'static str, schema: &'s Value) -> Result<TypeUnion<'s>, SchemaError> {
        let mut union = TypeUnion {
            any: false,
            types: PrimitiveTypesBitMap::new(),
            schemas: Vec::new(),
        };
        match schema {
            Value::String(name) => union.add_name(keyword, name)?,
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(name) => union.add_name(keyword, name)?,
                        Value::Object(_) => union.schemas.push(item),
                        _ => {
                            return Err(SchemaError::invalid_keyword(
                                keyword,
                                "an array of type names and schemas",
                                schema,
                            ))
                        }
                    }
                }
            }
            _ => {
                return Err(SchemaError::invalid_keyword(
                    keyword,
                    "a type name or an array",
                    schema,
                ))
            }
        }
        Ok(union)
    }

    fn add_name(&mut self, keyword: &'static str, name: &str) -> Result<(), SchemaError> {
        if name == "any" {
            self.any = true;
        } else {
            let primitive_type = PrimitiveType::try_from(name)
                .map_err(|_| SchemaError::unknown_type(keyword, name))?;
            self.types |= primitive_type;
        }
        Ok(())
    }

    /// Whether the instance kind is listed.
    pub(crate) fn matches_primitive(&self, instance: &Value) -> bool {
        self.any || self.types.contains_instance(instance)
    }
}

#[derive(Debug)]
pub(crate) struct TypeValidator<'s> {
    union: TypeUnion<'s>,
}

impl TypeValidator<'_> {
    fn allowed(&self) -> String {
        let mut names: Vec<String> = self.union.types.iter().map(|t| t.to_string()).collect();
        if !self.union.schemas.is_empty() {
            names.push("schema".to_string());
        }
        names.join(", ")
    }
}

impl Validate for TypeValidator<'_> {
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        if self.union.matches_primitive(instance) {
            return;
        }
        for node in &self.union.schemas {
            let mut fork = ctx.fork();
            schema.validate_child(node, &mut fork, instance);
            if fork.is_success() {
                return;
            }
            if fork.is_error() {
                ctx.merge(fork);
                return;
            }
        }
        ctx.add_message(format!(
            "instance is of type {}, which is none of the allowed types ({})",
            PrimitiveType::of(instance),
            self.allowed()
        ));
    }
}

#[inline]
pub(crate) fn compile<'s>(_: &'s Map<String, Value>, schema: &'s Value) -> CompilationResult<'s> {
    Ok(KeywordValidator::Type(TypeValidator {
        union: TypeUnion::parse("type", schema)?,
    }))
}
