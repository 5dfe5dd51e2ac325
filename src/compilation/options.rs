use crate::{
    compilation::{JsonSchema, JsonSchemaFactory},
    context::ValidationContext,
    formats::{FormatValidator, StringFormat},
    paths::JSONPointer,
    report::ValidationReport,
    resolver::{DefaultResolver, SchemaContainer, SchemaResolver},
};
use ahash::AHashMap;
use serde_json::Value;
use std::{fmt, sync::Arc};
use tracing::debug;

/// Configuration of a [`JsonValidator`].
///
/// ```rust
/// # use jsonschema_draft3::JsonValidator;
/// # use serde_json::json;
/// let validator = JsonValidator::options()
///     .with_format("even-length", |s: &str| s.len() % 2 == 0)
///     .build(json!({"format": "even-length"}));
/// assert!(validator.validate(&json!("ab")).is_success());
/// assert!(!validator.validate(&json!("abc")).is_success());
/// ```
#[derive(Clone)]
pub struct ValidationOptions {
    resolver: Arc<dyn SchemaResolver>,
    formats: AHashMap<String, Arc<dyn FormatValidator>>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            resolver: Arc::new(DefaultResolver),
            formats: AHashMap::default(),
        }
    }
}

impl ValidationOptions {
    /// Download remote documents with `resolver` instead of the built-in HTTP client.
    pub fn with_resolver(&mut self, resolver: impl SchemaResolver + 'static) -> &mut Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Register a string format defined by a predicate. Shadows a built-in format with
    /// the same name.
    pub fn with_format<N, F>(&mut self, name: N, format: F) -> &mut Self
    where
        N: Into<String>,
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        self.formats
            .insert(name.clone(), Arc::new(StringFormat::new(name, format)));
        self
    }

    /// Register a format checker that may apply to any kind of instance.
    pub fn with_format_validator(
        &mut self,
        name: impl Into<String>,
        format: impl FormatValidator + 'static,
    ) -> &mut Self {
        self.formats.insert(name.into(), Arc::new(format));
        self
    }

    /// Build a validator for `schema` with these options.
    #[must_use]
    pub fn build(&self, schema: Value) -> JsonValidator {
        JsonValidator {
            schema: Arc::new(schema),
            resolver: Arc::clone(&self.resolver),
            factory: JsonSchemaFactory::new(self.formats.clone()),
        }
    }
}

impl fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.formats.keys().collect();
        names.sort();
        f.debug_struct("ValidationOptions")
            .field("formats", &names)
            .finish()
    }
}

/// A root schema ready to validate instances.
///
/// Every call to [`validate`](Self::validate) is an independent run: references are
/// resolved afresh and remote documents are downloaded again.
pub struct JsonValidator {
    schema: Arc<Value>,
    resolver: Arc<dyn SchemaResolver>,
    factory: JsonSchemaFactory,
}

impl JsonValidator {
    /// A validator with default options.
    #[must_use]
    pub fn new(schema: Value) -> JsonValidator {
        ValidationOptions::default().build(schema)
    }

    /// Options to customize the validator.
    #[must_use]
    pub fn options() -> ValidationOptions {
        ValidationOptions::default()
    }

    #[must_use]
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate `instance` against the root schema.
    #[must_use]
    pub fn validate(&self, instance: &Value) -> ValidationReport {
        let container = SchemaContainer::root(Arc::clone(&self.schema), Arc::clone(&self.resolver));
        debug!(locator = %container.locator(), "starting validation");
        let mut ctx = ValidationContext::new(&self.factory, container.link(&JSONPointer::default()));
        JsonSchema::validate_node(&container, container.document(), &mut ctx, instance);
        ctx.into_report()
    }

    /// Whether `instance` is valid, without keeping the messages.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_success()
    }
}

impl fmt::Debug for JsonValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonValidator")
            .field("schema", &self.schema)
            .field("factory", &self.factory)
            .finish()
    }
}
