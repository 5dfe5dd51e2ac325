//! # jsonschema-draft3
//!
//! A validator for JSON Schema draft-03 documents that reports every deviation at its
//! exact location inside the instance.
//!
//! Supports:
//!   - the draft-03 keyword set, including `disallow`, `extends` and `divisibleBy`;
//!   - `$ref` to the same document and to remote documents via HTTP(S);
//!   - detection of references that loop on themselves.
//!
//! ## Usage Examples:
//! ```rust
//! use jsonschema_draft3::{validate, JsonValidator};
//! use serde_json::json;
//!
//! let schema = json!({"properties": {"name": {"type": "string", "required": true}}});
//! let report = validate(&schema, &json!({"name": 42}));
//! assert!(!report.is_success());
//! for message in report.messages() {
//!     // #/name: instance is of type integer, which is none of the allowed types (string)
//!     println!("{}", message);
//! }
//!
//! // Reuse the same schema for many instances
//! let validator = JsonValidator::new(schema);
//! assert!(validator.validate(&json!({"name": "foo"})).is_success());
//! ```
//!
//! A reference that cannot be resolved collapses the report into a single FATAL message:
//! ```rust
//! use jsonschema_draft3::validate;
//! use serde_json::json;
//!
//! let report = validate(&json!({"$ref": "#"}), &json!([]));
//! assert!(report.is_error());
//! assert_eq!(
//!     report.messages()[0].to_string(),
//!     r##"#: FATAL: schema {"$ref":"#"} loops on itself"##
//! );
//! ```
#![warn(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::needless_pass_by_value,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::unnecessary_wraps, clippy::upper_case_acronyms)]
mod compilation;
mod context;
pub mod error;
mod formats;
mod keywords;
pub mod loader;
pub mod paths;
pub mod primitive_type;
mod report;
mod resolver;
mod validator;
pub use compilation::{
    options::{JsonValidator, ValidationOptions},
    JsonSchema, JsonSchemaFactory,
};
pub use context::{ValidationContext, ValidationState};
pub use error::{ResolutionError, SchemaError};
pub use formats::FormatValidator;
pub use primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
pub use report::{MessageLevel, ValidationMessage, ValidationReport};
pub use resolver::{SchemaContainer, SchemaResolver, SchemaResolverError};
use serde_json::Value;

/// Validate `instance` against `schema` in a fresh, independent run.
/// ```rust
/// use jsonschema_draft3::validate;
/// use serde_json::json;
///
/// let report = validate(&json!({"minItems": 2}), &json!([1]));
/// assert_eq!(report.messages()[0].to_string(), "#: array has fewer than 2 items");
/// ```
#[must_use]
pub fn validate(schema: &Value, instance: &Value) -> ValidationReport {
    JsonValidator::new(schema.clone()).validate(instance)
}

/// A shortcut for checking `instance` against `schema`.
/// ```rust
/// use jsonschema_draft3::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    validate(schema, instance).is_success()
}
