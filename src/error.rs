//! Error types
//!
//! Two families of faults stop validation of a branch: [`ResolutionError`] (a `$ref` that
//! cannot be followed) and [`SchemaError`] (a schema node that cannot be turned into
//! validators). Instance failures are not errors; they are report messages.
use serde_json::Value;
use std::{error, fmt, sync::Arc};

/// A `$ref` could not be resolved. Always FATAL for the validation run.
#[derive(Clone, Debug)]
pub enum ResolutionError {
    /// The pointer does not lead to a node of the target document.
    UnresolvedPointer { pointer: String },
    /// The reference uses a scheme other than `http` / `https`.
    UnsupportedScheme { reference: String },
    /// The remote document could not be downloaded or decoded.
    FetchFailure {
        reference: String,
        error: Arc<anyhow::Error>,
    },
    /// The reference is neither fragment-only nor an absolute URI.
    InvalidReference { reference: String, reason: String },
    /// Following the reference leads back to a schema that is still being expanded
    /// for the same instance.
    SelfReferenceLoop { schema: Value },
}

impl ResolutionError {
    pub(crate) fn unresolved_pointer(pointer: impl Into<String>) -> ResolutionError {
        ResolutionError::UnresolvedPointer {
            pointer: pointer.into(),
        }
    }
    pub(crate) fn unsupported_scheme(reference: impl Into<String>) -> ResolutionError {
        ResolutionError::UnsupportedScheme {
            reference: reference.into(),
        }
    }
    pub(crate) fn fetch_failure(
        reference: impl Into<String>,
        error: anyhow::Error,
    ) -> ResolutionError {
        ResolutionError::FetchFailure {
            reference: reference.into(),
            error: Arc::new(error),
        }
    }
    pub(crate) fn invalid_reference(
        reference: impl Into<String>,
        reason: impl Into<String>,
    ) -> ResolutionError {
        ResolutionError::InvalidReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
    pub(crate) fn self_reference_loop(schema: &Value) -> ResolutionError {
        ResolutionError::SelfReferenceLoop {
            schema: schema.clone(),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::UnresolvedPointer { pointer } => {
                write!(f, "no match in schema for path {}", pointer)
            }
            ResolutionError::UnsupportedScheme { reference } => write!(
                f,
                "cannot use ref {}, only HTTP is supported currently",
                reference
            ),
            ResolutionError::FetchFailure { reference, error } => {
                write!(f, "cannot download schema at ref {}: {}", reference, error)
            }
            ResolutionError::InvalidReference { reference, reason } => {
                write!(f, "invalid URI {}: {}", reference, reason)
            }
            ResolutionError::SelfReferenceLoop { schema } => {
                write!(f, "schema {} loops on itself", schema)
            }
        }
    }
}

impl error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ResolutionError::FetchFailure { error, .. } => Some(&***error),
            _ => None,
        }
    }
}

/// A schema node is malformed or uses a keyword value this crate does not support.
///
/// Detected while binding keyword validators to a node; only the affected schema unit is
/// skipped, sibling checks keep running.
#[derive(Debug)]
pub enum SchemaError {
    /// Schemas are JSON objects.
    NotAnObject { schema: Value },
    /// A keyword holds a value of the wrong shape.
    InvalidKeyword {
        keyword: &'static str,
        expected: &'static str,
        value: Value,
    },
    /// A `pattern` / `patternProperties` regex does not compile.
    InvalidRegex {
        keyword: &'static str,
        pattern: String,
        error: regex::Error,
    },
    /// `type` / `disallow` name a primitive type that does not exist.
    UnknownType { keyword: &'static str, name: String },
    /// The keyword is recognized, but this form of it is not supported.
    UnsupportedKeyword {
        keyword: &'static str,
        reason: String,
    },
}

impl SchemaError {
    pub(crate) fn not_an_object(schema: &Value) -> SchemaError {
        SchemaError::NotAnObject {
            schema: schema.clone(),
        }
    }
    pub(crate) fn invalid_keyword(
        keyword: &'static str,
        expected: &'static str,
        value: &Value,
    ) -> SchemaError {
        SchemaError::InvalidKeyword {
            keyword,
            expected,
            value: value.clone(),
        }
    }
    pub(crate) fn invalid_regex(
        keyword: &'static str,
        pattern: &str,
        error: regex::Error,
    ) -> SchemaError {
        SchemaError::InvalidRegex {
            keyword,
            pattern: pattern.to_string(),
            error,
        }
    }
    pub(crate) fn unknown_type(keyword: &'static str, name: &str) -> SchemaError {
        SchemaError::UnknownType {
            keyword,
            name: name.to_string(),
        }
    }
    pub(crate) fn unsupported_keyword(
        keyword: &'static str,
        reason: impl Into<String>,
    ) -> SchemaError {
        SchemaError::UnsupportedKeyword {
            keyword,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnObject { schema } => {
                write!(f, "schema {} is not a JSON object", schema)
            }
            SchemaError::InvalidKeyword {
                keyword,
                expected,
                value,
            } => write!(
                f,
                r#"keyword "{}" must be {}, found {}"#,
                keyword, expected, value
            ),
            SchemaError::InvalidRegex {
                keyword, pattern, ..
            } => write!(
                f,
                r#"keyword "{}" holds an invalid regex "{}""#,
                keyword, pattern
            ),
            SchemaError::UnknownType { keyword, name } => write!(
                f,
                r#"keyword "{}" names unknown primitive type "{}""#,
                keyword, name
            ),
            SchemaError::UnsupportedKeyword { keyword, reason } => {
                write!(f, r#"unsupported keyword "{}": {}"#, keyword, reason)
            }
        }
    }
}

impl error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SchemaError::InvalidRegex { error, .. } => Some(error),
            _ => None,
        }
    }
}
