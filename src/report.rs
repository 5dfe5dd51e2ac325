//! The outcome of a top-level validation run.
use crate::{context::ValidationState, paths::JSONPointer};
use std::fmt;

/// Severity of a single report message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MessageLevel {
    /// The instance violates a keyword.
    Failure,
    /// The schema itself is defective.
    Error,
    /// A reference could not be resolved.
    Fatal,
}

/// A diagnostic bound to the instance location it was produced at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationMessage {
    path: JSONPointer,
    level: MessageLevel,
    text: String,
}

impl ValidationMessage {
    pub(crate) fn new(path: JSONPointer, level: MessageLevel, text: String) -> ValidationMessage {
        ValidationMessage { path, level, text }
    }
    /// Location of the offending value inside the instance.
    #[must_use]
    pub fn path(&self) -> &JSONPointer {
        &self.path
    }
    #[must_use]
    pub fn level(&self) -> MessageLevel {
        self.level
    }
    /// The message without its path prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            MessageLevel::Failure => write!(f, "{}: {}", self.path, self.text),
            MessageLevel::Error => write!(f, "{}: ERROR: {}", self.path, self.text),
            MessageLevel::Fatal => write!(f, "{}: FATAL: {}", self.path, self.text),
        }
    }
}

/// Read-only view of a finished validation.
///
/// ```rust
/// use jsonschema_draft3::validate;
/// use serde_json::json;
///
/// let report = validate(&json!({"maxLength": 2}), &json!("foo"));
/// assert!(!report.is_success());
/// assert_eq!(report.messages()[0].to_string(), "#: string is longer than 2 characters");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationReport {
    state: ValidationState,
    messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    pub(crate) fn new(state: ValidationState, messages: Vec<ValidationMessage>) -> ValidationReport {
        ValidationReport { state, messages }
    }
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == ValidationState::Success
    }
    /// Whether the run hit a schema defect or a resolution fault.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state >= ValidationState::Error
    }
    #[must_use]
    pub fn state(&self) -> ValidationState {
        self.state
    }
    /// Messages in the order they were produced.
    #[must_use]
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }
    #[must_use]
    pub fn into_messages(self) -> Vec<ValidationMessage> {
        self.messages
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, message) in self.messages.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", message)?;
        }
        Ok(())
    }
}
