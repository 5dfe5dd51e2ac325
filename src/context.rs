//! Per-run validation state: instance path, accumulated messages, outcome and the chain
//! of references currently being expanded.
use crate::{
    compilation::JsonSchemaFactory,
    error::{ResolutionError, SchemaError},
    paths::{JSONPointer, PathChunk},
    report::{MessageLevel, ValidationMessage, ValidationReport},
};

/// Outcome of a validation, ordered from best to worst.
///
/// Contexts only ever move towards a worse state; merging takes the maximum.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValidationState {
    Success,
    /// The instance violates at least one keyword.
    Failure,
    /// A schema unit could not be built.
    Error,
    /// A reference could not be resolved. Stops the run.
    Fatal,
}

/// A reference target being expanded: the locator of its document and the pointer
/// inside it.
pub(crate) type ChainLink = (String, String);

/// Mutable state threaded through a validation.
///
/// [`descend`](Self::descend) moves to a child instance and [`fork`](Self::fork) opens a
/// trial at the same location. Both produce an independent context which the caller may
/// [`merge`](Self::merge) back.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    factory: &'a JsonSchemaFactory,
    path: JSONPointer,
    chain: Vec<ChainLink>,
    messages: Vec<ValidationMessage>,
    state: ValidationState,
}

impl<'a> ValidationContext<'a> {
    /// Context of a top-level run, with the root document on the chain.
    pub(crate) fn new(factory: &'a JsonSchemaFactory, root: ChainLink) -> ValidationContext<'a> {
        ValidationContext {
            factory,
            path: JSONPointer::default(),
            chain: vec![root],
            messages: Vec::new(),
            state: ValidationState::Success,
        }
    }

    /// Context for a child of the current instance.
    ///
    /// The chain starts empty: a reference seen again one level deeper is recursion over
    /// the instance, not a loop.
    #[must_use]
    pub fn descend(&self, chunk: impl Into<PathChunk>) -> ValidationContext<'a> {
        ValidationContext {
            factory: self.factory,
            path: self.path.join(chunk),
            chain: Vec::new(),
            messages: Vec::new(),
            state: ValidationState::Success,
        }
    }

    /// Context for a trial validation of the same instance. Never touches `self`.
    #[must_use]
    pub fn fork(&self) -> ValidationContext<'a> {
        ValidationContext {
            factory: self.factory,
            path: self.path.clone(),
            chain: self.chain.clone(),
            messages: Vec::new(),
            state: ValidationState::Success,
        }
    }

    /// Fold a descended or forked context back into this one.
    pub fn merge(&mut self, child: ValidationContext<'a>) {
        if child.state == ValidationState::Fatal {
            self.messages = child.messages;
            self.state = ValidationState::Fatal;
        } else if self.state != ValidationState::Fatal {
            self.messages.extend(child.messages);
            self.state = self.state.max(child.state);
        }
    }

    /// Record a keyword failure at the current path.
    pub fn add_message(&mut self, text: impl Into<String>) {
        self.push(MessageLevel::Failure, text.into(), ValidationState::Failure);
    }

    /// Record a schema defect at the current path.
    pub(crate) fn error(&mut self, error: SchemaError) {
        tracing::debug!(path = %self.path, %error, "schema defect");
        self.push(MessageLevel::Error, error.to_string(), ValidationState::Error);
    }

    /// Record a resolution fault. It becomes the only message of this context.
    pub(crate) fn fatal(&mut self, error: ResolutionError) {
        if self.state == ValidationState::Fatal {
            return;
        }
        tracing::debug!(path = %self.path, %error, "resolution fault");
        self.messages = vec![ValidationMessage::new(
            self.path.clone(),
            MessageLevel::Fatal,
            error.to_string(),
        )];
        self.state = ValidationState::Fatal;
    }

    fn push(&mut self, level: MessageLevel, text: String, state: ValidationState) {
        if self.state == ValidationState::Fatal {
            return;
        }
        self.messages
            .push(ValidationMessage::new(self.path.clone(), level, text));
        self.state = self.state.max(state);
    }

    /// Whether `link` is being expanded for the current instance already.
    pub(crate) fn in_chain(&self, link: &ChainLink) -> bool {
        self.chain.contains(link)
    }

    /// Run `f` with `link` pushed on the chain.
    pub(crate) fn within<R>(&mut self, link: ChainLink, f: impl FnOnce(&mut Self) -> R) -> R {
        self.chain.push(link);
        let result = f(self);
        self.chain.pop();
        result
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == ValidationState::Success
    }
    /// ERROR or FATAL.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state >= ValidationState::Error
    }
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.state == ValidationState::Fatal
    }
    #[must_use]
    pub fn state(&self) -> ValidationState {
        self.state
    }
    #[must_use]
    pub fn path(&self) -> &JSONPointer {
        &self.path
    }
    pub(crate) fn factory(&self) -> &'a JsonSchemaFactory {
        self.factory
    }

    pub(crate) fn into_report(self) -> ValidationReport {
        ValidationReport::new(self.state, self.messages)
    }
}
