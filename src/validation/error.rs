//! The error model shared by [`Validation`](super::Validation) and
//! [`Validate`](crate::validate::Validate).
//!
//! A failed check produces a [`ValidationError`]: the offending value, the
//! [`Context`] path it was found at, a message, and optionally the error that
//! caused it. Failures travel as [`Errors`], an ordered collection whose
//! [`Semigroup`] instance is concatenation. [`ValidationErrors`] is the
//! aggregate handed to `Result`-based code once validation is finished.
//!
//! # Examples
//!
//! ```rust
//! use validus::validation::{Context, ContextEntry, ErasedValue, Errors, ValidationError};
//!
//! let context = Context::empty()
//!     .push(ContextEntry::new("user", "User"))
//!     .push(ContextEntry::new("age", "u8"));
//!
//! let error = ValidationError::new(ErasedValue::new(200_u16), context, "out of range");
//! assert_eq!(error.to_string(), "at user.age: out of range");
//!
//! let errors = Errors::single(error).combine_with(Errors::from_message("missing name"));
//! assert_eq!(errors.messages(), vec!["out of range", "missing name"]);
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::typeclass::{Monoid, Semigroup, TypeclassMonoid, monoid_of};

/// A shared, thread-safe error used as the cause of a failure.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

// =============================================================================
// ErasedValue
// =============================================================================

/// A type-erased copy of the value that was being validated.
///
/// The value keeps its `Debug` rendering, which is what equality and display
/// use, and can be recovered with [`ErasedValue::downcast_ref`].
#[derive(Clone)]
pub struct ErasedValue {
    value: Arc<dyn Any + Send + Sync>,
    rendered: Arc<str>,
}

impl ErasedValue {
    /// Captures `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + Send + Sync,
    {
        let rendered: Arc<str> = Arc::from(format!("{value:?}"));
        Self {
            value: Arc::new(value),
            rendered,
        }
    }

    /// The placeholder used when a failure is not tied to any input.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(())
    }

    /// Returns the captured value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// The `Debug` rendering of the captured value.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl PartialEq for ErasedValue {
    fn eq(&self, other: &Self) -> bool {
        self.rendered == other.rendered
    }
}

impl Eq for ErasedValue {}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}

impl fmt::Display for ErasedValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErasedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.rendered)
    }
}

// =============================================================================
// Context
// =============================================================================

/// One step of a validation path: a field name or index, the expected type,
/// and the value found there.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContextEntry {
    /// Field name or index. May be empty for the root.
    pub key: String,
    /// Name of the type expected at this position.
    pub type_name: String,
    /// The value found at this position, when known.
    pub actual: Option<ErasedValue>,
}

impl ContextEntry {
    /// Creates an entry without an actual value.
    pub fn new(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            type_name: type_name.into(),
            actual: None,
        }
    }

    /// Records the value found at this position.
    #[must_use]
    pub fn with_actual(mut self, actual: ErasedValue) -> Self {
        self.actual = Some(actual);
        self
    }
}

/// The path from the root of the validated structure to the current value.
///
/// Entries are ordered root first. Pushing returns a new context and leaves
/// the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Context(Vec<ContextEntry>);

impl Context {
    /// The root context.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns this context extended with `entry`.
    #[must_use]
    pub fn push(mut self, entry: ContextEntry) -> Self {
        self.0.push(entry);
        self
    }

    /// The entries, root first.
    #[must_use]
    pub fn entries(&self) -> &[ContextEntry] {
        &self.0
    }

    /// The innermost entry.
    #[must_use]
    pub fn last(&self) -> Option<&ContextEntry> {
        self.0.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The dotted path of non-empty keys, e.g. `user.address.city`.
    #[must_use]
    pub fn path(&self) -> String {
        self.0
            .iter()
            .filter(|entry| !entry.key.is_empty())
            .map(|entry| entry.key.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

impl FromIterator<ContextEntry> for Context {
    fn from_iter<I: IntoIterator<Item = ContextEntry>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

// =============================================================================
// ValidationError
// =============================================================================

/// A single validation failure.
#[derive(Clone)]
pub struct ValidationError {
    /// The value that failed.
    pub value: ErasedValue,
    /// Where the value was found.
    pub context: Context,
    /// Human-readable description.
    pub message: String,
    /// The underlying error, if the failure wraps one.
    pub cause: Option<SharedError>,
}

impl ValidationError {
    /// Creates an error without a cause.
    pub fn new(value: ErasedValue, context: Context, message: impl Into<String>) -> Self {
        Self {
            value,
            context,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an error carrying only a message, at the root context.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(ErasedValue::unit(), Context::empty(), message)
    }

    /// Attaches `cause` as the underlying error.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attaches an already shared cause.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: SharedError) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.context == other.context
            && self.message == other.message
            && match (&self.cause, &other.cause) {
                (Some(left), Some(right)) => left.to_string() == right.to_string(),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for ValidationError {}

impl fmt::Debug for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValidationError")
            .field("value", &self.value)
            .field("context", &self.context.path())
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(ToString::to_string))
            .finish()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.context.path();
        if path.is_empty() {
            formatter.write_str(&self.message)
        } else {
            write!(formatter, "at {path}: {}", self.message)
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 4)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("context", &self.context)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause.as_ref().map(ToString::to_string))?;
        state.end()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// An ordered, non-deduplicated collection of [`ValidationError`]s.
///
/// Most failures carry a single error, which is stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Errors(SmallVec<[ValidationError; 1]>);

impl Errors {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// A collection holding one error.
    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.push(error);
        errors
    }

    /// A collection holding one message-only error.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::single(ValidationError::from_message(message))
    }

    /// Appends an error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// The first error.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    /// The messages of every error, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.message.as_str()).collect()
    }

    /// Concatenates `other` after `self`.
    #[must_use]
    pub fn combine_with(self, other: Self) -> Self {
        self.combine(other)
    }

    /// Converts into a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for Errors {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl Monoid for Errors {
    fn empty() -> Self {
        Self::new()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl From<ValidationError> for Errors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl From<Vec<ValidationError>> for Errors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(SmallVec::from_vec(errors))
    }
}

impl FromIterator<ValidationError> for Errors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl Extend<ValidationError> for Errors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iterator: I) {
        self.0.extend(iterator);
    }
}

impl IntoIterator for Errors {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The [`Errors`] monoid as a value: concatenation, with the empty
/// collection as identity.
#[must_use]
pub const fn errors_monoid() -> TypeclassMonoid<Errors> {
    monoid_of::<Errors>()
}

// =============================================================================
// ValidationErrors
// =============================================================================

/// The aggregate error produced when a failed validation is converted into a
/// `Result`.
#[derive(Debug, Clone)]
pub struct ValidationErrors {
    /// Every accumulated failure, in order.
    pub errors: Errors,
    cause: Option<SharedError>,
}

impl ValidationErrors {
    /// The root cause, if one was supplied.
    #[must_use]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Number of accumulated failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Wraps `errors` and an optional root cause into an aggregate error.
///
/// [`Error::source`] on the result yields the root cause when present and
/// the first accumulated failure otherwise.
#[must_use]
pub fn make_validation_errors(errors: Errors, cause: Option<SharedError>) -> ValidationErrors {
    ValidationErrors { errors, cause }
}

impl PartialEq for ValidationErrors {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors
            && self.cause.as_ref().map(ToString::to_string)
                == other.cause.as_ref().map(ToString::to_string)
    }
}

impl Eq for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => formatter.write_str("validation failed"),
            1 => write!(formatter, "validation failed: {}", self.errors),
            count => write!(
                formatter,
                "validation failed with {count} errors: {}",
                self.errors
            ),
        }
    }
}

impl Error for ValidationErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause as &(dyn Error + 'static)),
            None => self
                .errors
                .first()
                .map(|error| error as &(dyn Error + 'static)),
        }
    }
}

static_assertions::assert_impl_all!(ErasedValue: Clone, Send, Sync);
static_assertions::assert_impl_all!(Errors: Clone, Send, Sync);
static_assertions::assert_impl_all!(ValidationErrors: Error, Send, Sync);
