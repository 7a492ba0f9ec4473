//! Bridges between validators and `Result`-returning code.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::{Validate, failure_at};
use crate::validation::{Context, ErasedValue, Validation, ValidationErrors};

/// Message attached to failures produced by [`from_reader_result`].
pub const UNABLE_TO_DECODE: &str = "unable to decode";

/// Lifts a fallible function into a validator.
///
/// `Ok` becomes a success. `Err` becomes a single failure at the current
/// context with the message [`UNABLE_TO_DECODE`], the input as its value,
/// and the original error as its cause.
///
/// # Examples
///
/// ```rust
/// use std::error::Error;
/// use validus::validate::{self, Validate};
///
/// let port: Validate<String, u16> = validate::from_reader_result(|text: String| text.parse::<u16>());
///
/// assert_eq!(port.decode("8080".to_string()).to_option(), Some(8080));
///
/// let errors = port.decode("eighty".to_string()).to_result().unwrap_err();
/// let error = errors.errors.first().unwrap();
/// assert_eq!(error.message, "unable to decode");
/// assert!(error.source().is_some());
/// ```
pub fn from_reader_result<I, A, E, F>(function: F) -> Validate<I, A>
where
    I: Clone + fmt::Debug + Send + Sync + 'static,
    A: 'static,
    E: Error + Send + Sync + 'static,
    F: Fn(I) -> Result<A, E> + 'static,
{
    Validate::from_fn(move |input: I, context: Context| match function(input.clone()) {
        Ok(value) => Validation::Success(value),
        Err(error) => failure_at(
            ErasedValue::new(input),
            context,
            UNABLE_TO_DECODE.to_string(),
            Some(Arc::new(error)),
        ),
    })
}

/// Converts a finished validation into a `Result`.
///
/// # Errors
///
/// Returns [`ValidationErrors`] aggregating every failure.
pub fn to_result<A>(validation: Validation<A>) -> Result<A, ValidationErrors> {
    validation.to_result()
}
