//! The `Validation` type.

use std::fmt;

use super::error::{Errors, ValidationError, ValidationErrors, make_validation_errors};
use super::log;
use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// The outcome of a validation: a value, or every error found.
///
/// Unlike `Result`, combining independent validations with [`Validation::ap`]
/// or [`Applicative::map2`] keeps the errors of both sides. Sequencing with
/// [`Validation::chain`] stops at the first failure because the next step
/// needs the value.
///
/// # Examples
///
/// ```rust
/// use validus::validation::{Errors, Validation};
/// use validus::typeclass::Applicative;
///
/// let name: Validation<String> = Validation::failures(Errors::from_message("name is empty"));
/// let age: Validation<u8> = Validation::failures(Errors::from_message("age is negative"));
///
/// let user = name.map2(age, |name, age| (name, age));
/// assert_eq!(
///     user.errors().map(Errors::messages),
///     Some(vec!["name is empty", "age is negative"])
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub enum Validation<A> {
    /// Validation failed with the contained errors.
    Failure(Errors),
    /// Validation succeeded.
    Success(A),
}

impl<A> Validation<A> {
    /// A successful validation.
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// A failed validation.
    pub fn failures(errors: impl Into<Errors>) -> Self {
        Self::Failure(errors.into())
    }

    /// A failed validation holding one error.
    pub fn failure(error: ValidationError) -> Self {
        Self::Failure(Errors::single(error))
    }

    /// Returns `true` for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The successful value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The errors, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&Errors> {
        match self {
            Self::Failure(errors) => Some(errors),
            Self::Success(_) => None,
        }
    }

    /// Eliminates both cases.
    pub fn fold<B, F, S>(self, on_failure: F, on_success: S) -> B
    where
        F: FnOnce(Errors) -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(errors) => on_failure(errors),
            Self::Success(value) => on_success(value),
        }
    }

    /// The successful value, or one computed from the errors.
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce(Errors) -> A,
    {
        self.fold(default, |value| value)
    }

    /// Drops the errors.
    #[must_use]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into a `Result` whose error aggregates every failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] holding the accumulated errors when this
    /// is a `Failure`.
    pub fn to_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => {
                log::errors_collected(errors.len());
                Err(make_validation_errors(errors, None))
            }
        }
    }

    /// Transforms the successful value.
    pub fn map<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Transforms the errors.
    pub fn map_errors<F>(self, function: F) -> Self
    where
        F: FnOnce(Errors) -> Errors,
    {
        match self {
            Self::Failure(errors) => Self::Failure(function(errors)),
            success @ Self::Success(_) => success,
        }
    }

    /// Sequences a step that depends on the successful value.
    ///
    /// A failure is returned unchanged and `function` is not called.
    pub fn chain<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(A) -> Validation<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Runs `handler` on the errors of a failure.
    ///
    /// If the handler succeeds the failure is recovered. If it fails too, its
    /// errors are appended after the original ones. A success is returned
    /// unchanged and the handler is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::{Errors, Validation};
    ///
    /// let failed: Validation<i32> = Validation::failures(Errors::from_message("not a number"));
    /// let recovered = failed.clone().chain_left(|_| Validation::success(0));
    /// assert_eq!(recovered, Validation::success(0));
    ///
    /// let still_failed = failed.chain_left(|_| Validation::failures(Errors::from_message("no default")));
    /// assert_eq!(
    ///     still_failed.errors().map(Errors::messages),
    ///     Some(vec!["not a number", "no default"])
    /// );
    /// ```
    pub fn chain_left<F>(self, handler: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Failure(errors) => match handler(errors.clone()) {
                Self::Failure(more) => Self::Failure(errors.combine(more)),
                recovered @ Self::Success(_) => recovered,
            },
            success @ Self::Success(_) => success,
        }
    }

    /// Alias for [`Validation::chain_left`].
    pub fn or_else<F>(self, handler: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        self.chain_left(handler)
    }

    /// Falls back to `second` when `self` fails.
    ///
    /// `second` is only evaluated on failure. When both fail the errors of
    /// both are kept, `self` first.
    pub fn alt<F>(self, second: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.chain_left(|_| second())
    }
}

impl<F> Validation<F> {
    /// Applies the function held by `self` to the value held by `value`.
    ///
    /// Both sides are inspected. When both fail, the errors of the function
    /// side come first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::{Errors, Validation};
    ///
    /// let function: Validation<fn(i32) -> i32> = Validation::failures(Errors::from_message("function error"));
    /// let value: Validation<i32> = Validation::failures(Errors::from_message("value error"));
    ///
    /// assert_eq!(
    ///     function.ap(value).errors().map(Errors::messages),
    ///     Some(vec!["function error", "value error"])
    /// );
    /// ```
    pub fn ap<A, B>(self, value: Validation<A>) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Success(function), Validation::Success(value)) => {
                Validation::Success(function(value))
            }
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Validation<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(errors) => formatter.debug_tuple("Failure").field(errors).finish(),
        }
    }
}

impl<A> From<Result<A, Errors>> for Validation<A> {
    fn from(result: Result<A, Errors>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}

impl<A> From<Validation<A>> for Result<A, Errors> {
    fn from(validation: Validation<A>) -> Self {
        match validation {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors),
        }
    }
}

impl<A> FromIterator<Validation<A>> for Validation<Vec<A>> {
    /// Collects every value, or every error from every failed item.
    fn from_iter<I: IntoIterator<Item = Validation<A>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::Success(Vec::new()), |accumulator, item| {
                accumulator.map2(item, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<A> TypeConstructor for Validation<A> {
    type Inner = A;
    type WithType<B> = Validation<B>;
}

impl<A> Functor for Validation<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validation<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(errors) => Validation::Failure(errors.clone()),
        }
    }
}

impl<A> Applicative for Validation<A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<B> {
        Validation::Success(value)
    }

    fn map2<B, C, F>(self, other: Validation<B>, function: F) -> Validation<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success(function(a, b)),
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }

    fn map3<B, C, D, F>(
        self,
        second: Validation<B>,
        third: Validation<C>,
        function: F,
    ) -> Validation<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<B>) -> Validation<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<A> Monad for Validation<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(A) -> Validation<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failed<A>(message: &str) -> Validation<A> {
        Validation::failures(Errors::from_message(message))
    }

    #[rstest]
    fn map_leaves_failure_untouched() {
        let validation: Validation<i32> = failed("bad");
        assert_eq!(validation.map(|n| n + 1), failed("bad"));
        assert_eq!(Validation::success(1).map(|n| n + 1), Validation::success(2));
    }

    #[rstest]
    #[case(Validation::success(2), Validation::success(3), Validation::success(5))]
    #[case(failed("a"), Validation::success(3), failed("a"))]
    #[case(Validation::success(2), failed("b"), failed("b"))]
    fn map2_cases(
        #[case] left: Validation<i32>,
        #[case] right: Validation<i32>,
        #[case] expected: Validation<i32>,
    ) {
        assert_eq!(left.map2(right, |a, b| a + b), expected);
    }

    #[rstest]
    fn map3_accumulates_in_argument_order() {
        let result = failed::<i32>("first").map3(
            Validation::<i32>::success(1),
            failed::<i32>("third"),
            |a, b, c| a + b + c,
        );
        assert_eq!(
            result.errors().map(Errors::messages),
            Some(vec!["first", "third"])
        );
    }

    #[rstest]
    fn chain_does_not_call_function_on_failure() {
        let mut called = false;
        let result = failed::<i32>("stop").chain(|n| {
            called = true;
            Validation::success(n)
        });
        assert!(!called);
        assert!(result.is_failure());
    }

    #[rstest]
    fn chain_left_leaves_success_untouched() {
        let result = Validation::success(1).chain_left(|_| failed("never"));
        assert_eq!(result, Validation::success(1));
    }

    #[rstest]
    fn chain_left_handler_sees_original_errors() {
        let result = failed::<i32>("original").chain_left(|errors| {
            assert_eq!(errors.messages(), vec!["original"]);
            failed("handler")
        });
        assert_eq!(
            result.errors().map(Errors::messages),
            Some(vec!["original", "handler"])
        );
    }

    #[rstest]
    fn or_else_matches_chain_left() {
        let handler = |_: Errors| Validation::<i32>::failures(Errors::from_message("b"));
        assert_eq!(
            failed::<i32>("a").or_else(handler),
            failed::<i32>("a").chain_left(handler)
        );
    }

    #[rstest]
    fn alt_is_lazy_on_success() {
        let mut evaluated = false;
        let result = Validation::success(1).alt(|| {
            evaluated = true;
            Validation::success(2)
        });
        assert!(!evaluated);
        assert_eq!(result, Validation::success(1));
    }

    #[rstest]
    fn collect_accumulates_every_failure() {
        let collected: Validation<Vec<i32>> = vec![
            Validation::success(1),
            failed("x"),
            Validation::success(3),
            failed("y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            collected.errors().map(Errors::messages),
            Some(vec!["x", "y"])
        );
    }

    #[rstest]
    fn to_result_wraps_errors() {
        let error = failed::<i32>("bad").to_result().unwrap_err();
        assert_eq!(error.errors.messages(), vec!["bad"]);
        assert_eq!(Validation::success(4).to_result().ok(), Some(4));
    }

    #[rstest]
    fn fold_and_get_or_else() {
        assert_eq!(failed::<usize>("x").get_or_else(|errors| errors.len()), 1);
        assert_eq!(
            Validation::success(3).fold(|_| 0, |value| value * 2),
            6
        );
    }
}
