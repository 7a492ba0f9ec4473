//! Curried operators over [`Validation`].
//!
//! Each operator takes its configuration first and returns a function that
//! waits for the validation to act on, which makes them composable with
//! [`pipe!`](crate::pipe). The `monad_*` forms take everything at once.
//!
//! # Examples
//!
//! ```rust
//! use validus::pipe;
//! use validus::validation::{self, Validation};
//!
//! let result = pipe!(
//!     validation::of(20),
//!     validation::map(|n: i32| n * 2),
//!     validation::chain(|n: i32| Validation::success(n + 2)),
//! );
//! assert_eq!(result, Validation::success(42));
//! ```

use super::error::Errors;
use super::types::Validation;

/// Lifts a value into a successful validation.
pub const fn of<A>(value: A) -> Validation<A> {
    Validation::Success(value)
}

/// Curried [`Validation::map`].
pub fn map<A, B, F>(function: F) -> impl Fn(Validation<A>) -> Validation<B>
where
    F: Fn(A) -> B,
{
    move |validation| validation.map(&function)
}

/// Curried [`Validation::ap`]: supplies the value side and waits for the
/// function side.
pub fn ap<A, B, F>(value: Validation<A>) -> impl Fn(Validation<F>) -> Validation<B>
where
    A: Clone,
    F: FnOnce(A) -> B,
{
    move |function| function.ap(value.clone())
}

/// Curried [`Validation::chain`].
pub fn chain<A, B, F>(function: F) -> impl Fn(Validation<A>) -> Validation<B>
where
    F: Fn(A) -> Validation<B>,
{
    move |validation| validation.chain(&function)
}

/// Curried [`Validation::chain_left`].
pub fn chain_left<A, F>(handler: F) -> impl Fn(Validation<A>) -> Validation<A>
where
    F: Fn(Errors) -> Validation<A>,
{
    move |validation| validation.chain_left(&handler)
}

/// Curried [`Validation::or_else`].
pub fn or_else<A, F>(handler: F) -> impl Fn(Validation<A>) -> Validation<A>
where
    F: Fn(Errors) -> Validation<A>,
{
    chain_left(handler)
}

/// Curried [`Validation::alt`].
pub fn alt<A, F>(second: F) -> impl Fn(Validation<A>) -> Validation<A>
where
    F: Fn() -> Validation<A>,
{
    move |validation| validation.alt(&second)
}

/// Uncurried [`map`].
pub fn monad_map<A, B, F>(validation: Validation<A>, function: F) -> Validation<B>
where
    F: FnOnce(A) -> B,
{
    validation.map(function)
}

/// Uncurried [`ap`].
pub fn monad_ap<A, B, F>(function: Validation<F>, value: Validation<A>) -> Validation<B>
where
    F: FnOnce(A) -> B,
{
    function.ap(value)
}

/// Uncurried [`chain`].
pub fn monad_chain<A, B, F>(validation: Validation<A>, function: F) -> Validation<B>
where
    F: FnOnce(A) -> Validation<B>,
{
    validation.chain(function)
}

/// Uncurried [`chain_left`].
pub fn monad_chain_left<A, F>(validation: Validation<A>, handler: F) -> Validation<A>
where
    F: FnOnce(Errors) -> Validation<A>,
{
    validation.chain_left(handler)
}

/// Uncurried [`alt`].
pub fn monad_alt<A, F>(first: Validation<A>, second: F) -> Validation<A>
where
    F: FnOnce() -> Validation<A>,
{
    first.alt(second)
}

/// Applies `function` to every item, collecting all values or all errors.
pub fn traverse<I, A, B, F>(items: I, function: F) -> Validation<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Validation<B>,
{
    items.into_iter().map(function).collect()
}

/// Turns a collection of validations into a validation of a collection.
pub fn sequence<I, A>(validations: I) -> Validation<Vec<A>>
where
    I: IntoIterator<Item = Validation<A>>,
{
    validations.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failed<A>(message: &str) -> Validation<A> {
        Validation::failures(Errors::from_message(message))
    }

    #[rstest]
    fn curried_forms_are_reusable() {
        let double = map(|n: i32| n * 2);
        assert_eq!(double(of(1)), of(2));
        assert_eq!(double(of(5)), of(10));
    }

    #[rstest]
    fn curried_ap_accumulates_function_side_first() {
        let apply_to_failure = ap::<i32, i32, fn(i32) -> i32>(failed("value error"));
        let result = apply_to_failure(failed("function error"));
        assert_eq!(
            result.errors().map(Errors::messages),
            Some(vec!["function error", "value error"])
        );
    }

    #[rstest]
    fn or_else_and_chain_left_agree() {
        let left = chain_left(|_| failed::<i32>("handler"));
        let right = or_else(|_| failed::<i32>("handler"));
        assert_eq!(left(failed("original")), right(failed("original")));
        assert_eq!(left(of(1)), right(of(1)));
    }

    #[rstest]
    fn alt_accumulates_when_both_fail() {
        let fallback = alt(|| failed::<i32>("second"));
        assert_eq!(
            fallback(failed("first")).errors().map(Errors::messages),
            Some(vec!["first", "second"])
        );
    }

    #[rstest]
    fn monad_forms_match_curried_forms() {
        assert_eq!(monad_map(of(2), |n| n + 1), map(|n: i32| n + 1)(of(2)));
        assert_eq!(
            monad_chain(of(2), |n| of(n * 3)),
            chain(|n: i32| of(n * 3))(of(2))
        );
        assert_eq!(
            monad_alt(failed::<i32>("x"), || of(9)),
            alt(|| of(9))(failed("x"))
        );
        assert_eq!(
            monad_chain_left(failed::<i32>("x"), |_| of(0)),
            of(0)
        );
        assert_eq!(monad_ap(of(|n: i32| n - 1), of(1)), of(0));
    }

    #[rstest]
    fn traverse_collects_all_errors() {
        let result = traverse(vec!["1", "x", "3", "y"], |text| {
            text.parse::<i32>()
                .map_or_else(|_| failed(&format!("{text} is not a number")), of)
        });
        assert_eq!(
            result.errors().map(Errors::messages),
            Some(vec!["x is not a number", "y is not a number"])
        );
        assert_eq!(sequence(vec![of(1), of(2)]), of(vec![1, 2]));
    }
}
