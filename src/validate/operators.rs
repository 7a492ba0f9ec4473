//! Curried operators over [`Validate`].
//!
//! These mirror [`crate::validation`]'s operators one level up: each takes
//! its configuration and returns a function from validator to validator.

use std::rc::Rc;

use super::Validate;
use crate::validation::Errors;

/// A validator that accepts any input and yields `value`.
pub fn of<I, A>(value: A) -> Validate<I, A>
where
    I: Clone + 'static,
    A: Clone + 'static,
{
    Validate::success(value)
}

/// Curried [`Validate::map`].
pub fn map<I, A, B, F>(function: F) -> impl Fn(Validate<I, A>) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    let function = Rc::new(function);
    move |validate| {
        let function = Rc::clone(&function);
        validate.map(move |value| function(value))
    }
}

/// Curried [`Validate::ap`]: supplies the value validator and waits for
/// the function validator.
pub fn ap<I, A, B, F>(value: Validate<I, A>) -> impl Fn(Validate<I, F>) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + 'static,
{
    move |function| function.ap(value.clone())
}

/// Curried [`Validate::chain`].
pub fn chain<I, A, B, F>(function: F) -> impl Fn(Validate<I, A>) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> Validate<I, B> + 'static,
{
    let function = Rc::new(function);
    move |validate| {
        let function = Rc::clone(&function);
        validate.chain(move |value| function(value))
    }
}

/// Curried [`Validate::chain_left`].
pub fn chain_left<I, A, F>(handler: F) -> impl Fn(Validate<I, A>) -> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
    F: Fn(Errors) -> Validate<I, A> + 'static,
{
    let handler = Rc::new(handler);
    move |validate| {
        let handler = Rc::clone(&handler);
        validate.chain_left(move |errors| handler(errors))
    }
}

/// Curried [`Validate::or_else`].
pub fn or_else<I, A, F>(handler: F) -> impl Fn(Validate<I, A>) -> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
    F: Fn(Errors) -> Validate<I, A> + 'static,
{
    chain_left(handler)
}

/// Curried [`Validate::alt`].
pub fn alt<I, A, F>(second: F) -> impl Fn(Validate<I, A>) -> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
    F: Fn() -> Validate<I, A> + 'static,
{
    let second = Rc::new(second);
    move |validate| {
        let second = Rc::clone(&second);
        validate.alt(move || second())
    }
}

/// Uncurried [`map`].
pub fn monad_map<I, A, B, F>(validate: Validate<I, A>, function: F) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    validate.map(function)
}

/// Uncurried [`ap`].
pub fn monad_ap<I, A, B, F>(function: Validate<I, F>, value: Validate<I, A>) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + 'static,
{
    function.ap(value)
}

/// Uncurried [`chain`].
pub fn monad_chain<I, A, B, F>(validate: Validate<I, A>, function: F) -> Validate<I, B>
where
    I: Clone + 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> Validate<I, B> + 'static,
{
    validate.chain(function)
}

/// Uncurried [`chain_left`].
pub fn monad_chain_left<I, A, F>(validate: Validate<I, A>, handler: F) -> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
    F: Fn(Errors) -> Validate<I, A> + 'static,
{
    validate.chain_left(handler)
}

/// Uncurried [`alt`].
pub fn monad_alt<I, A, F>(first: Validate<I, A>, second: F) -> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
    F: Fn() -> Validate<I, A> + 'static,
{
    first.alt(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validation;
    use rstest::rstest;

    fn even() -> Validate<i32, i32> {
        Validate::from_fn(|n: i32, _| {
            if n % 2 == 0 {
                Validation::success(n)
            } else {
                Validation::failures(Errors::from_message("odd"))
            }
        })
    }

    #[rstest]
    fn map_operator_is_reusable() {
        let halve = map(|n: i32| n / 2);
        assert_eq!(halve(even()).decode(8), Validation::success(4));
        assert_eq!(halve(even()).decode(6), Validation::success(3));
    }

    #[rstest]
    fn chain_operator_sees_same_input() {
        let echo = chain(|_: i32| Validate::from_fn(|input: i32, _| Validation::success(input * 10)));
        assert_eq!(echo(even()).decode(2), Validation::success(20));
        assert!(echo(even()).decode(3).is_failure());
    }

    #[rstest]
    fn or_else_matches_chain_left() {
        let recover = |_: Errors| Validate::success(0);
        let left = chain_left(recover)(even());
        let right = or_else(recover)(even());
        for input in [1, 2, 3] {
            assert_eq!(left.decode(input), right.decode(input));
        }
    }

    #[rstest]
    fn monad_forms_match_curried_forms() {
        assert_eq!(
            monad_map(even(), |n| n + 1).decode(4),
            map(|n: i32| n + 1)(even()).decode(4)
        );
        assert_eq!(
            monad_alt(even(), || of(-1)).decode(5),
            alt(|| of(-1))(even()).decode(5)
        );
        assert_eq!(
            monad_chain(even(), |n| of(n * n)).decode(4),
            Validation::success(16)
        );
        assert_eq!(
            monad_chain_left(even(), |_| of(7)).decode(1),
            Validation::success(7)
        );
        assert_eq!(
            monad_ap(of(|n: i32| n - 1), even()).decode(2),
            ap(even())(of(|n: i32| n - 1)).decode(2)
        );
    }
}
