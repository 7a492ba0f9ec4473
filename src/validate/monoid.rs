//! Monoid instances for [`Validate`].
//!
//! The three instances lift the [`Validation`] instances of
//! [`crate::validation`] pointwise: the combined validator runs both
//! operands on the same input and context and combines their results.

use std::fmt;
use std::rc::Rc;

use super::Validate;
use crate::typeclass::{Applicative, MonoidInstance, Semigroup, SemigroupInstance};
use crate::validation::{Context, Validation};

/// See [`applicative_monoid`].
pub struct ApplicativeMonoid<M> {
    inner: Rc<M>,
}

/// Runs both validators and combines their values with `inner`. Errors from
/// both accumulate. The identity always succeeds with `inner`'s identity.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::{SemigroupInstance, monoid_of};
/// use validus::validate::{self, Validate};
/// use validus::validation::Validation;
///
/// let monoid = validate::applicative_monoid(monoid_of::<String>());
/// let greeting: Validate<(), String> = monoid.concat(
///     Validate::success("hello, ".to_string()),
///     Validate::success("world".to_string()),
/// );
/// assert_eq!(greeting.decode(()), Validation::success("hello, world".to_string()));
/// ```
pub fn applicative_monoid<M>(inner: M) -> ApplicativeMonoid<M> {
    ApplicativeMonoid {
        inner: Rc::new(inner),
    }
}

impl<I, A, M> SemigroupInstance<Validate<I, A>> for ApplicativeMonoid<M>
where
    I: Clone + 'static,
    A: 'static,
    M: SemigroupInstance<A> + 'static,
{
    fn concat(&self, first: Validate<I, A>, second: Validate<I, A>) -> Validate<I, A> {
        let inner = Rc::clone(&self.inner);
        Validate::from_fn(move |input: I, context: Context| {
            let left = first.run_with(input.clone(), context.clone());
            let right = second.run_with(input, context);
            left.map2(right, |a, b| inner.concat(a, b))
        })
    }
}

impl<I, A, M> MonoidInstance<Validate<I, A>> for ApplicativeMonoid<M>
where
    I: Clone + 'static,
    A: 'static,
    M: MonoidInstance<A> + 'static,
{
    fn empty(&self) -> Validate<I, A> {
        let inner = Rc::clone(&self.inner);
        Validate::from_fn(move |_, _| Validation::Success(inner.empty()))
    }
}

/// See [`alternative_monoid`].
pub struct AlternativeMonoid<M> {
    inner: Rc<M>,
}

/// Runs both validators. Two successes are combined with `inner`, a single
/// success wins, and errors accumulate only when both fail.
pub fn alternative_monoid<M>(inner: M) -> AlternativeMonoid<M> {
    AlternativeMonoid {
        inner: Rc::new(inner),
    }
}

impl<I, A, M> SemigroupInstance<Validate<I, A>> for AlternativeMonoid<M>
where
    I: Clone + 'static,
    A: 'static,
    M: SemigroupInstance<A> + 'static,
{
    fn concat(&self, first: Validate<I, A>, second: Validate<I, A>) -> Validate<I, A> {
        let inner = Rc::clone(&self.inner);
        Validate::from_fn(move |input: I, context: Context| {
            let left = first.run_with(input.clone(), context.clone());
            let right = second.run_with(input, context);
            match (left, right) {
                (Validation::Success(a), Validation::Success(b)) => {
                    Validation::Success(inner.concat(a, b))
                }
                (success @ Validation::Success(_), Validation::Failure(_))
                | (Validation::Failure(_), success @ Validation::Success(_)) => success,
                (Validation::Failure(left), Validation::Failure(right)) => {
                    Validation::Failure(left.combine(right))
                }
            }
        })
    }
}

impl<I, A, M> MonoidInstance<Validate<I, A>> for AlternativeMonoid<M>
where
    I: Clone + 'static,
    A: 'static,
    M: MonoidInstance<A> + 'static,
{
    fn empty(&self) -> Validate<I, A> {
        let inner = Rc::clone(&self.inner);
        Validate::from_fn(move |_, _| Validation::Success(inner.empty()))
    }
}

/// See [`alt_monoid`].
pub struct AltMonoid<I, A>
where
    I: 'static,
    A: 'static,
{
    zero: Rc<dyn Fn() -> Validate<I, A>>,
}

/// First-success-wins combination with [`Validate::alt`]. The second
/// validator only runs when the first fails.
///
/// `zero` builds the identity. It is not called until the identity
/// validator is run.
pub fn alt_monoid<I, A, Z>(zero: Z) -> AltMonoid<I, A>
where
    I: 'static,
    A: 'static,
    Z: Fn() -> Validate<I, A> + 'static,
{
    AltMonoid {
        zero: Rc::new(zero),
    }
}

impl<I, A> SemigroupInstance<Validate<I, A>> for AltMonoid<I, A>
where
    I: Clone + 'static,
    A: 'static,
{
    fn concat(&self, first: Validate<I, A>, second: Validate<I, A>) -> Validate<I, A> {
        first.alt(move || second.clone())
    }
}

impl<I, A> MonoidInstance<Validate<I, A>> for AltMonoid<I, A>
where
    I: Clone + 'static,
    A: 'static,
{
    fn empty(&self) -> Validate<I, A> {
        let zero = Rc::clone(&self.zero);
        Validate::from_fn(move |input, context| zero().run_with(input, context))
    }
}

impl<M> Clone for ApplicativeMonoid<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M> Clone for AlternativeMonoid<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<I, A> Clone for AltMonoid<I, A>
where
    I: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            zero: Rc::clone(&self.zero),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for ApplicativeMonoid<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApplicativeMonoid")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<M: fmt::Debug> fmt::Debug for AlternativeMonoid<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AlternativeMonoid")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I, A> fmt::Debug for AltMonoid<I, A>
where
    I: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AltMonoid").finish_non_exhaustive()
    }
}
