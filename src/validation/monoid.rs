//! Monoid instances for [`Validation`].
//!
//! A validation can be combined in three lawful ways, each packaged as a
//! [`MonoidInstance`]:
//!
//! - [`applicative_monoid`]: both values must be present and are combined
//!   with an inner monoid. Errors from both sides accumulate.
//! - [`alternative_monoid`]: any success is kept, two successes are
//!   combined, and errors accumulate only when both sides fail.
//! - [`alt_monoid`]: the first success wins. The identity is a caller
//!   supplied fallback.

use super::types::Validation;
use crate::typeclass::{Applicative, MonoidInstance, Semigroup, SemigroupInstance};

/// See [`applicative_monoid`].
#[derive(Debug, Clone, Copy)]
pub struct ApplicativeMonoid<M> {
    inner: M,
}

/// Combines successful values with `inner`, accumulating errors from both
/// sides.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::{MonoidInstance, SemigroupInstance, monoid_of};
/// use validus::validation::{Validation, applicative_monoid};
///
/// let monoid = applicative_monoid(monoid_of::<String>());
/// let combined = monoid.concat(
///     Validation::success("a".to_string()),
///     Validation::success("b".to_string()),
/// );
/// assert_eq!(combined, Validation::success("ab".to_string()));
/// assert_eq!(monoid.empty(), Validation::success(String::new()));
/// ```
pub const fn applicative_monoid<M>(inner: M) -> ApplicativeMonoid<M> {
    ApplicativeMonoid { inner }
}

impl<A, M> SemigroupInstance<Validation<A>> for ApplicativeMonoid<M>
where
    M: SemigroupInstance<A>,
{
    fn concat(&self, first: Validation<A>, second: Validation<A>) -> Validation<A> {
        first.map2(second, |a, b| self.inner.concat(a, b))
    }
}

impl<A, M> MonoidInstance<Validation<A>> for ApplicativeMonoid<M>
where
    M: MonoidInstance<A>,
{
    fn empty(&self) -> Validation<A> {
        Validation::Success(self.inner.empty())
    }
}

/// See [`alternative_monoid`].
#[derive(Debug, Clone, Copy)]
pub struct AlternativeMonoid<M> {
    inner: M,
}

/// Keeps whichever side succeeds, combines two successes with `inner`, and
/// accumulates errors only when both sides fail.
pub const fn alternative_monoid<M>(inner: M) -> AlternativeMonoid<M> {
    AlternativeMonoid { inner }
}

impl<A, M> SemigroupInstance<Validation<A>> for AlternativeMonoid<M>
where
    M: SemigroupInstance<A>,
{
    fn concat(&self, first: Validation<A>, second: Validation<A>) -> Validation<A> {
        match (first, second) {
            (Validation::Success(a), Validation::Success(b)) => {
                Validation::Success(self.inner.concat(a, b))
            }
            (success @ Validation::Success(_), Validation::Failure(_))
            | (Validation::Failure(_), success @ Validation::Success(_)) => success,
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }
}

impl<A, M> MonoidInstance<Validation<A>> for AlternativeMonoid<M>
where
    M: MonoidInstance<A>,
{
    fn empty(&self) -> Validation<A> {
        Validation::Success(self.inner.empty())
    }
}

/// See [`alt_monoid`].
#[derive(Debug, Clone, Copy)]
pub struct AltMonoid<Z> {
    zero: Z,
}

/// First-success-wins combination. `zero` produces the identity and is
/// called each time [`MonoidInstance::empty`] is requested.
///
/// For the laws to hold `zero` should produce a failure with no errors;
/// any other value makes it the fallback of last resort.
pub const fn alt_monoid<Z>(zero: Z) -> AltMonoid<Z> {
    AltMonoid { zero }
}

impl<A, Z> SemigroupInstance<Validation<A>> for AltMonoid<Z>
where
    Z: Fn() -> Validation<A>,
{
    fn concat(&self, first: Validation<A>, second: Validation<A>) -> Validation<A> {
        first.alt(|| second)
    }
}

impl<A, Z> MonoidInstance<Validation<A>> for AltMonoid<Z>
where
    Z: Fn() -> Validation<A>,
{
    fn empty(&self) -> Validation<A> {
        (self.zero)()
    }
}
