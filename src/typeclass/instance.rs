//! Value-level semigroup and monoid instances.
//!
//! The [`Semigroup`] and [`Monoid`] traits fix one instance per type. Some
//! types have several lawful monoids that the caller must choose between at
//! runtime; validators are the main example, since they can be combined
//! applicatively, as alternatives, or as a fallback chain. Those choices are
//! expressed as values implementing [`MonoidInstance`].
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::{MonoidInstance, SemigroupInstance, monoid_of, FunctionMonoid};
//!
//! let strings = monoid_of::<String>();
//! assert_eq!(strings.concat("a".to_string(), "b".to_string()), "ab");
//!
//! let maximum = FunctionMonoid::new(|| i32::MIN, |a: i32, b: i32| a.max(b));
//! assert_eq!(maximum.concat_all(vec![3, 9, 4]), 9);
//! assert_eq!(maximum.empty(), i32::MIN);
//! ```

use std::marker::PhantomData;

use super::monoid::Monoid;

/// An associative binary operation over `A`, passed around as a value.
pub trait SemigroupInstance<A> {
    /// Combines two values. Must be associative.
    fn concat(&self, first: A, second: A) -> A;
}

/// A [`SemigroupInstance`] with an identity element.
///
/// # Laws
///
/// ```text
/// m.concat(m.empty(), a) == a
/// m.concat(a, m.empty()) == a
/// ```
pub trait MonoidInstance<A>: SemigroupInstance<A> {
    /// Returns the identity element.
    fn empty(&self) -> A;

    /// Folds every element, starting from [`MonoidInstance::empty`].
    fn concat_all<I>(&self, items: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        items
            .into_iter()
            .fold(self.empty(), |accumulator, item| self.concat(accumulator, item))
    }
}

impl<A, M> SemigroupInstance<A> for &M
where
    M: SemigroupInstance<A> + ?Sized,
{
    fn concat(&self, first: A, second: A) -> A {
        (**self).concat(first, second)
    }
}

impl<A, M> MonoidInstance<A> for &M
where
    M: MonoidInstance<A> + ?Sized,
{
    fn empty(&self) -> A {
        (**self).empty()
    }
}

/// The instance derived from a type's [`Monoid`] implementation.
pub struct TypeclassMonoid<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> TypeclassMonoid<A> {
    /// Creates the instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for TypeclassMonoid<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for TypeclassMonoid<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for TypeclassMonoid<A> {}

impl<A> std::fmt::Debug for TypeclassMonoid<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("TypeclassMonoid").finish()
    }
}

impl<A: Monoid> SemigroupInstance<A> for TypeclassMonoid<A> {
    fn concat(&self, first: A, second: A) -> A {
        first.combine(second)
    }
}

impl<A: Monoid> MonoidInstance<A> for TypeclassMonoid<A> {
    fn empty(&self) -> A {
        A::empty()
    }
}

/// Returns the monoid instance of `A` as a value.
#[must_use]
pub const fn monoid_of<A: Monoid>() -> TypeclassMonoid<A> {
    TypeclassMonoid::new()
}

/// A monoid instance built from an identity function and a combining function.
pub struct FunctionMonoid<A, E, C>
where
    E: Fn() -> A,
    C: Fn(A, A) -> A,
{
    empty_function: E,
    concat_function: C,
    _marker: PhantomData<fn() -> A>,
}

impl<A, E, C> FunctionMonoid<A, E, C>
where
    E: Fn() -> A,
    C: Fn(A, A) -> A,
{
    /// Creates an instance from `empty` and `concat`.
    ///
    /// The caller is responsible for the monoid laws.
    #[must_use]
    pub const fn new(empty_function: E, concat_function: C) -> Self {
        Self {
            empty_function,
            concat_function,
            _marker: PhantomData,
        }
    }
}

impl<A, E, C> SemigroupInstance<A> for FunctionMonoid<A, E, C>
where
    E: Fn() -> A,
    C: Fn(A, A) -> A,
{
    fn concat(&self, first: A, second: A) -> A {
        (self.concat_function)(first, second)
    }
}

impl<A, E, C> MonoidInstance<A> for FunctionMonoid<A, E, C>
where
    E: Fn() -> A,
    C: Fn(A, A) -> A,
{
    fn empty(&self) -> A {
        (self.empty_function)()
    }
}

impl<A, E, C> Clone for FunctionMonoid<A, E, C>
where
    E: Fn() -> A + Clone,
    C: Fn(A, A) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            empty_function: self.empty_function.clone(),
            concat_function: self.concat_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, E, C> std::fmt::Debug for FunctionMonoid<A, E, C>
where
    E: Fn() -> A,
    C: Fn(A, A) -> A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionMonoid")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn typeclass_monoid_delegates_to_trait() {
        let sums = monoid_of::<Sum<i32>>();
        assert_eq!(sums.concat_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
        assert_eq!(sums.empty(), Sum(0));
    }

    #[rstest]
    fn borrowed_instance_behaves_like_owned() {
        let strings = monoid_of::<String>();
        let borrowed = &strings;
        assert_eq!(borrowed.concat("x".into(), "y".into()), "xy");
        assert_eq!(borrowed.empty(), "");
    }

    #[rstest]
    fn function_monoid_identity_laws() {
        let product = FunctionMonoid::new(|| 1_i64, |a: i64, b: i64| a * b);
        for value in [-3_i64, 0, 7] {
            assert_eq!(product.concat(product.empty(), value), value);
            assert_eq!(product.concat(value, product.empty()), value);
        }
    }
}
