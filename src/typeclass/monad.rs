//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` feeds the value of one computation into the function that
//! builds the next. Because the next step needs that value, a failure always
//! short-circuits: there is nothing left to run, so nothing left to
//! accumulate.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  // left identity
//! m.flat_map(pure) == m                                        // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Monad;
//!
//! fn half(n: i32) -> Option<i32> {
//!     if n % 2 == 0 { Some(n / 2) } else { None }
//! }
//!
//! assert_eq!(Some(8).flat_map(half).flat_map(half), Some(2));
//! assert_eq!(Some(6).flat_map(half).flat_map(half), None);
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations where each step depends on the
/// previous result.
pub trait Monad: Applicative {
    /// Applies `function` to the inner value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// A failing `self` is propagated and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
