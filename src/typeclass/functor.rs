//! Functor type class - mapping over a value in a context.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Functor;
//!
//! let value: Option<i32> = Some(5);
//! assert_eq!(value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let missing: Option<i32> = None;
//! assert_eq!(missing.fmap(|n| n + 1), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose contents can be transformed while the
/// shape of the container is kept.
///
/// Failure-like shapes (`None`, `Err`, `Validation::Failure`) pass through
/// untouched.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Functor;
    ///
    /// let doubled: Result<i32, String> = Ok(21).fmap(|n| n * 2);
    /// assert_eq!(doubled, Ok(42));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference of the value, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the inner value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}
