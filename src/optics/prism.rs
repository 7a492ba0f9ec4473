//! Prism optics for focusing on one case of a sum type.
//!
//! A prism can try to read its case out of a source and can always build a
//! source from a value of that case.
//!
//! # Laws
//!
//! 1. **ReverseGetGet**: `prism.get_option(&prism.reverse_get(a.clone())) == Some(a)`
//! 2. **GetReverseGet**: if `prism.get_option(&s) == Some(a)` then `prism.reverse_get(a) == s`
//!
//! # Examples
//!
//! ```rust
//! use validus::optics::{Prism, make_prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = make_prism(
//!     |shape: &Shape| match shape {
//!         Shape::Circle(radius) => Some(*radius),
//!         Shape::Square(_) => None,
//!     },
//!     Shape::Circle,
//! );
//!
//! assert_eq!(circle.get_option(&Shape::Circle(1.5)), Some(1.5));
//! assert_eq!(circle.get_option(&Shape::Square(2.0)), None);
//! assert_eq!(circle.reverse_get(3.0), Shape::Circle(3.0));
//! ```

use std::marker::PhantomData;

use super::optional::Optional;

/// A Prism focuses on one case of a sum type.
///
/// - `S`: the sum type
/// - `A`: the payload of the focused case
pub trait Prism<S, A> {
    /// Reads the payload if `source` is the focused case.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Builds the focused case from a payload.
    fn reverse_get(&self, value: A) -> S;

    /// Applies `function` to the payload, or returns `None` for another case.
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_option(source)
            .map(|value| self.reverse_get(function(value)))
    }

    /// Applies `function` to the payload if `source` is the focused case.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.reverse_get(function(value)),
            None => source,
        }
    }

    /// Focuses on a case nested inside this one.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Views this prism as an [`Optional`].
    ///
    /// Setting replaces the source with `reverse_get(value)` only when the
    /// source is currently the focused case.
    fn to_optional(self) -> PrismAsOptional<Self, A>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }
}

/// A prism built from a partial getter and a constructor.
pub struct FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    get_option_function: G,
    reverse_get_function: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, R> FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a prism from `get_option_function` and `reverse_get_function`.
    #[must_use]
    pub const fn new(get_option_function: G, reverse_get_function: R) -> Self {
        Self {
            get_option_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

/// Creates a prism from a partial getter and a constructor.
pub const fn make_prism<S, A, G, R>(get_option: G, reverse_get: R) -> FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    FunctionPrism::new(get_option, reverse_get)
}

impl<S, A, G, R> Prism<S, A> for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, R> Clone for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(
            self.get_option_function.clone(),
            self.reverse_get_function.clone(),
        )
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// Two prisms applied one after the other. `A` is the intermediate case.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Composes `first` (outer) with `second` (inner).
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism viewed as an [`Optional`].
pub struct PrismAsOptional<P, A> {
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<P, A> PrismAsOptional<P, A> {
    /// Wraps `prism`.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

/// Views a prism as an optional. Same as [`Prism::to_optional`].
pub const fn prism_as_optional<P, A>(prism: P) -> PrismAsOptional<P, A> {
    PrismAsOptional::new(prism)
}

impl<S, A, P> Optional<S, A> for PrismAsOptional<P, A>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.prism.get_option(&source).is_some() {
            self.prism.reverse_get(value)
        } else {
            source
        }
    }
}

impl<P: Clone, A> Clone for PrismAsOptional<P, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, A> std::fmt::Debug for PrismAsOptional<P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsOptional")
            .field("prism", &self.prism)
            .finish()
    }
}

// =============================================================================
// Standard prisms
// =============================================================================

/// Focuses on the `Some` case of an `Option`.
pub struct SomePrism<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Returns the prism for `Option::Some`.
#[must_use]
pub const fn some_prism<T>() -> SomePrism<T> {
    SomePrism {
        _marker: PhantomData,
    }
}

impl<T: Clone> Prism<Option<T>, T> for SomePrism<T> {
    fn get_option(&self, source: &Option<T>) -> Option<T> {
        source.clone()
    }

    fn reverse_get(&self, value: T) -> Option<T> {
        Some(value)
    }
}

/// Focuses on the `Ok` case of a `Result`.
pub struct OkPrism<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

/// Returns the prism for `Result::Ok`.
#[must_use]
pub const fn ok_prism<T, E>() -> OkPrism<T, E> {
    OkPrism {
        _marker: PhantomData,
    }
}

impl<T: Clone, E> Prism<Result<T, E>, T> for OkPrism<T, E> {
    fn get_option(&self, source: &Result<T, E>) -> Option<T> {
        source.as_ref().ok().cloned()
    }

    fn reverse_get(&self, value: T) -> Result<T, E> {
        Ok(value)
    }
}

/// Focuses on the `Err` case of a `Result`.
pub struct ErrPrism<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

/// Returns the prism for `Result::Err`.
#[must_use]
pub const fn err_prism<T, E>() -> ErrPrism<T, E> {
    ErrPrism {
        _marker: PhantomData,
    }
}

impl<T, E: Clone> Prism<Result<T, E>, E> for ErrPrism<T, E> {
    fn get_option(&self, source: &Result<T, E>) -> Option<E> {
        source.as_ref().err().cloned()
    }

    fn reverse_get(&self, value: E) -> Result<T, E> {
        Err(value)
    }
}

macro_rules! impl_marker_traits {
    ($($name:ident<$($parameter:ident),+>),+ $(,)?) => {
        $(
            impl<$($parameter),+> Clone for $name<$($parameter),+> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<$($parameter),+> Copy for $name<$($parameter),+> {}

            impl<$($parameter),+> std::fmt::Debug for $name<$($parameter),+> {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    formatter.write_str(stringify!($name))
                }
            }
        )+
    };
}

impl_marker_traits!(SomePrism<T>, OkPrism<T, E>, ErrPrism<T, E>);
