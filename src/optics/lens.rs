//! Lens optics for focusing on a part that is always present.
//!
//! A lens pairs a getter with an immutable setter. Getters return the focus
//! by value, so a lens can also focus on something computed from the source
//! (see [`Lens::imap`]).
//!
//! # Laws
//!
//! 1. **GetSet**: `lens.set(s.clone(), lens.get(&s)) == s`
//! 2. **SetGet**: `lens.get(&lens.set(s, a.clone())) == a`
//! 3. **SetSet**: `lens.set(lens.set(s, a1), a2) == lens.set(s, a2)`
//!
//! # Examples
//!
//! ```rust
//! use validus::optics::{Lens, make_lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address = make_lens(
//!     |person: &Person| person.address.clone(),
//!     |person: Person, address: Address| Person { address, ..person },
//! );
//! let city = make_lens(
//!     |address: &Address| address.city.clone(),
//!     |_: Address, city: String| Address { city },
//! );
//! let person_city = address.compose(city);
//!
//! let alice = Person { name: "Alice".into(), address: Address { city: "Tokyo".into() } };
//! assert_eq!(person_city.get(&alice), "Tokyo");
//!
//! let moved = person_city.set(alice, "Osaka".into());
//! assert_eq!(moved.address.city, "Osaka");
//! ```

use std::marker::PhantomData;

use super::optional::{ComposedOptional, Optional};
use super::prism::{Prism, PrismAsOptional};

/// A Lens focuses on a single part of a larger structure.
///
/// - `S`: the whole structure
/// - `A`: the focused part
pub trait Lens<S, A> {
    /// Reads the focus.
    fn get(&self, source: &S) -> A;

    /// Returns `source` with the focus replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focus.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get(&source);
        self.set(source, function(value))
    }

    /// Focuses further with `other`.
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Continues with an optional focus.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<LensAsOptional<Self, A>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.to_optional(), other)
    }

    /// Continues into one case of a sum type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::optics::{Lens, Optional, make_lens, some_prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Settings { timeout: Option<u32> }
    ///
    /// let timeout = make_lens(
    ///     |settings: &Settings| settings.timeout,
    ///     |_: Settings, timeout: Option<u32>| Settings { timeout },
    /// )
    /// .compose_prism(some_prism::<u32>());
    ///
    /// assert_eq!(timeout.get_option(&Settings { timeout: Some(30) }), Some(30));
    /// assert_eq!(timeout.set(Settings { timeout: None }, 5), Settings { timeout: None });
    /// ```
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedOptional<LensAsOptional<Self, A>, PrismAsOptional<P, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self.to_optional(), PrismAsOptional::new(prism))
    }

    /// Views this lens as an [`Optional`] whose focus is always present.
    fn to_optional(self) -> LensAsOptional<Self, A>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }

    /// Changes the focus type through an isomorphism.
    ///
    /// `forward` and `backward` must be inverses for the laws to carry over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::optics::{Lens, make_lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Timer { millis: u64 }
    ///
    /// let seconds = make_lens(
    ///     |timer: &Timer| timer.millis,
    ///     |_: Timer, millis: u64| Timer { millis },
    /// )
    /// .imap(|millis| millis as f64 / 1000.0, |seconds: f64| (seconds * 1000.0) as u64);
    ///
    /// assert_eq!(seconds.get(&Timer { millis: 2500 }), 2.5);
    /// assert_eq!(seconds.set(Timer { millis: 0 }, 1.5), Timer { millis: 1500 });
    /// ```
    fn imap<B, AB, BA>(self, forward: AB, backward: BA) -> IMappedLens<Self, AB, BA, A>
    where
        Self: Sized,
        AB: Fn(A) -> B,
        BA: Fn(B) -> A,
    {
        IMappedLens::new(self, forward, backward)
    }
}

/// A lens built from a getter and a setter.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

/// Creates a lens from a getter and an immutable setter.
///
/// The setter must return a new structure and leave everything other than
/// the focus unchanged.
pub const fn make_lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses applied one after the other. `A` is the intermediate focus.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Composes `first` (outer) with `second` (inner).
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Composes two lenses. Same as [`Lens::compose`].
pub const fn compose_lens<L1, L2, A>(outer: L1, inner: L2) -> ComposedLens<L1, L2, A> {
    ComposedLens::new(outer, inner)
}

/// A lens whose focus has been mapped through an isomorphism.
pub struct IMappedLens<L, AB, BA, A> {
    lens: L,
    forward: AB,
    backward: BA,
    _marker: PhantomData<fn() -> A>,
}

impl<L, AB, BA, A> IMappedLens<L, AB, BA, A> {
    /// Wraps `lens` with `forward` and `backward`.
    #[must_use]
    pub const fn new(lens: L, forward: AB, backward: BA) -> Self {
        Self {
            lens,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, AB, BA> Lens<S, B> for IMappedLens<L, AB, BA, A>
where
    L: Lens<S, A>,
    AB: Fn(A) -> B,
    BA: Fn(B) -> A,
{
    fn get(&self, source: &S) -> B {
        (self.forward)(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.lens.set(source, (self.backward)(value))
    }
}

impl<L: Clone, AB: Clone, BA: Clone, A> Clone for IMappedLens<L, AB, BA, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, AB, BA, A> std::fmt::Debug for IMappedLens<L, AB, BA, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IMappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// A lens viewed as an [`Optional`] that is always present.
pub struct LensAsOptional<L, A> {
    lens: L,
    _marker: PhantomData<fn() -> A>,
}

impl<L, A> LensAsOptional<L, A> {
    /// Wraps `lens`.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

/// Views a lens as an optional. Same as [`Lens::to_optional`].
pub const fn lens_as_optional<L, A>(lens: L) -> LensAsOptional<L, A> {
    LensAsOptional::new(lens)
}

impl<S, A, L> Optional<S, A> for LensAsOptional<L, A>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

impl<L: Clone, A> Clone for LensAsOptional<L, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, A> std::fmt::Debug for LensAsOptional<L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsOptional")
            .field("lens", &self.lens)
            .finish()
    }
}
