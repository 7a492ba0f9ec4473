//! Optional optics for focusing on a part that may be absent.
//!
//! `set` only writes when the focus is currently present. Setting through
//! an absent focus returns the source unchanged, never a partially built
//! structure.
//!
//! # Laws
//!
//! 1. **GetSet**: if `get_option(&s) == Some(a)` then `set(s.clone(), a) == s`
//! 2. **SetGet**: if `get_option(&s).is_some()` then `get_option(&set(s, b.clone())) == Some(b)`
//! 3. **NoOp**: if `get_option(&s).is_none()` then `set(s.clone(), b) == s`
//!
//! # Examples
//!
//! ```rust
//! use validus::optics::{Optional, make_optional};
//!
//! let first = make_optional(
//!     |items: &Vec<i32>| items.first().copied(),
//!     |mut items: Vec<i32>, value: i32| {
//!         items[0] = value;
//!         items
//!     },
//! );
//!
//! assert_eq!(first.get_option(&vec![1, 2]), Some(1));
//! assert_eq!(first.set(vec![1, 2], 9), vec![9, 2]);
//! assert_eq!(first.set(Vec::new(), 9), Vec::<i32>::new());
//! ```

use std::marker::PhantomData;

use super::prism::{Prism, PrismAsOptional};

/// An Optional focuses on a part that may or may not exist.
///
/// - `S`: the whole structure
/// - `A`: the focused part
pub trait Optional<S, A> {
    /// Reads the focus if it is present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focus if it is present. Otherwise returns `source`
    /// unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focus, or returns `None` when it is absent.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Applies `function` to the focus if present.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Whether the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Focuses further with `other`. The result is absent whenever either
    /// step is.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Continues into one case of a sum type.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }

    /// Changes the focus type through an isomorphism.
    fn imap<B, AB, BA>(self, forward: AB, backward: BA) -> IMappedOptional<Self, AB, BA, A>
    where
        Self: Sized,
        AB: Fn(A) -> B,
        BA: Fn(B) -> A,
    {
        IMappedOptional::new(self, forward, backward)
    }

    /// Changes the focus type through a pair of partial conversions.
    ///
    /// The focus is absent when `forward` fails. Setting a value that
    /// `backward` rejects leaves the source unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::optics::{Optional, make_optional};
    ///
    /// let text = make_optional(
    ///     |source: &Option<String>| source.clone(),
    ///     |_: Option<String>, text: String| Some(text),
    /// );
    /// let number = text.ichain(
    ///     |text: String| text.parse::<u8>().ok(),
    ///     |number: u8| Some(number.to_string()),
    /// );
    ///
    /// assert_eq!(number.get_option(&Some("42".to_string())), Some(42));
    /// assert_eq!(number.get_option(&Some("forty".to_string())), None);
    /// assert_eq!(number.set(Some("1".to_string()), 7), Some("7".to_string()));
    /// ```
    fn ichain<B, AB, BA>(self, forward: AB, backward: BA) -> IChainedOptional<Self, AB, BA, A>
    where
        Self: Sized,
        AB: Fn(A) -> Option<B>,
        BA: Fn(B) -> Option<A>,
    {
        IChainedOptional::new(self, forward, backward)
    }
}

/// An optional built from a partial getter and a setter.
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates an optional from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

/// Creates an optional from a partial getter and a setter.
///
/// The setter is only called when the getter finds the focus, so it may
/// assume the focus exists.
pub const fn make_optional<S, A, G, St>(getter: G, setter: St) -> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    FunctionOptional::new(getter, setter)
}

/// Creates an optional whose focus is present when `predicate` accepts
/// what `getter` reads.
///
/// Setting writes through `setter` only when the current value satisfies
/// `predicate`.
///
/// # Examples
///
/// ```rust
/// use validus::optics::{Optional, from_predicate};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Account { balance: i64 }
///
/// let positive_balance = from_predicate(
///     |balance: &i64| *balance > 0,
///     |account: &Account| account.balance,
///     |_: Account, balance: i64| Account { balance },
/// );
///
/// assert_eq!(positive_balance.get_option(&Account { balance: 10 }), Some(10));
/// assert_eq!(positive_balance.get_option(&Account { balance: -5 }), None);
/// assert_eq!(positive_balance.set(Account { balance: -5 }, 100), Account { balance: -5 });
/// ```
pub fn from_predicate<S, A, P, G, St>(
    predicate: P,
    getter: G,
    setter: St,
) -> FunctionOptional<S, A, impl Fn(&S) -> Option<A>, St>
where
    P: Fn(&A) -> bool,
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    FunctionOptional::new(
        move |source: &S| {
            let value = getter(source);
            predicate(&value).then_some(value)
        },
        setter,
    )
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if (self.getter)(&source).is_some() {
            (self.setter)(source, value)
        } else {
            source
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// Two optionals applied one after the other. `A` is the intermediate
/// focus.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Composes `first` (outer) with `second` (inner).
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

/// Composes two optionals. Same as [`Optional::compose`].
pub const fn compose<O1, O2, A>(outer: O1, inner: O2) -> ComposedOptional<O1, O2, A> {
    ComposedOptional::new(outer, inner)
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source) {
            Some(intermediate) if self.second.is_present(&intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            _ => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An optional whose focus has been mapped through an isomorphism.
pub struct IMappedOptional<O, AB, BA, A> {
    optional: O,
    forward: AB,
    backward: BA,
    _marker: PhantomData<fn() -> A>,
}

impl<O, AB, BA, A> IMappedOptional<O, AB, BA, A> {
    /// Wraps `optional` with `forward` and `backward`.
    #[must_use]
    pub const fn new(optional: O, forward: AB, backward: BA) -> Self {
        Self {
            optional,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, AB, BA> Optional<S, B> for IMappedOptional<O, AB, BA, A>
where
    O: Optional<S, A>,
    AB: Fn(A) -> B,
    BA: Fn(B) -> A,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional.get_option(source).map(&self.forward)
    }

    fn set(&self, source: S, value: B) -> S {
        self.optional.set(source, (self.backward)(value))
    }
}

impl<O: Clone, AB: Clone, BA: Clone, A> Clone for IMappedOptional<O, AB, BA, A> {
    fn clone(&self) -> Self {
        Self::new(
            self.optional.clone(),
            self.forward.clone(),
            self.backward.clone(),
        )
    }
}

impl<O: std::fmt::Debug, AB, BA, A> std::fmt::Debug for IMappedOptional<O, AB, BA, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IMappedOptional")
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

/// An optional whose focus has been mapped through partial conversions.
pub struct IChainedOptional<O, AB, BA, A> {
    optional: O,
    forward: AB,
    backward: BA,
    _marker: PhantomData<fn() -> A>,
}

impl<O, AB, BA, A> IChainedOptional<O, AB, BA, A> {
    /// Wraps `optional` with `forward` and `backward`.
    #[must_use]
    pub const fn new(optional: O, forward: AB, backward: BA) -> Self {
        Self {
            optional,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, AB, BA> Optional<S, B> for IChainedOptional<O, AB, BA, A>
where
    O: Optional<S, A>,
    AB: Fn(A) -> Option<B>,
    BA: Fn(B) -> Option<A>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional.get_option(source).and_then(&self.forward)
    }

    fn set(&self, source: S, value: B) -> S {
        let present = self
            .optional
            .get_option(&source)
            .and_then(&self.forward)
            .is_some();
        match (present, (self.backward)(value)) {
            (true, Some(inner)) => self.optional.set(source, inner),
            _ => source,
        }
    }
}

impl<O: Clone, AB: Clone, BA: Clone, A> Clone for IChainedOptional<O, AB, BA, A> {
    fn clone(&self) -> Self {
        Self::new(
            self.optional.clone(),
            self.forward.clone(),
            self.backward.clone(),
        )
    }
}

impl<O: std::fmt::Debug, AB, BA, A> std::fmt::Debug for IChainedOptional<O, AB, BA, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IChainedOptional")
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}
