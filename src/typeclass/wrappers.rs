//! Newtype wrappers selecting a particular monoid for a type.

/// Selects the additive monoid: `combine` adds, `empty` is `A::default()`.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::{Monoid, Sum};
///
/// let total = Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
/// assert_eq!(total, Sum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[must_use]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}
