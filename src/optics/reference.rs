//! Optics over shared, reference-counted structures.
//!
//! The setters here take `&mut S` and run on a private copy: the optic calls
//! [`Rc::make_mut`], which clones the structure first whenever another `Rc`
//! still points to it. Values held elsewhere are never changed through an
//! optic.
//!
//! Optionals over `Option<Rc<S>>` treat `None` as an absent focus, so a
//! missing structure reads as absent and setting through it is a no-op.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use validus::optics::{Lens, make_lens_ref};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config { retries: u32 }
//!
//! let retries = make_lens_ref(
//!     |config: &Config| config.retries,
//!     |config: &mut Config, retries: u32| config.retries = retries,
//! );
//!
//! let shared = Rc::new(Config { retries: 1 });
//! let updated = retries.set(Rc::clone(&shared), 5);
//!
//! assert_eq!(shared.retries, 1);
//! assert_eq!(updated.retries, 5);
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use super::optional::{ComposedOptional, Optional};

/// A lens over `Rc<S>` with copy-on-write setting.
pub struct RefLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

/// Creates a lens over `Rc<S>` from a getter and an in-place setter.
pub const fn make_lens_ref<S, A, G, St>(getter: G, setter: St) -> RefLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    RefLens {
        getter,
        setter,
        _marker: PhantomData,
    }
}

impl<S, A, G, St> super::Lens<Rc<S>, A> for RefLens<S, A, G, St>
where
    S: Clone,
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    fn get(&self, source: &Rc<S>) -> A {
        (self.getter)(source)
    }

    fn set(&self, mut source: Rc<S>, value: A) -> Rc<S> {
        (self.setter)(Rc::make_mut(&mut source), value);
        source
    }
}

impl<S, A, G, St> Clone for RefLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(&mut S, A) + Clone,
{
    fn clone(&self) -> Self {
        make_lens_ref(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for RefLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("RefLens").finish_non_exhaustive()
    }
}

/// An optional over `Option<Rc<S>>` with copy-on-write setting.
pub struct RefOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(&mut S, A),
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

/// Creates an optional over `Option<Rc<S>>` from a partial getter and an
/// in-place setter.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use validus::optics::{Optional, make_optional_ref};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Node { label: Option<String> }
///
/// let label = make_optional_ref(
///     |node: &Node| node.label.clone(),
///     |node: &mut Node, label: String| node.label = Some(label),
/// );
///
/// let node = Some(Rc::new(Node { label: Some("a".into()) }));
/// assert_eq!(label.get_option(&node), Some("a".to_string()));
/// assert_eq!(label.get_option(&None), None);
/// assert_eq!(label.set(None, "b".into()), None);
/// ```
pub const fn make_optional_ref<S, A, G, St>(getter: G, setter: St) -> RefOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(&mut S, A),
{
    RefOptional {
        getter,
        setter,
        _marker: PhantomData,
    }
}

/// [`from_predicate`](super::from_predicate) over `Option<Rc<S>>`.
pub fn from_predicate_ref<S, A, P, G, St>(
    predicate: P,
    getter: G,
    setter: St,
) -> RefOptional<S, A, impl Fn(&S) -> Option<A>, St>
where
    P: Fn(&A) -> bool,
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    make_optional_ref(
        move |source: &S| {
            let value = getter(source);
            predicate(&value).then_some(value)
        },
        setter,
    )
}

impl<S, A, G, St> Optional<Option<Rc<S>>, A> for RefOptional<S, A, G, St>
where
    S: Clone,
    G: Fn(&S) -> Option<A>,
    St: Fn(&mut S, A),
{
    fn get_option(&self, source: &Option<Rc<S>>) -> Option<A> {
        source.as_deref().and_then(&self.getter)
    }

    fn set(&self, source: Option<Rc<S>>, value: A) -> Option<Rc<S>> {
        match source {
            Some(mut shared) if (self.getter)(&shared).is_some() => {
                (self.setter)(Rc::make_mut(&mut shared), value);
                Some(shared)
            }
            other => other,
        }
    }
}

impl<S, A, G, St> Clone for RefOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(&mut S, A) + Clone,
{
    fn clone(&self) -> Self {
        make_optional_ref(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for RefOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(&mut S, A),
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("RefOptional").finish_non_exhaustive()
    }
}

/// Composes an optional over `Option<Rc<S>>` with an optional into its
/// focus.
pub const fn compose_ref<S, A, O1, O2>(outer: O1, inner: O2) -> ComposedOptional<O1, O2, A>
where
    O1: Optional<Option<Rc<S>>, A>,
{
    ComposedOptional::new(outer, inner)
}
