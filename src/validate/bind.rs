//! Do-notation for validators.
//!
//! A record is built step by step inside a validator of that record. Every
//! operator returns a function from `Validate<I, S>` to `Validate<I, S>`, so
//! a whole build reads top to bottom with [`pipe!`](crate::pipe).
//!
//! - [`bind`], [`let_`] and [`let_to`] are sequential: once the state has
//!   failed, later steps are not evaluated.
//! - [`ap_s`] is applicative: its validator runs whether or not the state
//!   has failed, and both sets of errors are kept, state first.
//!
//! The `_l` variants take a [`Lens`](crate::optics::Lens) into the state
//! instead of a setter.
//!
//! # Examples
//!
//! ```rust
//! use validus::pipe;
//! use validus::validate::{self, Validate};
//! use validus::validation::Validation;
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point: Validate<(), Point> = pipe!(
//!     validate::do_(Point::default()),
//!     validate::bind(|state: Point, x| Point { x, ..state }, |_| validate::of(10)),
//!     validate::bind(|state: Point, y| Point { y, ..state }, |state: &Point| validate::of(state.x * 2)),
//! );
//!
//! assert_eq!(point.decode(()), Validation::success(Point { x: 10, y: 20 }));
//! ```

use std::rc::Rc;

use super::Validate;
use crate::typeclass::Applicative;
use crate::validation::{Context, Validation};

#[cfg(feature = "optics")]
use crate::optics::Lens;

/// Starts a build from `state`.
pub fn do_<I, S>(state: S) -> Validate<I, S>
where
    I: Clone + 'static,
    S: Clone + 'static,
{
    Validate::success(state)
}

/// Runs the validator built by `factory` from the current state and stores
/// its value with `setter`.
///
/// The factory's validator sees the same input and context as the state.
/// A failed state is passed through without calling `factory`.
pub fn bind<I, S, T, Setter, Factory>(
    setter: Setter,
    factory: Factory,
) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    Setter: Fn(S, T) -> S + 'static,
    Factory: Fn(&S) -> Validate<I, T> + 'static,
{
    let setter = Rc::new(setter);
    let factory = Rc::new(factory);
    move |validate: Validate<I, S>| {
        let setter = Rc::clone(&setter);
        let factory = Rc::clone(&factory);
        Validate::from_fn(move |input: I, context: Context| {
            match validate.run_with(input.clone(), context.clone()) {
                Validation::Success(state) => factory(&state)
                    .run_with(input, context)
                    .map(|value| setter(state, value)),
                Validation::Failure(errors) => Validation::Failure(errors),
            }
        })
    }
}

/// Stores a value computed from the current state. Cannot fail.
pub fn let_<I, S, T, Setter, Compute>(
    setter: Setter,
    compute: Compute,
) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    Setter: Fn(S, T) -> S + 'static,
    Compute: Fn(&S) -> T + 'static,
{
    let setter = Rc::new(setter);
    let compute = Rc::new(compute);
    move |validate: Validate<I, S>| {
        let setter = Rc::clone(&setter);
        let compute = Rc::clone(&compute);
        validate.map(move |state| {
            let value = compute(&state);
            setter(state, value)
        })
    }
}

/// Stores a constant.
pub fn let_to<I, S, T, Setter>(setter: Setter, value: T) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: Clone + 'static,
    Setter: Fn(S, T) -> S + 'static,
{
    let_(setter, move |_: &S| value.clone())
}

/// Wraps the value of a validator into a fresh state.
pub fn bind_to<I, A, S, Constructor>(
    constructor: Constructor,
) -> impl Fn(Validate<I, A>) -> Validate<I, S>
where
    I: Clone + 'static,
    A: 'static,
    S: 'static,
    Constructor: Fn(A) -> S + 'static,
{
    let constructor = Rc::new(constructor);
    move |validate: Validate<I, A>| {
        let constructor = Rc::clone(&constructor);
        validate.map(move |value| constructor(value))
    }
}

/// Runs `field` alongside the state and stores its value with `setter`.
///
/// Both run even when one of them fails, and every error is kept: the
/// state's errors first, then the field's.
///
/// # Examples
///
/// ```rust
/// use validus::pipe;
/// use validus::validate::{self, Validate};
/// use validus::validation::{Errors, Validation};
///
/// let failing_state: Validate<(), (i32, i32)> = Validate::failures(Errors::from_message("state error"));
/// let failing_field: Validate<(), i32> = Validate::failures(Errors::from_message("value error"));
///
/// let result = pipe!(
///     failing_state,
///     validate::ap_s(|state: (i32, i32), y| (state.0, y), failing_field),
/// );
///
/// assert_eq!(
///     result.decode(()).errors().map(Errors::messages),
///     Some(vec!["state error", "value error"])
/// );
/// ```
pub fn ap_s<I, S, T, Setter>(
    setter: Setter,
    field: Validate<I, T>,
) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    Setter: Fn(S, T) -> S + 'static,
{
    let setter = Rc::new(setter);
    move |validate: Validate<I, S>| {
        let setter = Rc::clone(&setter);
        let field = field.clone();
        Validate::from_fn(move |input: I, context: Context| {
            let state = validate.run_with(input.clone(), context.clone());
            let value = field.run_with(input, context);
            state.map2(value, |state, value| setter(state, value))
        })
    }
}

/// [`ap_s`] with the field addressed by `lens`.
#[cfg(feature = "optics")]
pub fn ap_s_l<I, S, T, L>(lens: L, field: Validate<I, T>) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    L: Lens<S, T> + 'static,
{
    ap_s(move |state, value| lens.set(state, value), field)
}

/// [`bind`] with the field addressed by `lens`. `factory` receives the
/// field's current value.
#[cfg(feature = "optics")]
pub fn bind_l<I, S, T, L, Factory>(
    lens: L,
    factory: Factory,
) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    L: Lens<S, T> + 'static,
    Factory: Fn(T) -> Validate<I, T> + 'static,
{
    let lens = Rc::new(lens);
    let getter = Rc::clone(&lens);
    bind(
        move |state, value| lens.set(state, value),
        move |state: &S| factory(getter.get(state)),
    )
}

/// [`let_`] with the field addressed by `lens`; `update` receives the
/// field's current value.
#[cfg(feature = "optics")]
pub fn let_l<I, S, T, L, Update>(lens: L, update: Update) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: 'static,
    L: Lens<S, T> + 'static,
    Update: Fn(T) -> T + 'static,
{
    let lens = Rc::new(lens);
    let update = Rc::new(update);
    move |validate: Validate<I, S>| {
        let lens = Rc::clone(&lens);
        let update = Rc::clone(&update);
        validate.map(move |state| lens.modify(state, |value| update(value)))
    }
}

/// [`let_to`] with the field addressed by `lens`.
#[cfg(feature = "optics")]
pub fn let_to_l<I, S, T, L>(lens: L, value: T) -> impl Fn(Validate<I, S>) -> Validate<I, S>
where
    I: Clone + 'static,
    S: 'static,
    T: Clone + 'static,
    L: Lens<S, T> + 'static,
{
    let_to(move |state, value| lens.set(state, value), value)
}
