//! Context-aware validators.
//!
//! A [`Validate<I, A>`] turns an input `I` into a
//! [`Reader`](crate::effect::Reader) over the validation [`Context`] that
//! yields a [`Validation<A>`]. The context is the path from the root of the
//! structure being checked, so failures can say where they happened without
//! each validator knowing it up front.
//!
//! Validators are values. They compose with `map`, `ap`, `chain`,
//! `chain_left` and `alt`, with the do-notation operators in this module
//! ([`do_`], [`bind`], [`ap_s`], ...), and as monoids
//! ([`applicative_monoid`], [`alternative_monoid`], [`alt_monoid`]).
//!
//! # Examples
//!
//! ```rust
//! use validus::validate::{self, Validate};
//! use validus::validation::Validation;
//!
//! let positive: Validate<i32, i32> = Validate::new(|n: i32| {
//!     if n > 0 {
//!         validate::success(n)
//!     } else {
//!         validate::failure_with_message(n, "must be positive")
//!     }
//! });
//!
//! let age = positive.at("age", "i32");
//! assert_eq!(age.decode(30), Validation::success(30));
//!
//! let errors = age.decode(-1).to_result().unwrap_err();
//! assert_eq!(errors.errors.to_string(), "at age: must be positive");
//! ```

mod bind;
mod convert;
mod monoid;
mod operators;

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::effect::Reader;
use crate::validation::{
    Context, ContextEntry, ErasedValue, Errors, SharedError, Validation, ValidationError, log,
};

pub use bind::{ap_s, bind, bind_to, do_, let_, let_to};
#[cfg(feature = "optics")]
pub use bind::{ap_s_l, bind_l, let_l, let_to_l};
pub use convert::{UNABLE_TO_DECODE, from_reader_result, to_result};
pub use monoid::{
    AltMonoid, AlternativeMonoid, ApplicativeMonoid, alt_monoid, alternative_monoid,
    applicative_monoid,
};
pub use operators::{
    alt, ap, chain, chain_left, map, monad_alt, monad_ap, monad_chain, monad_chain_left,
    monad_map, of, or_else,
};

/// A validator from `I` to `A` that reads the current [`Context`].
///
/// Cloning is cheap: clones share the same underlying function.
pub struct Validate<I, A>
where
    I: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(I) -> Reader<Context, Validation<A>>>,
}

impl<I, A> Validate<I, A>
where
    I: 'static,
    A: 'static,
{
    /// Creates a validator from a function returning a context reader.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(I) -> Reader<Context, Validation<A>> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Applies the validator to `input`, leaving the context open.
    pub fn run(&self, input: I) -> Reader<Context, Validation<A>> {
        (self.run_function)(input)
    }

    /// Applies the validator to `input` at `context`.
    pub fn run_with(&self, input: I, context: Context) -> Validation<A> {
        self.run(input).run(context)
    }

    /// Applies the validator to `input` at the root context.
    pub fn decode(&self, input: I) -> Validation<A> {
        self.run_with(input, Context::empty())
    }
}

impl<I, A> Validate<I, A>
where
    I: Clone + 'static,
    A: 'static,
{
    /// Creates a validator from a function of the input and the context.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(I, Context) -> Validation<A> + 'static,
    {
        let function = Rc::new(function);
        Self::new(move |input: I| {
            let function = Rc::clone(&function);
            Reader::new(move |context: Context| function(input.clone(), context))
        })
    }

    /// A validator that accepts any input and yields `value`.
    pub fn success(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_fn(move |_, _| Validation::Success(value.clone()))
    }

    /// A validator that rejects any input with `errors`.
    pub fn failures(errors: Errors) -> Self {
        Self::from_fn(move |_, _| Validation::Failure(errors.clone()))
    }

    /// Runs this validator one level deeper, under `key`.
    ///
    /// The pushed [`ContextEntry`] records the input as the actual value.
    pub fn at(self, key: impl Into<String>, type_name: impl Into<String>) -> Self
    where
        I: fmt::Debug + Send + Sync,
    {
        let key = key.into();
        let type_name = type_name.into();
        Self::from_fn(move |input: I, context: Context| {
            let entry = ContextEntry::new(key.clone(), type_name.clone())
                .with_actual(ErasedValue::new(input.clone()));
            self.run_with(input, context.push(entry))
        })
    }

    /// Runs this validator against a context rewritten by `modifier`.
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(Context) -> Context + 'static,
    {
        Self::from_fn(move |input, context| self.run_with(input, modifier(context)))
    }

    /// Transforms the successful value.
    pub fn map<B, F>(self, function: F) -> Validate<I, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Validate::from_fn(move |input, context| self.run_with(input, context).map(&function))
    }

    /// Feeds the successful value into the validator built by `function`,
    /// which runs on the same input and context.
    ///
    /// A failure stops here and `function` is not called.
    pub fn chain<B, F>(self, function: F) -> Validate<I, B>
    where
        B: 'static,
        F: Fn(A) -> Validate<I, B> + 'static,
    {
        Validate::from_fn(move |input: I, context: Context| {
            match self.run_with(input.clone(), context.clone()) {
                Validation::Success(value) => function(value).run_with(input, context),
                Validation::Failure(errors) => Validation::Failure(errors),
            }
        })
    }

    /// Recovers from a failure with the validator built by `handler`.
    ///
    /// The handler receives the original errors and runs on the same input
    /// and context. If it fails too, both sets of errors are kept, the
    /// original ones first. Success passes through without calling the
    /// handler.
    pub fn chain_left<F>(self, handler: F) -> Self
    where
        F: Fn(Errors) -> Self + 'static,
    {
        Self::from_fn(move |input: I, context: Context| {
            self.run_with(input.clone(), context.clone())
                .chain_left(|errors| handler(errors).run_with(input, context))
        })
    }

    /// Alias for [`Validate::chain_left`].
    pub fn or_else<F>(self, handler: F) -> Self
    where
        F: Fn(Errors) -> Self + 'static,
    {
        self.chain_left(handler)
    }

    /// Falls back to the validator produced by `second` when this one fails.
    ///
    /// `second` is only called on failure.
    pub fn alt<F>(self, second: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        self.chain_left(move |_| second())
    }
}

impl<I, F> Validate<I, F>
where
    I: Clone + 'static,
    F: 'static,
{
    /// Applies the function produced by this validator to the value produced
    /// by `value`.
    ///
    /// Both validators run on the same input and context. Errors from both
    /// are kept, this validator's first.
    pub fn ap<A, B>(self, value: Validate<I, A>) -> Validate<I, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B,
    {
        Validate::from_fn(move |input: I, context: Context| {
            let function = self.run_with(input.clone(), context.clone());
            function.ap(value.run_with(input, context))
        })
    }
}

impl<I, A> Clone for Validate<I, A>
where
    I: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<I, A> fmt::Debug for Validate<I, A>
where
    I: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Validate").finish_non_exhaustive()
    }
}

/// A context reader that always succeeds with `value`.
pub fn success<A>(value: A) -> Reader<Context, Validation<A>>
where
    A: Clone + 'static,
{
    Reader::new(move |_| Validation::Success(value.clone()))
}

/// A context reader that always fails with `errors`.
pub fn failures<A>(errors: Errors) -> Reader<Context, Validation<A>>
where
    A: 'static,
{
    Reader::new(move |_| Validation::Failure(errors.clone()))
}

/// A context reader that fails with one error for `value`, located at
/// whatever context it is run with.
///
/// # Examples
///
/// ```rust
/// use validus::validate;
/// use validus::validation::{Context, ContextEntry, Validation};
///
/// let reader = validate::failure_with_message::<i32, _>("abc", "expected a number");
/// let context = Context::empty().push(ContextEntry::new("count", "i32"));
///
/// match reader.run(context) {
///     Validation::Failure(errors) => assert_eq!(errors.to_string(), "at count: expected a number"),
///     Validation::Success(_) => unreachable!(),
/// }
/// ```
pub fn failure_with_message<A, V>(
    value: V,
    message: impl Into<String>,
) -> Reader<Context, Validation<A>>
where
    A: 'static,
    V: fmt::Debug + Send + Sync + 'static,
{
    let value = ErasedValue::new(value);
    let message = message.into();
    Reader::new(move |context: Context| {
        failure_at(value.clone(), context, message.clone(), None)
    })
}

/// Like [`failure_with_message`], but waits for the error that caused the
/// failure and keeps it as the cause.
pub fn failure_with_error<A, V, E>(
    value: V,
    message: impl Into<String>,
) -> impl Fn(E) -> Reader<Context, Validation<A>>
where
    A: 'static,
    V: fmt::Debug + Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    let value = ErasedValue::new(value);
    let message = message.into();
    move |cause: E| {
        let value = value.clone();
        let message = message.clone();
        let cause: SharedError = Arc::new(cause);
        Reader::new(move |context: Context| {
            failure_at(value.clone(), context, message.clone(), Some(Arc::clone(&cause)))
        })
    }
}

fn failure_at<A>(
    value: ErasedValue,
    context: Context,
    message: String,
    cause: Option<SharedError>,
) -> Validation<A> {
    log::failure_recorded(&context, &message);
    let error = ValidationError::new(value, context, message);
    Validation::failure(match cause {
        Some(cause) => error.with_shared_cause(cause),
        None => error,
    })
}
