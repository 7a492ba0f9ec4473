//! Error-accumulating validation.
//!
//! [`Validation`] is the result of checking a value: `Success` with the
//! value, or `Failure` with every [`ValidationError`] found. Independent
//! checks combined applicatively report all their failures at once, which
//! is what a user filling in a form wants to see.
//!
//! - [`Validation`]: the result type, with `map`, `ap`, `chain`,
//!   `chain_left`, `alt` and the [`Functor`](crate::typeclass::Functor),
//!   [`Applicative`](crate::typeclass::Applicative) and
//!   [`Monad`](crate::typeclass::Monad) instances
//! - [`Errors`], [`ValidationError`], [`Context`]: the error model
//! - curried operators ([`map`], [`ap`], [`chain`], ...) for use with
//!   [`pipe!`](crate::pipe)
//! - [`applicative_monoid`], [`alternative_monoid`], [`alt_monoid`]: ways to
//!   combine validations as monoids
//!
//! Validators that read their input and the current [`Context`] live in
//! [`crate::validate`].
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Applicative;
//! use validus::validation::{Errors, Validation};
//!
//! fn non_empty(name: &str) -> Validation<String> {
//!     if name.is_empty() {
//!         Validation::failures(Errors::from_message("name must not be empty"))
//!     } else {
//!         Validation::success(name.to_string())
//!     }
//! }
//!
//! fn adult(age: u32) -> Validation<u32> {
//!     if age >= 18 {
//!         Validation::success(age)
//!     } else {
//!         Validation::failures(Errors::from_message("must be an adult"))
//!     }
//! }
//!
//! let result = non_empty("").map2(adult(12), |name, age| (name, age));
//! let messages = result.to_result().unwrap_err().errors.messages().len();
//! assert_eq!(messages, 2);
//! ```

mod error;
pub(crate) mod log;
mod monoid;
mod operators;
mod types;

pub use error::{
    Context, ContextEntry, ErasedValue, Errors, SharedError, ValidationError, ValidationErrors,
    errors_monoid, make_validation_errors,
};
pub use monoid::{
    AltMonoid, AlternativeMonoid, ApplicativeMonoid, alt_monoid, alternative_monoid,
    applicative_monoid,
};
pub use operators::{
    alt, ap, chain, chain_left, map, monad_alt, monad_ap, monad_chain, monad_chain_left,
    monad_map, of, or_else, sequence, traverse,
};
pub use types::Validation;
