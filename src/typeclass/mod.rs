//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: mapping over a value in a context
//! - [`Applicative`]: combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`] / [`Monoid`]: one combining operation per type
//! - [`SemigroupInstance`] / [`MonoidInstance`]: combining operations passed
//!   as values, for types with more than one lawful choice
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses generic
//! associated types to let a trait refer to "the same container holding a
//! different type", which is what `fmap` and `flat_map` need.
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::{Applicative, Functor, Monad};
//!
//! let parsed: Result<i32, String> = "20".parse::<i32>().map_err(|e| e.to_string());
//! let doubled = parsed.fmap(|n| n * 2).flat_map(|n| Ok(n + 2));
//! assert_eq!(doubled, Ok(42));
//!
//! assert_eq!(Some(2).map2(Some(3), |a, b| a * b), Some(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod instance;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use instance::{FunctionMonoid, MonoidInstance, SemigroupInstance, TypeclassMonoid, monoid_of};
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Sum;
