//! # validus
//!
//! Error-accumulating validation with a do-notation builder and composable
//! optics.
//!
//! ## Overview
//!
//! - **Validation**: [`Validation`](validation::Validation) is either a
//!   success value or an ordered list of errors. Applicative combination
//!   keeps every error, monadic chaining stops at the first failure.
//! - **Validators**: [`Validate`](validate::Validate) runs against an input
//!   and a [`Context`](validation::Context) path, producing a validation.
//!   Validators combine through operators, monoids and a do-notation
//!   builder that fills a state record field by field.
//! - **Optics**: lenses, prisms and optionals for reading and rebuilding
//!   immutable structures, usable as field setters in the builder.
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid.
//! - **Function Composition**: `pipe!`, `compose!` and small combinators.
//! - **Effect**: the [`Reader`](effect::Reader) a validator returns.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `effect`: The Reader effect
//! - `validation`: `Validation` and `Validate`
//! - `optics`: Lens, Prism, Optional
//! - `serde`: `Serialize` for errors and contexts
//! - `tracing`: debug events when failures are recorded
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use validus::prelude::*;
//! use validus::validate;
//!
//! let positive = Validate::from_fn(|n: i32, context: Context| {
//!     if n > 0 {
//!         Validation::success(n)
//!     } else {
//!         Validation::failure(ValidationError::new(ErasedValue::new(n), context, "must be positive"))
//!     }
//! });
//!
//! let doubled = pipe!(positive, validate::map(|n: i32| n * 2));
//! assert_eq!(doubled.decode(21), Validation::success(42));
//! assert!(doubled.decode(-1).is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// Re-exports the core types and traits. Operators stay behind their module
/// path (`validation::map`, `validate::map`) since both modules use the same
/// names.
///
/// ```rust
/// use validus::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{constant, flip, identity};
    #[cfg(feature = "compose")]
    pub use crate::{compose, pipe};

    #[cfg(feature = "effect")]
    pub use crate::effect::Reader;

    #[cfg(feature = "validation")]
    pub use crate::validation::{
        Context, ContextEntry, ErasedValue, Errors, Validation, ValidationError, ValidationErrors,
    };

    #[cfg(feature = "validation")]
    pub use crate::validate::Validate;

    #[cfg(feature = "optics")]
    pub use crate::optics::{Lens, Optional, Prism, make_lens, make_optional, make_prism};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "validation")]
pub mod validate;

#[cfg(feature = "optics")]
pub mod optics;
