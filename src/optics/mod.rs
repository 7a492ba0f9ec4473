//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors: a [`Lens`] focuses on a field that is
//! always there, a [`Prism`] on one case of a sum type, and an [`Optional`]
//! on a value that may be missing. Every setter consumes the source and
//! returns an updated copy.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens  <: Optional   (lens_as_optional)
//! Prism <: Optional   (prism_as_optional)
//! Lens . Prism = Optional
//! ```
//!
//! Getters return the focus by value, so an optic may present a derived
//! view of its source. [`Lens::imap`], [`Optional::imap`] and
//! [`Optional::ichain`] use this to change the focus type.
//!
//! Structures shared behind [`Rc`](std::rc::Rc) are covered by the `_ref`
//! constructors in this module, which copy on write.
//!
//! # Example with Lens
//!
//! ```
//! use validus::optics::{Lens, make_lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address = make_lens(
//!     |person: &Person| person.address.clone(),
//!     |person: Person, address: Address| Person { address, ..person },
//! );
//! let street = make_lens(
//!     |address: &Address| address.street.clone(),
//!     |address: Address, street: String| Address { street, ..address },
//! );
//!
//! let person_street = address.compose(street);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use validus::optics::{Prism, make_prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle = make_prism(
//!     |shape: &Shape| match shape {
//!         Shape::Circle(radius) => Some(*radius),
//!         Shape::Rectangle(..) => None,
//!     },
//!     Shape::Circle,
//! );
//!
//! assert_eq!(circle.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.get_option(&Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle.reverse_get(2.0), Shape::Circle(2.0));
//! ```

mod lens;
mod optional;
mod prism;
mod reference;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IMappedLens;
pub use lens::Lens;
pub use lens::LensAsOptional;
pub use lens::compose_lens;
pub use lens::lens_as_optional;
pub use lens::make_lens;

pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::IChainedOptional;
pub use optional::IMappedOptional;
pub use optional::Optional;
pub use optional::compose;
pub use optional::from_predicate;
pub use optional::make_optional;

pub use prism::ComposedPrism;
pub use prism::ErrPrism;
pub use prism::FunctionPrism;
pub use prism::OkPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;
pub use prism::SomePrism;
pub use prism::err_prism;
pub use prism::make_prism;
pub use prism::ok_prism;
pub use prism::prism_as_optional;
pub use prism::some_prism;

pub use reference::RefLens;
pub use reference::RefOptional;
pub use reference::compose_ref;
pub use reference::from_predicate_ref;
pub use reference::make_lens_ref;
pub use reference::make_optional_ref;
