//! Effect types.
//!
//! - [`Reader`]: computations over a shared, read-only environment. The
//!   validation layer runs every validator as a `Reader` over its
//!   [`Context`](crate::validation::Context) path.

mod reader;

pub use reader::Reader;
