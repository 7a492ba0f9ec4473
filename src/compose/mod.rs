//! Function composition utilities.
//!
//! - [`pipe!`](crate::pipe): apply functions to a value, left to right
//! - [`compose!`](crate::compose): build a function, right to left
//! - [`identity`], [`constant`], [`flip`]: small combinators
//!
//! ```
//! use validus::{compose, pipe};
//!
//! let trim = |raw: &str| raw.trim().to_string();
//! let length = |text: String| text.len();
//!
//! assert_eq!(pipe!(" abc ", trim, length), compose!(length, trim)(" abc "));
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;
