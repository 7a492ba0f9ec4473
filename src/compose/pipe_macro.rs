//! The `pipe!` macro for left-to-right function application.
//!
//! The curried operators in [`validation`](crate::validation) and
//! [`validate`](crate::validate) return single-argument functions, so a chain
//! of them reads top to bottom inside `pipe!`.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`.
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use validus::pipe;
///
/// fn trim(raw: &str) -> String { raw.trim().to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// assert_eq!(pipe!("  abc ", trim, length), 3);
/// ```
///
/// With validation operators:
///
/// ```
/// use validus::pipe;
/// use validus::validation::{self, Validation};
///
/// let result = pipe!(
///     Validation::success(20),
///     validation::map(|n: i32| n + 1),
///     validation::chain(|n: i32| Validation::success(n * 2)),
/// );
/// assert_eq!(result, Validation::success(42));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
