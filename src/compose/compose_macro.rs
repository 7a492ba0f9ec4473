//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`. The rightmost
/// function runs first, as in mathematical notation.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// These are the laws the functor law for [`Validation::map`] is stated
/// against: mapping a composition equals composing the maps.
///
/// [`Validation::map`]: crate::validation::Validation::map
///
/// # Examples
///
/// ```
/// use validus::compose;
///
/// let trim = |raw: &str| raw.trim().to_string();
/// let shout = |text: String| text.to_uppercase();
///
/// let normalize = compose!(shout, trim);
/// assert_eq!(normalize("  ok "), "OK");
/// ```
///
/// ```
/// use validus::compose;
/// use validus::validation::Validation;
///
/// let increment = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// let composed = Validation::success(5).map(compose!(double, increment));
/// let chained = Validation::success(5).map(increment).map(double);
/// assert_eq!(composed, chained);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
