//! Small combinators used alongside [`pipe!`](crate::pipe) and
//! [`compose!`](crate::compose).

/// Returns the value unchanged.
///
/// The unit of [`compose!`](crate::compose), and the function the functor
/// identity law maps with.
///
/// ```
/// use validus::compose::identity;
/// use validus::validation::Validation;
///
/// assert_eq!(Validation::success(3).map(identity), Validation::success(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// ```
/// use validus::compose::constant;
///
/// let zeros: Vec<i32> = ["a", "b"].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// Handy for lens setters, which take the source first.
///
/// ```
/// use validus::compose::flip;
///
/// let prefix = |text: String, prefix: &str| format!("{prefix}{text}");
/// assert_eq!(flip(prefix)("> ", "quote".to_string()), "> quote");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kept")]
    #[case("")]
    fn identity_returns_input(#[case] input: &str) {
        assert_eq!(identity(input), input);
    }

    #[rstest]
    fn constant_ignores_input() {
        let always_seven = constant::<i32, &str>(7);
        assert_eq!(always_seven("x"), 7);
        assert_eq!(always_seven("y"), 7);
    }

    #[rstest]
    fn flip_twice_restores_order() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        assert_eq!(flip(subtract)(3, 10), 7);
        assert_eq!(flip(flip(subtract))(10, 3), 7);
    }
}
