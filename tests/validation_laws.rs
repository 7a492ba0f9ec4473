//! Property-based tests for the laws of `Validation`.
//!
//! - **Functor**: `map(identity) == id`, `map(compose!(f, g)) == map(g).map(f)`
//! - **Applicative**: homomorphism and identity for `ap`
//! - **Monad**: left identity, right identity, associativity of `chain`
//! - **Accumulation**: `ap` on two failures keeps both error lists, in order
//! - **Monoids**: identity and associativity for the three strategies

use proptest::prelude::*;
use validus::compose;
use validus::compose::identity;
use validus::typeclass::{MonoidInstance, SemigroupInstance, monoid_of};
use validus::validation::{self, Errors, Validation, errors_monoid};

// =============================================================================
// Strategies
// =============================================================================

fn errors_strategy() -> impl Strategy<Value = Errors> {
    prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|messages| {
        messages
            .into_iter()
            .map(validus::validation::ValidationError::from_message)
            .collect()
    })
}

fn validation_strategy() -> impl Strategy<Value = Validation<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::success),
        errors_strategy().prop_map(Validation::failures),
    ]
}

fn text_validation_strategy() -> impl Strategy<Value = Validation<String>> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(Validation::success),
        errors_strategy().prop_map(Validation::failures),
    ]
}

fn half(n: i32) -> Validation<i32> {
    if n % 2 == 0 {
        Validation::success(n / 2)
    } else {
        Validation::failures(Errors::from_message("odd"))
    }
}

fn positive(n: i32) -> Validation<i32> {
    if n > 0 {
        Validation::success(n)
    } else {
        Validation::failures(Errors::from_message("not positive"))
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(validation in validation_strategy()) {
        prop_assert_eq!(validation.clone().map(identity), validation);
    }

    #[test]
    fn prop_functor_composition(validation in validation_strategy()) {
        let f = |n: i32| n.wrapping_mul(3);
        let g = |n: i32| n.wrapping_sub(7);
        let composed = validation.clone().map(compose!(f, g));
        let chained = validation.map(g).map(f);
        prop_assert_eq!(composed, chained);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_applicative_homomorphism(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let applied = validation::monad_ap(validation::of(f), validation::of(value));
        prop_assert_eq!(applied, validation::of(f(value)));
    }

    #[test]
    fn prop_applicative_identity(validation in validation_strategy()) {
        let applied = validation::ap(validation.clone())(validation::of(identity::<i32>));
        prop_assert_eq!(applied, validation);
    }

    #[test]
    fn prop_ap_accumulates_both_failures(
        function_errors in errors_strategy(),
        value_errors in errors_strategy(),
    ) {
        let function: Validation<fn(i32) -> i32> = Validation::failures(function_errors.clone());
        let value: Validation<i32> = Validation::failures(value_errors.clone());
        let result = function.ap(value);

        let expected = function_errors.combine_with(value_errors);
        prop_assert_eq!(result.errors().map(Errors::len), Some(expected.len()));
        prop_assert_eq!(result, Validation::failures(expected));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(validation::of(value).chain(half), half(value));
    }

    #[test]
    fn prop_monad_right_identity(validation in validation_strategy()) {
        prop_assert_eq!(validation.clone().chain(validation::of), validation);
    }

    #[test]
    fn prop_monad_associativity(validation in validation_strategy()) {
        let left = validation.clone().chain(half).chain(positive);
        let right = validation.chain(|n| half(n).chain(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_chain_left_equals_or_else(validation in validation_strategy(), recover in any::<bool>()) {
        let handler = move |errors: Errors| {
            if recover {
                Validation::success(i32::try_from(errors.len()).unwrap_or_default())
            } else {
                Validation::failures(Errors::from_message("handler failed"))
            }
        };
        prop_assert_eq!(
            validation::chain_left(handler)(validation.clone()),
            validation::or_else(handler)(validation)
        );
    }
}

// =============================================================================
// Monoid Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_errors_monoid_identity(errors in errors_strategy()) {
        let monoid = errors_monoid();
        prop_assert_eq!(monoid.concat(monoid.empty(), errors.clone()), errors.clone());
        prop_assert_eq!(monoid.concat(errors.clone(), monoid.empty()), errors);
    }

    #[test]
    fn prop_applicative_monoid_laws(
        first in text_validation_strategy(),
        second in text_validation_strategy(),
        third in text_validation_strategy(),
    ) {
        let monoid = validation::applicative_monoid(monoid_of::<String>());
        prop_assert_eq!(monoid.concat(monoid.empty(), first.clone()), first.clone());
        prop_assert_eq!(monoid.concat(first.clone(), monoid.empty()), first.clone());
        prop_assert_eq!(
            monoid.concat(monoid.concat(first.clone(), second.clone()), third.clone()),
            monoid.concat(first, monoid.concat(second, third))
        );
    }

    #[test]
    fn prop_alternative_monoid_associativity(
        first in text_validation_strategy(),
        second in text_validation_strategy(),
        third in text_validation_strategy(),
    ) {
        let monoid = validation::alternative_monoid(monoid_of::<String>());
        prop_assert_eq!(
            monoid.concat(monoid.concat(first.clone(), second.clone()), third.clone()),
            monoid.concat(first, monoid.concat(second, third))
        );
    }

    #[test]
    fn prop_alt_monoid_picks_first_success(
        first in text_validation_strategy(),
        second in text_validation_strategy(),
    ) {
        let monoid = validation::alt_monoid(|| Validation::<String>::failures(Errors::new()));
        let combined = monoid.concat(first.clone(), second.clone());
        match (first, second) {
            (Validation::Success(value), _) => prop_assert_eq!(combined, Validation::success(value)),
            (Validation::Failure(_), Validation::Success(value)) => {
                prop_assert_eq!(combined, Validation::success(value));
            }
            (Validation::Failure(left), Validation::Failure(right)) => {
                prop_assert_eq!(combined, Validation::failures(left.combine_with(right)));
            }
        }
    }
}

#[test]
fn applicative_monoid_concatenates_strings() {
    let monoid = validation::applicative_monoid(monoid_of::<String>());
    let letter = |text: &str| Validation::success(text.to_string());
    assert_eq!(
        monoid.concat(letter("a"), letter("b")),
        Validation::success("ab".to_string())
    );
    assert_eq!(
        monoid.concat_all([letter("a"), letter("b"), letter("c")]),
        Validation::success("abc".to_string())
    );
}

#[test]
fn alt_never_evaluates_second_after_success() {
    let result = validation::monad_alt(Validation::success(42), || -> Validation<i32> {
        panic!("second branch evaluated")
    });
    assert_eq!(result, Validation::success(42));
}
