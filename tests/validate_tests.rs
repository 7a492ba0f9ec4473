//! Scenario tests for validators: context tracking, recovery, monoids and
//! the `Result` bridges.

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use rstest::rstest;
use validus::pipe;
use validus::typeclass::{MonoidInstance, SemigroupInstance, monoid_of};
use validus::validate::{self, Validate};
use validus::validation::{
    Context, ContextEntry, ErasedValue, Errors, SharedError, Validation, ValidationError,
    make_validation_errors,
};

// =============================================================================
// Fixtures
// =============================================================================

fn non_empty() -> Validate<String, String> {
    Validate::new(|text: String| {
        if text.is_empty() {
            validate::failure_with_message(text, "must not be empty")
        } else {
            validate::success(text)
        }
    })
}

fn port() -> Validate<String, u16> {
    validate::from_reader_result(|text: String| text.parse::<u16>())
}

fn failing<A: 'static>(message: &'static str) -> Validate<String, A> {
    Validate::failures(Errors::from_message(message))
}

fn messages<A>(validation: &Validation<A>) -> Vec<&str> {
    validation.errors().map(Errors::messages).unwrap_or_default()
}

// =============================================================================
// Construction and context
// =============================================================================

#[rstest]
fn failure_with_message_records_value_and_path() {
    let name = non_empty().at("name", "String").at("user", "User");
    let result = name.decode(String::new());

    let error = result.errors().and_then(Errors::first).cloned();
    let error = error.expect("an error");
    assert_eq!(error.message, "must not be empty");
    assert_eq!(error.context.path(), "user.name");
    assert_eq!(error.value.downcast_ref::<String>(), Some(&String::new()));
    assert_eq!(error.to_string(), "at user.name: must not be empty");
}

#[rstest]
fn at_records_the_input_as_actual_value() {
    let observed = Validate::from_fn(|_: i32, context: Context| Validation::success(context));
    let context = observed.at("count", "i32").decode(7).to_option().expect("success");

    let entry = context.last().expect("one entry");
    assert_eq!(entry.key, "count");
    assert_eq!(entry.type_name, "i32");
    assert_eq!(entry.actual, Some(ErasedValue::new(7)));
}

#[rstest]
fn local_rewrites_the_context() {
    let rooted = non_empty().local(|_| Context::empty().push(ContextEntry::new("root", "")));
    let result = rooted.run_with(
        String::new(),
        Context::empty().push(ContextEntry::new("ignored", "")),
    );
    assert_eq!(
        result.errors().and_then(Errors::first).map(|error| error.context.path()),
        Some("root".to_string())
    );
}

#[rstest]
fn failure_with_error_keeps_cause() {
    let parse_error = "x".parse::<i32>().expect_err("not a number");
    let reader = validate::failure_with_error::<i32, _, _>("x", "not a number")(parse_error);
    let result = reader.run(Context::empty().push(ContextEntry::new("age", "i32")));

    let error = result.errors().and_then(Errors::first).expect("an error");
    assert_eq!(error.to_string(), "at age: not a number");
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("invalid digit found in string".to_string())
    );
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
#[case("443", Some(443))]
#[case("70000", None)]
#[case("", None)]
fn from_reader_result_wraps_errors(#[case] input: &str, #[case] expected: Option<u16>) {
    let result = port().decode(input.to_string());
    assert_eq!(result.clone().to_option(), expected);
    if expected.is_none() {
        assert_eq!(messages(&result), vec![validate::UNABLE_TO_DECODE]);
        let error = result.errors().and_then(Errors::first).expect("an error");
        assert!(error.cause.is_some());
        assert_eq!(error.value.downcast_ref::<String>(), Some(&input.to_string()));
    }
}

#[rstest]
fn to_result_collapses_every_error() {
    let both = validate::applicative_monoid(monoid_of::<String>())
        .concat(failing("first"), failing("second"));
    let error = validate::to_result(both.decode(String::new())).expect_err("failure");

    assert_eq!(error.len(), 2);
    assert_eq!(
        error.to_string(),
        "validation failed with 2 errors: first; second"
    );
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("first".to_string())
    );
}

#[rstest]
fn make_validation_errors_prefers_explicit_cause() {
    let root: SharedError = std::sync::Arc::new(std::fmt::Error);
    let error = make_validation_errors(Errors::from_message("broken"), Some(root));
    assert_eq!(
        error.source().map(ToString::to_string),
        Some(std::fmt::Error.to_string())
    );
    assert_eq!(error.to_string(), "validation failed: broken");
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn chain_runs_on_the_same_input() {
    let checked_port = pipe!(
        non_empty(),
        validate::chain(|text: String| {
            let length = text.len();
            port().map(move |port| (port, length))
        }),
    );
    assert_eq!(
        checked_port.decode("8080".to_string()),
        Validation::success((8080, 4))
    );
    assert_eq!(
        messages(&checked_port.decode(String::new())),
        vec!["must not be empty"]
    );
}

#[rstest]
fn ap_accumulates_function_errors_first() {
    let function: Validate<String, fn(u16) -> u16> = failing("function error");
    let value: Validate<String, u16> = failing("value error");
    let result = validate::monad_ap(function, value).decode(String::new());
    assert_eq!(messages(&result), vec!["function error", "value error"]);
}

#[rstest]
fn chain_left_and_or_else_agree() {
    let handler = |errors: Errors| -> Validate<String, u16> {
        if errors.len() == 1 {
            failing("still broken")
        } else {
            Validate::success(0)
        }
    };
    for input in ["80", "eighty"] {
        let left = validate::monad_chain_left(port(), handler).decode(input.to_string());
        let right = pipe!(port(), validate::or_else(handler)).decode(input.to_string());
        assert_eq!(left, right);
    }
    let recovered = port().chain_left(handler).decode("x".to_string());
    assert_eq!(
        messages(&recovered),
        vec![validate::UNABLE_TO_DECODE, "still broken"]
    );
}

#[rstest]
fn alt_skips_second_after_success() {
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);
    let result = validate::monad_alt(Validate::<String, u16>::success(42), move || {
        flag.set(true);
        port()
    })
    .decode("1".to_string());

    assert_eq!(result, Validation::success(42));
    assert!(!called.get());
}

#[rstest]
fn alt_accumulates_when_both_fail() {
    let result = pipe!(
        failing::<u16>("primary"),
        validate::alt(|| failing("fallback")),
    )
    .decode(String::new());
    assert_eq!(messages(&result), vec!["primary", "fallback"]);
}

// =============================================================================
// Monoids
// =============================================================================

#[rstest]
fn applicative_monoid_concatenates_strings() {
    let monoid = validate::applicative_monoid(monoid_of::<String>());
    let letter = |text: &str| Validate::<(), String>::success(text.to_string());

    assert_eq!(
        monoid.concat(letter("a"), letter("b")).decode(()),
        Validation::success("ab".to_string())
    );
    let left = monoid.concat(monoid.concat(letter("a"), letter("b")), letter("c"));
    let right = monoid.concat(letter("a"), monoid.concat(letter("b"), letter("c")));
    assert_eq!(left.decode(()), Validation::success("abc".to_string()));
    assert_eq!(right.decode(()), Validation::success("abc".to_string()));
    assert_eq!(
        monoid.concat(monoid.empty(), letter("a")).decode(()),
        letter("a").decode(())
    );
}

#[rstest]
fn alternative_monoid_reports_only_double_failure() {
    let monoid = validate::alternative_monoid(monoid_of::<String>());
    let one_sided = monoid.concat(failing("left"), non_empty());
    assert_eq!(
        one_sided.decode("ok".to_string()),
        Validation::success("ok".to_string())
    );
    assert_eq!(
        messages(&one_sided.decode(String::new())),
        vec!["left", "must not be empty"]
    );
}

#[rstest]
fn alt_monoid_folds_to_first_success() {
    let monoid = validate::alt_monoid(|| failing::<u16>("no candidate"));
    let candidates = vec![failing("a"), port(), Validate::success(1)];
    let first = candidates
        .into_iter()
        .fold(monoid.empty(), |chosen, next| monoid.concat(chosen, next));

    assert_eq!(first.decode("9".to_string()), Validation::success(9));
    assert_eq!(first.decode("x".to_string()), Validation::success(1));
}

#[rstest]
fn validation_error_equality_ignores_cause_identity() {
    let first = ValidationError::from_message("same").with_cause(std::fmt::Error);
    let second = ValidationError::from_message("same").with_cause(std::fmt::Error);
    assert_eq!(first, second);
}
