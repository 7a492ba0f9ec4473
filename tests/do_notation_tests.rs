//! Field-by-field builds with `do_`, `bind`, `let_`, `ap_s` and their lens
//! variants.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use validus::optics::{Lens, make_lens};
use validus::pipe;
use validus::validate::{self, Validate};
use validus::validation::{Context, ContextEntry, Errors, Validation};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
struct State {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct User {
    name: String,
    age: u32,
    address: Address,
}

fn set_x(state: State, x: i32) -> State {
    State { x, ..state }
}

fn set_y(state: State, y: i32) -> State {
    State { y, ..state }
}

fn failing<A: 'static>(message: &'static str) -> Validate<(), A> {
    Validate::failures(Errors::from_message(message))
}

fn messages<A>(validation: &Validation<A>) -> Vec<&str> {
    validation.errors().map(Errors::messages).unwrap_or_default()
}

fn address_lens() -> impl Lens<User, Address> + Clone {
    make_lens(
        |user: &User| user.address.clone(),
        |user: User, address: Address| User { address, ..user },
    )
}

fn zip_lens() -> impl Lens<User, String> {
    address_lens().compose(make_lens(
        |address: &Address| address.zip.clone(),
        |address: Address, zip: String| Address { zip, ..address },
    ))
}

fn age_lens() -> impl Lens<User, u32> {
    make_lens(|user: &User| user.age, |user: User, age: u32| User { age, ..user })
}

// =============================================================================
// Bind
// =============================================================================

#[rstest]
fn bind_threads_earlier_fields_into_later_ones() {
    let build = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::bind(set_x, |_: &State| Validate::success(10)),
        validate::bind(set_y, |state: &State| Validate::success(state.x * 2)),
    );
    assert_eq!(build.decode(()), Validation::success(State { x: 10, y: 20 }));
}

#[rstest]
fn bind_reports_the_failing_step() {
    let build = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::bind(set_x, |_: &State| Validate::success(10)),
        validate::bind(set_y, |_: &State| failing("y failed")),
    );
    let result = build.decode(());
    assert_eq!(messages(&result), vec!["y failed"]);
    assert_eq!(
        result.errors().and_then(Errors::first).map(|error| error.context.path()),
        Some(String::new())
    );
}

#[rstest]
fn bind_stops_after_first_failure() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let build = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::bind(set_x, |_: &State| failing("x failed")),
        validate::bind(set_y, move |_: &State| {
            counter.set(counter.get() + 1);
            failing("y failed")
        }),
        validate::let_(set_x, |state: &State| state.x + 1),
    );
    assert_eq!(messages(&build.decode(())), vec!["x failed"]);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bind_factories_see_the_same_input_and_context() {
    let seen = Validate::from_fn(|input: i32, context: Context| {
        Validation::success(input + i32::try_from(context.len()).unwrap_or_default())
    });
    let build = pipe!(
        validate::do_::<i32, State>(State::default()),
        validate::bind(set_x, move |_: &State| seen.clone()),
    );
    let context = Context::empty().push(ContextEntry::new("point", "State"));
    assert_eq!(
        build.run_with(5, context),
        Validation::success(State { x: 6, y: 0 })
    );
}

// =============================================================================
// ApS
// =============================================================================

#[rstest]
fn ap_s_accumulates_state_and_field_errors() {
    let build = pipe!(
        failing::<State>("state error"),
        validate::ap_s(set_x, failing("value error")),
    );
    assert_eq!(
        messages(&build.decode(())),
        vec!["state error", "value error"]
    );
}

#[rstest]
fn ap_s_collects_every_independent_field() {
    let build = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::ap_s(set_x, failing("x missing")),
        validate::ap_s(set_y, failing("y missing")),
    );
    assert_eq!(messages(&build.decode(())), vec!["x missing", "y missing"]);

    let filled = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::ap_s(set_x, Validate::success(1)),
        validate::ap_s(set_y, Validate::success(2)),
    );
    assert_eq!(filled.decode(()), Validation::success(State { x: 1, y: 2 }));
}

#[rstest]
fn bind_after_failed_ap_s_does_not_accumulate() {
    let build = pipe!(
        validate::do_::<(), State>(State::default()),
        validate::ap_s(set_x, failing("x missing")),
        validate::bind(set_y, |_: &State| failing("y never checked")),
        validate::let_to(set_y, 3),
    );
    assert_eq!(messages(&build.decode(())), vec!["x missing"]);
}

#[rstest]
fn bind_to_starts_a_build_from_a_value() {
    let build = pipe!(
        Validate::<(), i32>::success(4),
        validate::bind_to(|x| State { x, y: 0 }),
        validate::let_(set_y, |state: &State| state.x + 1),
    );
    assert_eq!(build.decode(()), Validation::success(State { x: 4, y: 5 }));
}

// =============================================================================
// Lens variants
// =============================================================================

#[rstest]
fn lens_variants_update_nested_fields() {
    let build = pipe!(
        validate::do_::<(), User>(User::default()),
        validate::let_to_l(age_lens(), 30),
        validate::let_l(age_lens(), |age: u32| age + 1),
        validate::ap_s_l(zip_lens(), Validate::success("10115".to_string())),
        validate::bind_l(
            address_lens(),
            |address: Address| Validate::success(Address {
                city: "Berlin".to_string(),
                ..address
            }),
        ),
    );
    assert_eq!(
        build.decode(()),
        Validation::success(User {
            name: String::new(),
            age: 31,
            address: Address {
                city: "Berlin".to_string(),
                zip: "10115".to_string(),
            },
        })
    );
}

#[rstest]
fn ap_s_l_accumulates_like_ap_s() {
    let build = pipe!(
        failing::<User>("user invalid"),
        validate::ap_s_l(zip_lens(), failing("zip invalid")),
    );
    assert_eq!(
        messages(&build.decode(())),
        vec!["user invalid", "zip invalid"]
    );
}

#[rstest]
fn bind_l_receives_current_focus() {
    let build = pipe!(
        validate::do_::<(), User>(User {
            age: 17,
            ..User::default()
        }),
        validate::bind_l(age_lens(), |age: u32| {
            if age >= 18 {
                Validate::success(age)
            } else {
                failing("must be an adult")
            }
        }),
    );
    assert_eq!(messages(&build.decode(())), vec!["must be an adult"]);
}
