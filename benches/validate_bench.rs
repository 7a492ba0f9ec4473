//! Benchmark for validation: accumulation, short-circuiting and builders.
//!
//! Compares applicative combination, which runs every branch, with monadic
//! chaining, which stops at the first failure.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use validus::pipe;
use validus::validate::{self, Validate};
use validus::validation::{self, Context, ErasedValue, Errors, Validation, ValidationError};

fn check(index: usize) -> impl Fn(i64) -> Validation<i64> {
    move |value: i64| {
        if value % 7 == 0 {
            Validation::failure(ValidationError::new(
                ErasedValue::new(value),
                Context::empty(),
                format!("check {index} rejected"),
            ))
        } else {
            Validation::success(value + 1)
        }
    }
}

// =============================================================================
// Validation Benchmarks
// =============================================================================

fn benchmark_accumulate_vs_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("accumulate_vs_chain");

    for count in [4_usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("traverse", count), &count, |bencher, &count| {
            bencher.iter(|| {
                let result = validation::traverse(0..count, |index| {
                    check(index)(black_box(i64::try_from(index).unwrap_or_default()))
                });
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("chain", count), &count, |bencher, &count| {
            bencher.iter(|| {
                let result = (0..count).fold(Validation::success(black_box(1_i64)), |acc, index| {
                    acc.chain(check(index))
                });
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_errors_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("errors_concat");

    group.bench_function("single_plus_single", |bencher| {
        bencher.iter(|| {
            let left = Errors::from_message(black_box("left"));
            let right = Errors::from_message(black_box("right"));
            black_box(left.combine_with(right))
        });
    });

    group.finish();
}

// =============================================================================
// Validate Benchmarks
// =============================================================================

#[derive(Clone, Default)]
struct Form {
    name: String,
    age: u32,
    port: u16,
}

fn form_validator() -> Validate<(String, String, String), Form> {
    let name = Validate::from_fn(|input: (String, String, String), _| {
        Validation::success(input.0)
    });
    let age = validate::from_reader_result(|input: (String, String, String)| input.1.parse::<u32>())
        .at("age", "u32");
    let port =
        validate::from_reader_result(|input: (String, String, String)| input.2.parse::<u16>())
            .at("port", "u16");

    pipe!(
        validate::do_(Form::default()),
        validate::ap_s(|form: Form, name| Form { name, ..form }, name),
        validate::ap_s(|form: Form, age| Form { age, ..form }, age),
        validate::ap_s(|form: Form, port| Form { port, ..form }, port),
    )
}

fn benchmark_do_notation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("do_notation");
    let validator = form_validator();

    group.bench_function("valid_form", |bencher| {
        bencher.iter(|| {
            let input = ("ada".to_string(), "36".to_string(), "8080".to_string());
            black_box(validator.decode(black_box(input)))
        });
    });

    group.bench_function("invalid_form", |bencher| {
        bencher.iter(|| {
            let input = ("ada".to_string(), "old".to_string(), "http".to_string());
            black_box(validator.decode(black_box(input)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_accumulate_vs_chain,
    benchmark_errors_concat,
    benchmark_do_notation
);
criterion_main!(benches);
