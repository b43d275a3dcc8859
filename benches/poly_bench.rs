//! Benchmarks for polynomial arithmetic and root finding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quartus::calculus::{derivative, evaluate};
use quartus::poly::{div_rem, from_roots, multiply, parse, Polynomial, Term};
use quartus::solve::roots;

/// Generates a dense polynomial with small integer coefficients.
fn sample_poly(degree: i32) -> Polynomial {
    (0..=degree)
        .map(|i| Term::new(f64::from(i % 100 - 50), i))
        .collect()
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [4, 16, 64, 256] {
        let p = sample_poly(size);
        let q = sample_poly(size);

        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |b, _| {
            b.iter(|| black_box(multiply(&p, &q)));
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div");

    for size in [8, 32, 128] {
        let p = sample_poly(size * 2);
        let q = parse("x^3 - 2x + 1");

        group.bench_with_input(BenchmarkId::new("div_rem", size), &size, |b, _| {
            b.iter(|| black_box(div_rem(&p, &q)));
        });
    }

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let text = "3x^2 + x^7 - 4 + 2x^2 - x + 5x^7 + 11x^3 - x^2";

    c.bench_function("parse_and_format", |b| {
        b.iter(|| black_box(parse(black_box(text)).to_string()));
    });
}

fn bench_calculus(c: &mut Criterion) {
    let p = sample_poly(64);

    c.bench_function("evaluate_64", |b| b.iter(|| black_box(evaluate(&p, black_box(0.75)))));
    c.bench_function("derivative_64", |b| b.iter(|| black_box(derivative(&p))));
}

fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");

    let quartic = parse("3x^4 + 6x^3 - 123x^2 - 126x + 1080");
    group.bench_function("quartic", |b| b.iter(|| black_box(roots(&quartic))));

    for degree in [5usize, 6, 7] {
        let expected: Vec<f64> = (1..=degree).map(|r| r as f64).collect();
        let p = from_roots(&expected);

        group.bench_with_input(BenchmarkId::new("newton", degree), &degree, |b, _| {
            b.iter(|| black_box(roots(&p)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_division,
    bench_normalization,
    bench_calculus,
    bench_roots,
);
criterion_main!(benches);
