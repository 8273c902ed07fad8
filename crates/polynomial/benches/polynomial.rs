// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numutils_polynomial::Polynomial;

fn create_test_polynomials(degree: usize) -> (Polynomial, Polynomial) {
    let coeffs1: Vec<f64> = (0..=degree).map(|i| i as f64 + 1.0).collect();
    let coeffs2: Vec<f64> = (0..=degree).map(|i| (i as f64 + 1.0) * -0.5).collect();

    (
        Polynomial::new(coeffs1).unwrap(),
        Polynomial::new(coeffs2).unwrap(),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50, 200] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.multiply(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_rendering");

    for degree in [10, 50, 100] {
        let (poly, _) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly.to_string()))
        });
    }

    group.finish();
}

fn benchmark_canonicalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalization");

    for leading_zeros in [0, 10, 100] {
        let mut coeffs = vec![0.0; leading_zeros];
        coeffs.extend((0..50).map(|i| i as f64 + 1.0));

        group.bench_function(format!("leading_zeros_{}", leading_zeros), |b| {
            b.iter(|| black_box(Polynomial::new(coeffs.clone()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_rendering,
    benchmark_canonicalization
);
criterion_main!(benches);
