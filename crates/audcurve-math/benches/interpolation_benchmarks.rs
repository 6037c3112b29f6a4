//! Benchmarks for the audcurve-math interpolators.
//!
//! Run with: cargo bench -p audcurve-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use audcurve_math::{CubicSpline, Interpolator, LinearInterpolator};

fn standard_knots() -> (Vec<f64>, Vec<f64>) {
    (
        vec![0.0, 1.0, 3.0, 6.0, 24.0, 36.0, 60.0, 120.0],
        vec![4.35, 4.04, 4.00, 3.90, 3.80, 3.85, 4.00, 4.40],
    )
}

fn bench_spline_fit(c: &mut Criterion) {
    let (xs, ys) = standard_knots();
    c.bench_function("cubic_spline_fit", |b| {
        b.iter(|| CubicSpline::new(black_box(xs.clone()), black_box(ys.clone())).unwrap())
    });
}

fn bench_monthly_evaluation(c: &mut Criterion) {
    let (xs, ys) = standard_knots();
    let spline = CubicSpline::new(xs.clone(), ys.clone())
        .unwrap()
        .with_extrapolation();
    let linear = LinearInterpolator::new(xs, ys)
        .unwrap()
        .with_flat_extrapolation();

    let mut group = c.benchmark_group("monthly_evaluation");
    group.bench_function("spline_96", |b| {
        b.iter(|| {
            (1..=96)
                .map(|m| spline.interpolate(black_box(f64::from(m))).unwrap())
                .sum::<f64>()
        })
    });
    group.bench_function("linear_96", |b| {
        b.iter(|| {
            (1..=96)
                .map(|m| linear.interpolate(black_box(f64::from(m))).unwrap())
                .sum::<f64>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_spline_fit, bench_monthly_evaluation);
criterion_main!(benches);
