//! Grid-search residual benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Observation scaling (100 to 5K observations)
//! - Grid scaling (sigma and amplitude axis lengths)
//! - Time series length
//! - Backends (sequential vs parallel)
//! - Displacement layouts (series-major vs time-major)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use residual_grid::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

struct Survey {
    x: Vec<f64>,
    y: Vec<f64>,
    t: Vec<f64>,
    d: Vec<f64>,
}

/// Scattered benchmarks around a subsiding point source, with Gaussian noise.
///
/// Displacements are stored series-major unless `time_major` is set.
fn generate_survey(points: usize, times: usize, seed: u64, time_major: bool) -> Survey {
    let mut rng = StdRng::seed_from_u64(seed);
    let position = Uniform::new(-50.0, 50.0).unwrap();
    let noise = Normal::new(0.0, 0.002).unwrap();

    let (sx, sy, sigma, amplitude) = (3.0, -7.0, 12.0, 0.015);
    let inv_two_sigma_sq = 0.5 / (sigma * sigma);

    let x: Vec<f64> = (0..points).map(|_| position.sample(&mut rng)).collect();
    let y: Vec<f64> = (0..points).map(|_| position.sample(&mut rng)).collect();
    let t: Vec<f64> = (1..=times).map(|k| k as f64 * 0.1).collect();

    let mut d = vec![0.0; points * times];
    for i in 0..points {
        let dist_sq = (x[i] - sx) * (x[i] - sx) + (y[i] - sy) * (y[i] - sy);
        let w = (-dist_sq * inv_two_sigma_sq).exp();
        for (k, &tk) in t.iter().enumerate() {
            let idx = if time_major { k * points + i } else { i * times + k };
            d[idx] = -amplitude * tk * w + noise.sample(&mut rng);
        }
    }
    Survey { x, y, t, d }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 1 {
        return vec![start];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + i as f64 * step).collect()
}

fn evaluator(sigmas: usize, amplitudes: usize, backend: Backend) -> GridEvaluator<f64> {
    GridSearch::new()
        .x_axis(linspace(-20.0, 20.0, 21))
        .y_axis(linspace(-20.0, 20.0, 21))
        .sigma_axis(linspace(4.0, 20.0, sigmas))
        .amplitude_axis(linspace(0.005, 0.03, amplitudes))
        .backend(backend)
        .build()
        .unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_observations(c: &mut Criterion) {
    let mut group = c.benchmark_group("observations");
    group.sample_size(20);

    for size in [100, 500, 1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));

        let survey = generate_survey(size, 10, 42, false);
        let search = evaluator(4, 4, Backend::Parallel);

        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, _| {
            b.iter(|| {
                search
                    .evaluate(
                        black_box(&survey.x),
                        black_box(&survey.y),
                        black_box(&survey.t),
                        black_box(&survey.d),
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_grid_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_size");
    group.sample_size(20);

    let survey = generate_survey(1_000, 10, 42, false);

    for steps in [2, 4, 8] {
        let search = evaluator(steps, steps, Backend::Parallel);
        group.throughput(Throughput::Elements((21 * 21 * steps * steps) as u64));

        group.bench_with_input(BenchmarkId::new("sigma_x_amplitude", steps), &steps, |b, _| {
            b.iter(|| {
                search
                    .evaluate(&survey.x, &survey.y, &survey.t, black_box(&survey.d))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series");
    group.sample_size(20);

    let search = evaluator(4, 4, Backend::Parallel);

    for times in [5, 20, 80] {
        let survey = generate_survey(1_000, times, 7, false);

        group.bench_with_input(BenchmarkId::new("samples", times), &times, |b, _| {
            b.iter(|| {
                search
                    .evaluate(&survey.x, &survey.y, &survey.t, black_box(&survey.d))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("backends");
    group.sample_size(20);

    let survey = generate_survey(2_000, 10, 42, false);

    for (name, backend) in [
        ("sequential", Backend::Sequential),
        ("parallel", Backend::Parallel),
    ] {
        let search = evaluator(4, 4, backend);
        group.bench_function(name, |b| {
            b.iter(|| {
                search
                    .evaluate(&survey.x, &survey.y, &survey.t, black_box(&survey.d))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");
    group.sample_size(20);

    for (name, layout, time_major) in [
        ("series_major", DisplacementLayout::SeriesMajor, false),
        ("time_major", DisplacementLayout::TimeMajor, true),
    ] {
        let survey = generate_survey(2_000, 20, 42, time_major);
        let search = GridSearch::new()
            .x_axis(linspace(-20.0, 20.0, 21))
            .y_axis(linspace(-20.0, 20.0, 21))
            .sigma_axis(linspace(4.0, 20.0, 4))
            .amplitude_axis(linspace(0.005, 0.03, 4))
            .displacement_layout(layout)
            .parallel()
            .build()
            .unwrap();

        group.bench_function(name, |b| {
            b.iter(|| {
                search
                    .evaluate(&survey.x, &survey.y, &survey.t, black_box(&survey.d))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_observations,
    bench_grid_size,
    bench_time_series,
    bench_backends,
    bench_layouts,
);
criterion_main!(benches);
