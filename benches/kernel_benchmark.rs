use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use pairwise_kernels::{
    euclidean_distance, linear_kernel, polynomial_kernel, rbf_kernel, sigmoid_kernel,
};

const N_SAMPLES: usize = 200;
const N_FEATURES: usize = 32;

fn feature_matrix(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| ((i * 31 + j * 17) % 97) as f64 / 97.0)
}

fn bench_pairwise(c: &mut Criterion) {
    let x = feature_matrix(N_SAMPLES, N_FEATURES);
    let mut group = c.benchmark_group("pairwise_200x32");

    group.bench_function("euclidean_distance", |b| {
        b.iter(|| euclidean_distance(black_box(x.view()), None).unwrap())
    });
    group.bench_function("rbf_kernel", |b| {
        b.iter(|| rbf_kernel(black_box(x.view()), None, None).unwrap())
    });
    group.bench_function("linear_kernel", |b| {
        b.iter(|| linear_kernel(black_box(x.view()), None).unwrap())
    });
    group.bench_function("polynomial_kernel", |b| {
        b.iter(|| polynomial_kernel(black_box(x.view()), None, 3, None, 1.0).unwrap())
    });
    group.bench_function("sigmoid_kernel", |b| {
        b.iter(|| sigmoid_kernel(black_box(x.view()), None, None, 1.0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_pairwise);
criterion_main!(benches);
