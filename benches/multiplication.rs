use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordpoly::multiplication;
use wordpoly::{ModularRing, Poly, Ring};

const MODULUS: i64 = 1_000_003;

fn create_test_coefficients(ring: &ModularRing, degree: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..=degree)
        .map(|_| ring.value_of(rng.random_range(0..MODULUS)))
        .collect()
}

fn benchmark_multiplication_paths(c: &mut Criterion) {
    let ring = ModularRing::new(MODULUS).unwrap();
    let mut group = c.benchmark_group("multiplication_paths");

    for degree in [16, 64, 256, 1024] {
        let a = create_test_coefficients(&ring, degree, 1);
        let b = create_test_coefficients(&ring, degree, 2);

        group.bench_with_input(BenchmarkId::new("classical_safe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::multiply_classical_safe(&ring, &a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("karatsuba_safe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::multiply_karatsuba_safe(&ring, &a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("classical_unsafe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::multiply_classical_unsafe(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("karatsuba_unsafe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::multiply_karatsuba_unsafe(&a, &b)))
        });
    }

    group.finish();
}

fn benchmark_square(c: &mut Criterion) {
    let ring = ModularRing::new(MODULUS).unwrap();
    let mut group = c.benchmark_group("square");

    for degree in [64, 1024] {
        let a = create_test_coefficients(&ring, degree, 3);

        group.bench_with_input(BenchmarkId::new("square_safe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::square_safe(&ring, &a)))
        });
        group.bench_with_input(BenchmarkId::new("multiply_safe", degree), &degree, |bench, _| {
            bench.iter(|| black_box(multiplication::multiply_safe(&ring, &a, &a)))
        });
    }

    group.finish();
}

fn benchmark_dispatched_polynomial_product(c: &mut Criterion) {
    let ring = ModularRing::new(MODULUS).unwrap();
    let mut group = c.benchmark_group("poly_multiply");

    for degree in [100, 500, 2000] {
        let a = Poly::from_slice(ring, &create_test_coefficients(&ring, degree, 4));
        let b = Poly::from_slice(ring, &create_test_coefficients(&ring, degree, 5));

        group.bench_function(&format!("degree_{}", degree), |bench| {
            bench.iter(|| {
                let mut product = a.clone();
                product.multiply(&b).unwrap();
                black_box(product)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiplication_paths,
    benchmark_square,
    benchmark_dispatched_polynomial_product
);
criterion_main!(benches);
