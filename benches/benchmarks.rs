//! Benchmarks for gfpk finite field operations.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gfpk::{find_irreducible, is_irreducible, Field, FieldElement, Fp, Modulus, Poly};

const P: u64 = 998244353;

fn bench_fp_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fp Operations");

    let a = Fp::new(123456789, P);
    let b = Fp::new(987654321, P);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("inverse", |bencher| bencher.iter(|| black_box(a).inverse()));

    group.bench_function("pow_large", |bencher| {
        bencher.iter(|| black_box(a).pow(P - 1))
    });

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    for size in [16u64, 64, 256] {
        let p = Poly::new(P, (0..size).collect());
        let m = Poly::new(P, (0..size / 2).map(|i| i * 7 + 1).chain([1]).collect());

        group.bench_with_input(BenchmarkId::new("mul", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p) * black_box(p))
        });

        group.bench_with_input(BenchmarkId::new("div_rem", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p).div_rem(black_box(&m)))
        });

        group.bench_with_input(BenchmarkId::new("gcd", size), &p, |bencher, p| {
            bencher.iter(|| Poly::gcd(black_box(p), black_box(&m)))
        });

        group.bench_with_input(BenchmarkId::new("mod_inverse", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p).mod_inverse(black_box(&m)))
        });
    }

    let x = Fp::new(42, P);
    let p = Poly::new(P, (0..256).collect());
    group.bench_function("eval_256", |bencher| {
        bencher.iter(|| black_box(&p).eval(black_box(x)))
    });

    group.finish();
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement Operations");

    for (p, k) in [(2u64, 8usize), (3, 5), (P, 4)] {
        let modulus = Arc::new(Modulus::find(p, k).unwrap());
        let a = FieldElement::new(&[3, 1, 4, 1, 5, 9, 2, 6][..k], modulus.clone());
        let b = FieldElement::new(&[2, 7, 1, 8, 2, 8, 1, 8][..k], modulus);
        let label = format!("GF({}^{})", p, k);

        group.bench_function(BenchmarkId::new("mul", &label), |bencher| {
            bencher.iter(|| black_box(&a) * black_box(&b))
        });

        group.bench_function(BenchmarkId::new("inverse", &label), |bencher| {
            bencher.iter(|| black_box(&a).inverse())
        });

        group.bench_function(BenchmarkId::new("pow_1000", &label), |bencher| {
            bencher.iter(|| black_box(&a).pow(1000))
        });

        group.bench_function(BenchmarkId::new("trace", &label), |bencher| {
            bencher.iter(|| black_box(&a).trace())
        });
    }

    group.finish();
}

fn bench_irreducible(c: &mut Criterion) {
    let mut group = c.benchmark_group("Irreducibility");

    // x^8 + x^4 + x^3 + x + 1 over F_2
    let aes = Poly::new(2, vec![1, 1, 0, 1, 1, 0, 0, 0, 1]);
    group.bench_function("rabin_gf2_deg8", |bencher| {
        bencher.iter(|| is_irreducible(black_box(&aes), 2, 8))
    });

    for (p, k) in [(2u64, 16usize), (3, 6), (101, 3), (P, 2)] {
        group.bench_function(BenchmarkId::new("find", format!("{}^{}", p, k)), |bencher| {
            bencher.iter(|| find_irreducible(black_box(p), black_box(k)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_operations,
    bench_poly_operations,
    bench_field_element,
    bench_irreducible,
);
criterion_main!(benches);
