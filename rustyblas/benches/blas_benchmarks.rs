use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rustyblas::{level1, level2, level3, norm, Diag, Transpose, Uplo};

fn bench_ddot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::ddot(n, &x, 1, &y, 1));
        });
    }
    group.finish();
}

fn bench_ddot_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot_inc_-2");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..2 * n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..2 * n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::ddot(n, &x, -2, &y, -2));
        });
    }
    group.finish();
}

fn bench_daxpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("daxpy");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let mut y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                y.fill(0.0);
                level1::daxpy(n, 2.0, &x, 1, &mut y, 1);
            });
        });
    }
    group.finish();
}

fn bench_dnrm2(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnrm2");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| norm::dnrm2(n, &x, 1));
        });
    }
    group.finish();
}

fn bench_dtrsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtrsv");
    for &n in &[32, 128, 512] {
        // diagonally dominant upper triangle
        let a: Vec<f64> = (0..n * n)
            .map(|idx| if idx % (n + 1) == 0 { n as f64 } else { 0.5 })
            .collect();
        let x0: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let mut x = x0.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                x.copy_from_slice(&x0);
                level2::dtrsv(
                    Uplo::Upper,
                    Transpose::NoTrans,
                    Diag::NonUnit,
                    n,
                    &a,
                    n,
                    &mut x,
                    1,
                );
            });
        });
    }
    group.finish();
}

fn bench_dgemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemm");
    for &n in &[32, 64, 128, 256] {
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.001).sin()).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.002).cos()).collect();
        let mut c_mat = vec![0.0f64; n * n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                level3::dgemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &b,
                    n,
                    0.0,
                    &mut c_mat,
                    n,
                );
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ddot,
    bench_ddot_strided,
    bench_daxpy,
    bench_dnrm2,
    bench_dtrsv,
    bench_dgemm
);
criterion_main!(benches);
