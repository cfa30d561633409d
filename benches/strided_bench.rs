use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strided_num::{axpy, nrm2, sum, sum_kbn, VectorView, VectorViewMut};

fn make_buffer(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0xbec);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");
    for &n in &[1_000usize, 100_000] {
        let data = make_buffer(2 * n);
        for &stride in &[1isize, 2, -2] {
            let x = VectorView::with_stride(&data[..(n - 1) * stride.unsigned_abs() + 1], n, stride)
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new("sum", format!("n{n}_s{stride}")),
                &x,
                |b, x| b.iter(|| black_box(sum(x))),
            );
            group.bench_with_input(
                BenchmarkId::new("sum_kbn", format!("n{n}_s{stride}")),
                &x,
                |b, x| b.iter(|| black_box(sum_kbn(x))),
            );
            group.bench_with_input(
                BenchmarkId::new("nrm2", format!("n{n}_s{stride}")),
                &x,
                |b, x| b.iter(|| black_box(nrm2(x))),
            );
        }
    }
    group.finish();
}

fn bench_axpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("axpy");
    for &n in &[1_000usize, 100_000] {
        let xs = make_buffer(n);
        let mut ys = make_buffer(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let x = VectorView::from_slice(&xs);
                let mut y = VectorViewMut::from_slice(&mut ys);
                axpy(black_box(1.000001), &x, &mut y).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reductions, bench_axpy);
criterion_main!(benches);
