use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huddle::cluster::{Hac, Kmeans, Linkage};
use rand::prelude::*;

fn synthetic(n: usize, d: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f64>()).collect())
        .collect()
}

fn bench_hac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hac");
    let data = synthetic(60, 2);

    for linkage in Linkage::ALL {
        group.bench_function(format!("{linkage}_n60_stop4"), |b| {
            b.iter(|| {
                Hac::new(4)
                    .with_linkage(linkage)
                    .fit(black_box(&data))
                    .unwrap();
            })
        });
    }

    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");
    let data = synthetic(1000, 8);

    group.bench_function("fit_n1000_d8_k10", |b| {
        b.iter(|| {
            Kmeans::new(10)
                .with_max_iter(20)
                .with_seed(42)
                .fit(black_box(&data))
                .unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_hac, bench_kmeans);
criterion_main!(benches);
