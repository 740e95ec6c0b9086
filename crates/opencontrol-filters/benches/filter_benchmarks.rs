//! Benchmarks for the filters crate.

use criterion::{Criterion, criterion_group, criterion_main};
use opencontrol_filters::RollingAverage;
use std::hint::black_box;

fn bench_rolling_update(c: &mut Criterion) {
    let mut avg = RollingAverage::new(16.0).expect("valid filter");

    c.bench_function("rolling_average_update", |b| {
        b.iter(|| {
            black_box(avg.update(black_box(0.73)));
        });
    });
}

fn bench_rolling_read(c: &mut Criterion) {
    let avg = RollingAverage::with_initial(16.0, 0.5).expect("valid filter");

    c.bench_function("rolling_average_read", |b| {
        b.iter(|| {
            black_box(avg.average());
        });
    });
}

criterion_group!(benches, bench_rolling_update, bench_rolling_read);
criterion_main!(benches);
