//! Benchmarks for the PID controller crate.

use criterion::{Criterion, criterion_group, criterion_main};
use opencontrol_pid::{PidConfig, PidController};
use std::hint::black_box;

fn bench_p_output(c: &mut Criterion) {
    let config = PidConfig::builder()
        .setpoint(100.0)
        .bias(2.0)
        .kc(0.5)
        .build()
        .expect("valid config");
    let mut pid = PidController::new(config).expect("valid controller");

    c.bench_function("pid_p_output", |b| {
        b.iter(|| {
            black_box(pid.output(black_box(97.3)).expect("finite reading"));
        });
    });
}

fn bench_full_pid_output(c: &mut Criterion) {
    let config = PidConfig::builder()
        .setpoint(100.0)
        .bias(2.0)
        .kc(0.5)
        .ki(0.1)
        .kd(0.05)
        .dt(0.001)
        .sum_bounds(-500.0, 500.0)
        .build()
        .expect("valid config");
    let mut pid = PidController::new(config).expect("valid controller");

    c.bench_function("pid_full_output", |b| {
        b.iter(|| {
            black_box(pid.output(black_box(97.3)).expect("finite reading"));
        });
    });
}

fn bench_config_build(c: &mut Criterion) {
    c.bench_function("pid_config_build", |b| {
        b.iter(|| {
            black_box(
                PidConfig::builder()
                    .setpoint(black_box(100.0))
                    .kc(0.5)
                    .ki(0.1)
                    .dt(0.001)
                    .sum_bounds(-500.0, 500.0)
                    .build()
                    .expect("valid config"),
            );
        });
    });
}

criterion_group!(benches, bench_p_output, bench_full_pid_output, bench_config_build);
criterion_main!(benches);
