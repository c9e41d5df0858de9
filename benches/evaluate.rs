use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use damped_oscillator::{evaluate, DerivedMetrics, OscillatorParameters, Parameter, Session};

fn bench_evaluate_default(c: &mut Criterion) {
    let params = OscillatorParameters::default();

    c.bench_function("evaluate_default_2000", |b| {
        b.iter(|| evaluate(black_box(&params)).unwrap())
    });
}

fn bench_evaluate_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_samples");
    for samples in [500usize, 2000, 20_000] {
        let params = OscillatorParameters {
            samples,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(samples), &params, |b, p| {
            b.iter(|| evaluate(black_box(p)).unwrap())
        });
    }
    group.finish();
}

fn bench_session_update(c: &mut Criterion) {
    // One slider move: clamp, re-evaluate, derive metrics
    let mut session = Session::new(OscillatorParameters::default()).unwrap();
    let mut xi = 0.1;

    c.bench_function("session_set_xi_under", |b| {
        b.iter(|| {
            xi = if xi > 0.9 { 0.1 } else { xi + 0.01 };
            session.set(Parameter::XiUnder, black_box(xi)).unwrap();
            DerivedMetrics::new(session.parameters(), session.trajectory())
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate_default,
    bench_evaluate_resolution,
    bench_session_update
);
criterion_main!(benches);
