use std::hint::black_box;

use cache::{Complex64, Direction, Transformer};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sampling::{Signal, Source};

fn signal(n: usize) -> Vec<f64> {
    Source::new([7u8; 32]).signal(&Signal::Uniform { min: -1.0, max: 1.0 }, n)
}

pub fn bench_real_forward(c: &mut Criterion) {
    let group_name: String = "session_real_forward".to_string();

    let mut group = c.benchmark_group(group_name);

    fn cached(n: usize) -> impl FnMut() {
        let values: Vec<f64> = signal(n);
        let mut fft: Transformer = Transformer::new();
        move || {
            let spectrum: Vec<Complex64> = fft.real_forward(&values).unwrap();
            black_box(spectrum);
        }
    }

    fn fresh(n: usize) -> impl FnMut() {
        let values: Vec<f64> = signal(n);
        move || {
            let mut fft: Transformer = Transformer::new();
            let spectrum: Vec<Complex64> = fft.real_forward(&values).unwrap();
            black_box(spectrum);
        }
    }

    for n in [1000, 4096, 44100] {
        let id: BenchmarkId = BenchmarkId::new("cached", n);
        let mut runner = cached(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));

        let id: BenchmarkId = BenchmarkId::new("fresh", n);
        let mut runner = fresh(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_complex_round_trip(c: &mut Criterion) {
    let group_name: String = "session_complex_round_trip".to_string();

    let mut group = c.benchmark_group(group_name);

    fn runner(n: usize) -> impl FnMut() {
        let values: Vec<f64> = signal(2 * n);
        let mut fft: Transformer = Transformer::new();
        move || {
            let spectrum: Vec<f64> = fft.complex_transform(&values, Direction::Forward).unwrap();
            let back: Vec<f64> = fft.complex_transform(&spectrum, Direction::Inverse).unwrap();
            black_box(back);
        }
    }

    for log_n in [8, 10, 12] {
        let id: BenchmarkId = BenchmarkId::from_parameter(1 << log_n);
        let mut runner = runner(1 << log_n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

criterion_group!(benches, bench_real_forward, bench_complex_round_trip,);

criterion_main!(benches);
