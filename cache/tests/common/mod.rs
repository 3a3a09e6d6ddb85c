#![allow(dead_code)]

use cache::{Complex64, Counting, RustFft};
use sampling::{Signal, Source};

pub type CountingFft = Counting<RustFft>;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn real_signal(seed: u8, n: usize) -> Vec<f64> {
    Source::new([seed; 32]).signal(&Signal::Uniform { min: -1.0, max: 1.0 }, n)
}

pub fn complex_signal(seed: u8, n: usize) -> Vec<Complex64> {
    real_signal(seed, 2 * n)
        .chunks_exact(2)
        .map(|c| Complex64::new(c[0], c[1]))
        .collect()
}

pub fn assert_close_real(have: &[f64], want: &[f64], tol: f64) {
    assert_eq!(have.len(), want.len());
    have.iter()
        .zip(want)
        .for_each(|(x, y)| assert!((x - y).abs() < tol, "{x} != {y}"));
}

pub fn assert_close_complex(have: &[Complex64], want: &[Complex64], tol: f64) {
    assert_eq!(have.len(), want.len());
    have.iter()
        .zip(want)
        .for_each(|(x, y)| assert!((x - y).norm() < tol, "{x} != {y}"));
}
