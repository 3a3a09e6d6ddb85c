use assert_approx_eq::assert_approx_eq;
use itertools::Itertools;
use sampling::{Signal, Source};

use crate::{
    Backend, BackendError, Complex64, Counting, DftRef, Direction, Entry, Plan, PlanFamily, PlanKey, RustFft,
};

const LENGTHS: [usize; 9] = [1, 2, 3, 5, 8, 12, 17, 64, 100];

fn complex_signal(source: &mut Source, n: usize) -> Vec<Complex64> {
    let signal: Signal = Signal::Uniform { min: -1.0, max: 1.0 };
    source
        .interleaved(&signal, n)
        .into_iter()
        .tuples()
        .map(|(re, im)| Complex64::new(re, im))
        .collect()
}

fn assert_close(a: &[Complex64], b: &[Complex64]) {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).for_each(|(x, y)| {
        assert_approx_eq!(x.re, y.re, 1e-9);
        assert_approx_eq!(x.im, y.im, 1e-9);
    });
}

fn run_complex<B: Backend>(backend: &B, n: usize, direction: Direction, data: &[Complex64]) -> Vec<Complex64> {
    let plan: Plan<B> = Plan::build(backend, PlanKey::new(PlanFamily::Complex, n, direction)).unwrap();
    let mut buf: Vec<Complex64> = data.to_vec();
    plan.complex(&mut buf).unwrap();
    buf
}

fn run_real_forward<B: Backend>(backend: &B, data: &[f64]) -> Vec<Complex64> {
    let n: usize = data.len();
    let plan: Plan<B> = Plan::build(backend, PlanKey::new(PlanFamily::Real, n, Direction::Forward)).unwrap();
    let mut input: Vec<f64> = data.to_vec();
    let mut output: Vec<Complex64> = vec![Complex64::default(); n / 2 + 1];
    plan.real_forward(&mut input, &mut output).unwrap();
    output
}

fn run_real_inverse<B: Backend>(backend: &B, n: usize, bins: &[Complex64]) -> Vec<f64> {
    let plan: Plan<B> = Plan::build(backend, PlanKey::new(PlanFamily::Real, n, Direction::Inverse)).unwrap();
    let mut input: Vec<Complex64> = bins.to_vec();
    let mut output: Vec<f64> = vec![0f64; n];
    plan.real_inverse(&mut input, &mut output).unwrap();
    output
}

#[test]
fn rustfft_complex_matches_reference() {
    let mut source: Source = Source::new([3u8; 32]);
    for n in LENGTHS {
        let data: Vec<Complex64> = complex_signal(&mut source, n);
        for direction in [Direction::Forward, Direction::Inverse] {
            let want: Vec<Complex64> = run_complex(&DftRef, n, direction, &data);
            let have: Vec<Complex64> = run_complex(&RustFft, n, direction, &data);
            assert_close(&have, &want);
        }
    }
}

#[test]
fn rustfft_real_forward_matches_reference() {
    let mut source: Source = Source::new([4u8; 32]);
    let signal: Signal = Signal::Uniform { min: -1.0, max: 1.0 };
    for n in LENGTHS {
        let data: Vec<f64> = source.signal(&signal, n);
        let want: Vec<Complex64> = run_real_forward(&DftRef, &data);
        let have: Vec<Complex64> = run_real_forward(&RustFft, &data);
        assert_eq!(have.len(), n / 2 + 1);
        assert_close(&have, &want);
    }
}

#[test]
fn rustfft_real_inverse_matches_reference() {
    let mut source: Source = Source::new([5u8; 32]);
    for n in LENGTHS {
        let bins: Vec<Complex64> = complex_signal(&mut source, n / 2 + 1);
        let want: Vec<f64> = run_real_inverse(&DftRef, n, &bins);
        let have: Vec<f64> = run_real_inverse(&RustFft, n, &bins);
        assert_eq!(have.len(), n);
        have.iter().zip(&want).for_each(|(x, y)| assert_approx_eq!(x, y, 1e-9));
    }
}

#[test]
fn real_round_trip_scales_by_length() {
    let mut source: Source = Source::new([6u8; 32]);
    let signal: Signal = Signal::Uniform { min: -1.0, max: 1.0 };
    for n in LENGTHS {
        let data: Vec<f64> = source.signal(&signal, n);
        let bins: Vec<Complex64> = run_real_forward(&RustFft, &data);
        let back: Vec<f64> = run_real_inverse(&RustFft, n, &bins);
        back.iter()
            .zip(&data)
            .for_each(|(x, y)| assert_approx_eq!(x / n as f64, y, 1e-9));
    }
}

#[test]
fn tone_lands_on_its_bin() {
    let n: usize = 16;
    let data: Vec<f64> = Source::new([0u8; 32]).signal(
        &Signal::Tone {
            cycles: 3,
            amplitude: 1.0,
        },
        n,
    );
    let bins: Vec<Complex64> = run_real_forward(&RustFft, &data);
    bins.iter().enumerate().for_each(|(k, x)| {
        let want: f64 = if k == 3 { n as f64 / 2.0 } else { 0.0 };
        assert_approx_eq!(x.norm(), want, 1e-9);
    });
}

#[test]
fn zero_length_is_rejected() {
    let key: PlanKey = PlanKey::new(PlanFamily::Complex, 0, Direction::Forward);
    assert!(matches!(Plan::build(&RustFft, key), Err(BackendError::ZeroLength)));
    assert!(matches!(RustFft.build(0, Direction::Inverse, PlanFamily::Real), Err(BackendError::ZeroLength)));
    assert!(matches!(DftRef.build(0, Direction::Forward, PlanFamily::Real), Err(BackendError::ZeroLength)));
}

#[test]
fn plan_refuses_wrong_entry_point() {
    let plan: Plan<RustFft> = Plan::build(&RustFft, PlanKey::new(PlanFamily::Real, 8, Direction::Inverse)).unwrap();
    let mut data: Vec<Complex64> = vec![Complex64::default(); 8];
    match plan.complex(&mut data) {
        Err(BackendError::PlanMismatch { plan: key, requested }) => {
            assert_eq!(key, plan.key());
            assert_eq!(requested, Entry::Complex);
        }
        other => panic!("expected plan mismatch, got {other:?}"),
    }

    let mut input: Vec<f64> = vec![0f64; 8];
    let mut output: Vec<Complex64> = vec![Complex64::default(); 5];
    assert!(matches!(
        plan.real_forward(&mut input, &mut output),
        Err(BackendError::PlanMismatch {
            requested: Entry::RealForward,
            ..
        })
    ));
}

#[test]
fn engine_refuses_wrong_handle() {
    let handle = RustFft.build(4, Direction::Forward, PlanFamily::Complex).unwrap();
    let mut input: Vec<f64> = vec![0f64; 4];
    let mut output: Vec<Complex64> = vec![Complex64::default(); 3];
    assert!(matches!(
        RustFft::real_forward(&handle, &mut input, &mut output),
        Err(BackendError::HandleMismatch { engine: "rustfft", .. })
    ));
}

#[test]
fn plan_checks_buffer_lengths() {
    let plan: Plan<DftRef> = Plan::build(&DftRef, PlanKey::new(PlanFamily::Real, 6, Direction::Forward)).unwrap();
    let mut input: Vec<f64> = vec![0f64; 6];
    let mut output: Vec<Complex64> = vec![Complex64::default(); 6];
    assert!(matches!(
        plan.real_forward(&mut input, &mut output),
        Err(BackendError::BufferLength { expected: 4, actual: 6 })
    ));
}

#[test]
fn dropping_a_plan_releases_its_handle() {
    let backend: Counting<RustFft> = Counting::default();
    let counters = backend.counters();
    let forward: Plan<Counting<RustFft>> =
        Plan::build(&backend, PlanKey::new(PlanFamily::Complex, 32, Direction::Forward)).unwrap();
    let inverse: Plan<Counting<RustFft>> =
        Plan::build(&backend, PlanKey::new(PlanFamily::Complex, 32, Direction::Inverse)).unwrap();
    assert_eq!(counters.built(), 2);
    assert_eq!(counters.live(), 2);
    drop(forward);
    assert_eq!(counters.released(), 1);
    drop(inverse);
    assert_eq!(counters.released(), 2);
    assert_eq!(counters.live(), 0);
}

#[test]
fn failed_build_is_not_counted() {
    let backend: Counting<DftRef> = Counting::default();
    assert!(Plan::build(&backend, PlanKey::new(PlanFamily::Real, 0, Direction::Forward)).is_err());
    assert!(backend.build(0, Direction::Forward, PlanFamily::Real).is_err());
    assert_eq!(backend.counters().built(), 0);
}

#[test]
fn direction_flag_is_normalized() {
    assert_eq!(Direction::from_flag(0), Direction::Forward);
    assert_eq!(Direction::from_flag(1), Direction::Inverse);
    assert_eq!(Direction::from_flag(-7), Direction::Inverse);
    assert_eq!(Direction::from_flag(42).flag(), 1);
}

#[test]
fn plan_key_lengths_follow_family() {
    let forward: PlanKey = PlanKey::new(PlanFamily::Real, 5, Direction::Forward);
    assert_eq!((forward.input_len(), forward.output_len()), (5, 3));
    let inverse: PlanKey = PlanKey::new(PlanFamily::Real, 6, Direction::Inverse);
    assert_eq!((inverse.input_len(), inverse.output_len()), (4, 6));
    let complex: PlanKey = PlanKey::new(PlanFamily::Complex, 7, Direction::Inverse);
    assert_eq!((complex.input_len(), complex.output_len()), (7, 7));
    assert_eq!(inverse.to_string(), "real/inverse/6");
}

#[test]
fn rustfft_handle_reports_time_domain_length() {
    for family in [PlanFamily::Complex, PlanFamily::Real] {
        for direction in [Direction::Forward, Direction::Inverse] {
            let plan: Plan<RustFft> = Plan::build(&RustFft, PlanKey::new(family, 9, direction)).unwrap();
            assert_eq!(plan.handle().len(), 9);
            assert!(!plan.handle().is_empty());
        }
    }
}
