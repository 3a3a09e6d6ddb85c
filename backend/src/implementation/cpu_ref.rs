use std::f64::consts::PI;

use itertools::izip;

use crate::{Backend, BackendError, BackendResult, Complex64, Direction, Entry, PlanFamily};

/// Reference engine: direct O(n^2) evaluation of the DFT against a
/// precomputed table of roots of unity.
#[derive(Debug, Default, Clone, Copy)]
pub struct DftRef;

/// Coefficient table `omg[k] = exp(-+2*pi*i*k/n)` (negative exponent for forward).
pub struct DftTable {
    family: PlanFamily,
    direction: Direction,
    omg: Vec<Complex64>,
}

impl DftTable {
    pub fn new(n: usize, direction: Direction, family: PlanFamily) -> Self {
        let sign: f64 = match direction {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        };
        let step: f64 = sign * 2.0 * PI / n as f64;
        let omg: Vec<Complex64> = (0..n).map(|k| Complex64::from_polar(1.0, step * k as f64)).collect();
        Self {
            family,
            direction,
            omg,
        }
    }

    pub fn n(&self) -> usize {
        self.omg.len()
    }

    pub fn omg(&self) -> &[Complex64] {
        &self.omg
    }

    fn accepts(&self, requested: Entry) -> BackendResult<()> {
        let entry: Entry = match (self.family, self.direction) {
            (PlanFamily::Complex, _) => Entry::Complex,
            (PlanFamily::Real, Direction::Forward) => Entry::RealForward,
            (PlanFamily::Real, Direction::Inverse) => Entry::RealInverse,
        };
        if entry != requested {
            return Err(BackendError::HandleMismatch {
                engine: DftRef::name(),
                requested,
            });
        }
        Ok(())
    }
}

fn check_len(expected: usize, actual: usize) -> BackendResult<()> {
    if expected != actual {
        return Err(BackendError::BufferLength { expected, actual });
    }
    Ok(())
}

pub fn dft_ref(omg: &[Complex64], input: &[Complex64], output: &mut [Complex64]) {
    let n: usize = omg.len();
    debug_assert_eq!(input.len(), n);
    debug_assert_eq!(output.len(), n);
    output.iter_mut().enumerate().for_each(|(k, out)| {
        *out = input
            .iter()
            .enumerate()
            .map(|(t, x)| x * omg[(k * t) % n])
            .sum();
    });
}

impl Backend for DftRef {
    type Handle = DftTable;

    fn name() -> &'static str {
        "dft-ref"
    }

    fn build(&self, n: usize, direction: Direction, family: PlanFamily) -> BackendResult<Self::Handle> {
        if n == 0 {
            return Err(BackendError::ZeroLength);
        }
        Ok(DftTable::new(n, direction, family))
    }

    fn complex(table: &Self::Handle, data: &mut [Complex64]) -> BackendResult<()> {
        table.accepts(Entry::Complex)?;
        check_len(table.n(), data.len())?;
        let input: Vec<Complex64> = data.to_vec();
        dft_ref(table.omg(), &input, data);
        Ok(())
    }

    fn real_forward(table: &Self::Handle, input: &mut [f64], output: &mut [Complex64]) -> BackendResult<()> {
        table.accepts(Entry::RealForward)?;
        let n: usize = table.n();
        check_len(n, input.len())?;
        check_len(n / 2 + 1, output.len())?;
        let widened: Vec<Complex64> = input.iter().map(|&re| Complex64::new(re, 0.0)).collect();
        let mut full: Vec<Complex64> = vec![Complex64::default(); n];
        dft_ref(table.omg(), &widened, &mut full);
        output.copy_from_slice(&full[..n / 2 + 1]);
        Ok(())
    }

    fn real_inverse(table: &Self::Handle, input: &mut [Complex64], output: &mut [f64]) -> BackendResult<()> {
        table.accepts(Entry::RealInverse)?;
        let n: usize = table.n();
        let bins: usize = n / 2 + 1;
        check_len(bins, input.len())?;
        check_len(n, output.len())?;

        let mut spectrum: Vec<Complex64> = (0..n)
            .map(|k| if k < bins { input[k] } else { input[n - k].conj() })
            .collect();
        spectrum[0].im = 0.0;
        if n.is_multiple_of(2) {
            spectrum[n / 2].im = 0.0;
        }

        let mut signal: Vec<Complex64> = vec![Complex64::default(); n];
        dft_ref(table.omg(), &spectrum, &mut signal);
        izip!(output.iter_mut(), signal.iter()).for_each(|(out, x)| *out = x.re);
        Ok(())
    }
}
