use std::sync::Arc;

use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};

use crate::{Backend, BackendError, BackendResult, Complex64, Direction, Entry, PlanFamily};

/// Engine backed by `rustfft` (complex family) and `realfft` (real family).
///
/// Every build uses a fresh planner, so the only cache in play is the one held
/// by the caller's session.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustFft;

pub enum RustFftHandle {
    Complex(Arc<dyn Fft<f64>>),
    RealForward(Arc<dyn RealToComplex<f64>>),
    RealInverse(Arc<dyn ComplexToReal<f64>>),
}

impl RustFftHandle {
    pub fn len(&self) -> usize {
        match self {
            RustFftHandle::Complex(fft) => fft.len(),
            RustFftHandle::RealForward(r2c) => r2c.len(),
            RustFftHandle::RealInverse(c2r) => c2r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn mismatch(requested: Entry) -> BackendError {
    BackendError::HandleMismatch {
        engine: RustFft::name(),
        requested,
    }
}

impl Backend for RustFft {
    type Handle = RustFftHandle;

    fn name() -> &'static str {
        "rustfft"
    }

    fn build(&self, n: usize, direction: Direction, family: PlanFamily) -> BackendResult<Self::Handle> {
        if n == 0 {
            return Err(BackendError::ZeroLength);
        }
        let handle: RustFftHandle = match (family, direction) {
            (PlanFamily::Complex, Direction::Forward) => RustFftHandle::Complex(FftPlanner::new().plan_fft_forward(n)),
            (PlanFamily::Complex, Direction::Inverse) => RustFftHandle::Complex(FftPlanner::new().plan_fft_inverse(n)),
            (PlanFamily::Real, Direction::Forward) => {
                RustFftHandle::RealForward(RealFftPlanner::<f64>::new().plan_fft_forward(n))
            }
            (PlanFamily::Real, Direction::Inverse) => {
                RustFftHandle::RealInverse(RealFftPlanner::<f64>::new().plan_fft_inverse(n))
            }
        };
        Ok(handle)
    }

    fn complex(handle: &Self::Handle, data: &mut [Complex64]) -> BackendResult<()> {
        let RustFftHandle::Complex(fft) = handle else {
            return Err(mismatch(Entry::Complex));
        };
        if data.len() != fft.len() {
            return Err(BackendError::BufferLength {
                expected: fft.len(),
                actual: data.len(),
            });
        }
        fft.process(data);
        Ok(())
    }

    fn real_forward(handle: &Self::Handle, input: &mut [f64], output: &mut [Complex64]) -> BackendResult<()> {
        let RustFftHandle::RealForward(r2c) = handle else {
            return Err(mismatch(Entry::RealForward));
        };
        r2c.process(input, output)?;
        Ok(())
    }

    fn real_inverse(handle: &Self::Handle, input: &mut [Complex64], output: &mut [f64]) -> BackendResult<()> {
        let RustFftHandle::RealInverse(c2r) = handle else {
            return Err(mismatch(Entry::RealInverse));
        };
        // realfft flags a non-zero imaginary part on these bins; drop it up front.
        let n: usize = c2r.len();
        if let Some(dc) = input.first_mut() {
            dc.im = 0.0;
        }
        if n.is_multiple_of(2)
            && let Some(nyquist) = input.get_mut(n / 2)
        {
            nyquist.im = 0.0;
        }
        c2r.process(input, output)?;
        Ok(())
    }
}
