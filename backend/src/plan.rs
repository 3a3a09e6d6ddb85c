use std::mem::ManuallyDrop;

use crate::{BackendError, BackendResult, Complex64, Direction, Entry, PlanFamily, PlanKey};

/// A transform engine.
///
/// `build` allocates the coefficient table for one [`PlanKey`]; the three
/// execution entry points run a transform against a table; `release` frees it.
/// Engines never normalize: a forward followed by an inverse transform of
/// length n scales the data by n.
pub trait Backend: Sized + Send + Sync {
    type Handle: Send + Sync + 'static;

    fn name() -> &'static str;

    fn build(&self, n: usize, direction: Direction, family: PlanFamily) -> BackendResult<Self::Handle>;

    /// In-place complex transform over exactly n values.
    fn complex(handle: &Self::Handle, data: &mut [Complex64]) -> BackendResult<()>;

    /// n real values to n/2+1 bins. `input` may be used as scratch space.
    fn real_forward(handle: &Self::Handle, input: &mut [f64], output: &mut [Complex64]) -> BackendResult<()>;

    /// n/2+1 bins to n real values. The imaginary parts of the DC bin, and of the
    /// Nyquist bin when n is even, are ignored. `input` may be used as scratch space.
    fn real_inverse(handle: &Self::Handle, input: &mut [Complex64], output: &mut [f64]) -> BackendResult<()>;

    /// Frees a handle returned by [`Backend::build`]. Called exactly once per handle,
    /// from the destructor of the owning [`Plan`].
    fn release(handle: Self::Handle) {
        drop(handle)
    }
}

/// Exclusive owner of one engine handle.
///
/// A plan is never cloned or shared; dropping it releases the handle through
/// [`Backend::release`].
pub struct Plan<B: Backend> {
    handle: ManuallyDrop<B::Handle>,
    key: PlanKey,
}

impl<B: Backend> Plan<B> {
    pub fn build(backend: &B, key: PlanKey) -> BackendResult<Self> {
        if key.n == 0 {
            return Err(BackendError::ZeroLength);
        }
        let handle: B::Handle = backend.build(key.n, key.direction, key.family)?;
        Ok(Self {
            handle: ManuallyDrop::new(handle),
            key,
        })
    }

    #[inline]
    pub fn key(&self) -> PlanKey {
        self.key
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.key.n
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.key.direction
    }

    #[inline]
    pub fn family(&self) -> PlanFamily {
        self.key.family
    }

    pub fn handle(&self) -> &B::Handle {
        &self.handle
    }

    pub fn complex(&self, data: &mut [Complex64]) -> BackendResult<()> {
        self.check(Entry::Complex, data.len(), None)?;
        B::complex(&self.handle, data)
    }

    pub fn real_forward(&self, input: &mut [f64], output: &mut [Complex64]) -> BackendResult<()> {
        self.check(Entry::RealForward, input.len(), Some(output.len()))?;
        B::real_forward(&self.handle, input, output)
    }

    pub fn real_inverse(&self, input: &mut [Complex64], output: &mut [f64]) -> BackendResult<()> {
        self.check(Entry::RealInverse, input.len(), Some(output.len()))?;
        B::real_inverse(&self.handle, input, output)
    }

    fn check(&self, requested: Entry, input_len: usize, output_len: Option<usize>) -> BackendResult<()> {
        if self.key.entry() != requested {
            return Err(BackendError::PlanMismatch {
                plan: self.key,
                requested,
            });
        }
        if input_len != self.key.input_len() {
            return Err(BackendError::BufferLength {
                expected: self.key.input_len(),
                actual: input_len,
            });
        }
        if let Some(output_len) = output_len
            && output_len != self.key.output_len()
        {
            return Err(BackendError::BufferLength {
                expected: self.key.output_len(),
                actual: output_len,
            });
        }
        Ok(())
    }
}

impl<B: Backend> Drop for Plan<B> {
    fn drop(&mut self) {
        // SAFETY: the handle is taken once, here, and never touched again.
        let handle: B::Handle = unsafe { ManuallyDrop::take(&mut self.handle) };
        B::release(handle)
    }
}
