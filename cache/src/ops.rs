use std::ops::MulAssign;

use backend::{Backend, Complex64, Direction, Plan, PlanFamily, PlanKey};
use itertools::Itertools;
use tracing::warn;

use crate::{
    config::{SpectrumPolicy, TransformConfig},
    error::{TransformError, TransformResult},
    session::SessionState,
    store::{SessionStore, fetch_or_create},
};

/// The transform operations, bound to an engine and a configuration.
///
/// Every operation validates its input before touching the store, so a
/// rejected call neither creates a session nor builds a plan. After
/// validation it fetches (or lazily creates) the session, obtains the plan
/// from the family's cache, runs the engine and applies normalization.
pub struct TransformOps<'a, B: Backend> {
    backend: &'a B,
    config: &'a TransformConfig,
}

impl<'a, B: Backend> TransformOps<'a, B> {
    pub fn new(backend: &'a B, config: &'a TransformConfig) -> Self {
        Self { backend, config }
    }

    /// Complex transform over an interleaved `[re, im, re, im, ...]` buffer of
    /// `2n` values. An odd trailing value is ignored.
    pub fn complex_interleaved<S>(&self, store: &mut S, input: &[f64], direction: Direction) -> TransformResult<Vec<f64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        let n: usize = input.len() / 2;
        if n < 1 {
            return Err(TransformError::TooShort { len: input.len() });
        }
        if !input.len().is_multiple_of(2) {
            warn!(len = input.len(), "odd interleaved buffer, ignoring the trailing value");
        }
        let input: &[f64] = &input[..2 * n];
        self.check_finite_real(input)?;

        let mut data: Vec<Complex64> = input
            .iter()
            .tuples()
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect();
        self.run_complex(store, &mut data, direction)?;
        Ok(data.iter().flat_map(|x| [x.re, x.im]).collect())
    }

    /// Complex transform of `n` complex values.
    pub fn complex<S>(&self, store: &mut S, input: &[Complex64], direction: Direction) -> TransformResult<Vec<Complex64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        if input.is_empty() {
            return Err(TransformError::TooShort { len: 0 });
        }
        self.check_finite_complex(input)?;
        let mut data: Vec<Complex64> = input.to_vec();
        self.run_complex(store, &mut data, direction)?;
        Ok(data)
    }

    /// Complex transform of `n` real values widened with a zero imaginary part.
    pub fn complex_from_real<S>(&self, store: &mut S, input: &[f64], direction: Direction) -> TransformResult<Vec<Complex64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        if input.is_empty() {
            return Err(TransformError::TooShort { len: 0 });
        }
        self.check_finite_real(input)?;
        let mut data: Vec<Complex64> = input.iter().map(|&re| Complex64::new(re, 0.0)).collect();
        self.run_complex(store, &mut data, direction)?;
        Ok(data)
    }

    /// `n` real values to `n/2 + 1` spectrum bins.
    pub fn real_forward<S>(&self, store: &mut S, input: &[f64]) -> TransformResult<Vec<Complex64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        let n: usize = input.len();
        if n < 1 {
            return Err(TransformError::TooShort { len: n });
        }
        self.check_finite_real(input)?;

        let state: &mut SessionState<B> = fetch_or_create(store)?;
        let plan: &Plan<B> = self.plan(state, PlanFamily::Real, n, Direction::Forward)?;
        let mut scratch: Vec<f64> = input.to_vec();
        let mut output: Vec<Complex64> = vec![Complex64::default(); n / 2 + 1];
        plan.real_forward(&mut scratch, &mut output)?;
        self.normalize(&mut output, n, Direction::Forward);
        Ok(output)
    }

    /// `b` bins of a conjugate-symmetric spectrum to `2b - 2` real values.
    ///
    /// A single bin leaves nothing to reconstruct and is rejected with
    /// [`TransformError::DegenerateSpectrum`].
    pub fn real_inverse<S>(&self, store: &mut S, input: &[Complex64]) -> TransformResult<Vec<f64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        let bins: usize = input.len();
        if bins < 1 {
            return Err(TransformError::TooShort { len: bins });
        }
        let n: usize = 2 * bins - 2;
        if n == 0 {
            return Err(TransformError::DegenerateSpectrum { bins });
        }
        self.run_real_inverse(store, input, n)
    }

    /// `len/2 + 1` bins to exactly `len` real values; unlike
    /// [`TransformOps::real_inverse`] this reaches odd lengths too.
    pub fn real_inverse_with_len<S>(&self, store: &mut S, input: &[Complex64], len: usize) -> TransformResult<Vec<f64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        if len < 1 || input.is_empty() {
            return Err(TransformError::TooShort { len: input.len() });
        }
        let expected: usize = len / 2 + 1;
        if input.len() != expected {
            return Err(TransformError::LengthMismatch {
                expected,
                actual: input.len(),
            });
        }
        self.run_real_inverse(store, input, len)
    }

    fn run_complex<S>(&self, store: &mut S, data: &mut [Complex64], direction: Direction) -> TransformResult<()>
    where
        S: SessionStore<B> + ?Sized,
    {
        let n: usize = data.len();
        let state: &mut SessionState<B> = fetch_or_create(store)?;
        let plan: &Plan<B> = self.plan(state, PlanFamily::Complex, n, direction)?;
        plan.complex(data)?;
        self.normalize(data, n, direction);
        Ok(())
    }

    fn run_real_inverse<S>(&self, store: &mut S, input: &[Complex64], n: usize) -> TransformResult<Vec<f64>>
    where
        S: SessionStore<B> + ?Sized,
    {
        self.check_finite_complex(input)?;
        if self.config.spectrum == SpectrumPolicy::Reject {
            let mut pure: Vec<usize> = vec![0];
            if n.is_multiple_of(2) {
                pure.push(n / 2);
            }
            if let Some(index) = pure.into_iter().find(|&k| input[k].im != 0.0) {
                return Err(TransformError::NonHermitian { index });
            }
        }

        let state: &mut SessionState<B> = fetch_or_create(store)?;
        let plan: &Plan<B> = self.plan(state, PlanFamily::Real, n, Direction::Inverse)?;
        let mut scratch: Vec<Complex64> = input.to_vec();
        let mut output: Vec<f64> = vec![0f64; n];
        plan.real_inverse(&mut scratch, &mut output)?;
        self.normalize(&mut output, n, Direction::Inverse);
        Ok(output)
    }

    fn plan<'s>(
        &self,
        state: &'s mut SessionState<B>,
        family: PlanFamily,
        n: usize,
        direction: Direction,
    ) -> TransformResult<&'s Plan<B>> {
        let backend: &B = self.backend;
        state.cache_mut(family).obtain(n, direction, |n, direction| {
            Plan::build(backend, PlanKey::new(family, n, direction)).map_err(TransformError::from)
        })
    }

    fn normalize<T: MulAssign<f64>>(&self, values: &mut [T], n: usize, direction: Direction) {
        if let Some(factor) = self.config.normalization.factor(n, direction.is_inverse()) {
            values.iter_mut().for_each(|x| *x *= factor);
        }
    }

    fn check_finite_real(&self, input: &[f64]) -> TransformResult<()> {
        if !self.config.check_finite {
            return Ok(());
        }
        match input.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(TransformError::NonFinite { index }),
            None => Ok(()),
        }
    }

    fn check_finite_complex(&self, input: &[Complex64]) -> TransformResult<()> {
        if !self.config.check_finite {
            return Ok(());
        }
        match input.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(TransformError::NonFinite { index }),
            None => Ok(()),
        }
    }
}
