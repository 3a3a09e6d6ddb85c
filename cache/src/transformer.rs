use backend::{Backend, Complex64, Direction, RustFft};

use crate::{
    config::TransformConfig,
    error::TransformResult,
    ops::TransformOps,
    store::{self, SessionSlot},
};

/// A caller-owned FFT session.
///
/// Plans are built lazily on first use and reused for every later call with
/// the same family, length and direction. All transforms take `&mut self`,
/// so one session is only ever driven by one caller at a time; wrap it in a
/// `Mutex` to share it between threads. Dropping the transformer releases
/// every plan it holds.
pub struct Transformer<B: Backend = RustFft> {
    backend: B,
    config: TransformConfig,
    session: SessionSlot<B>,
}

impl Transformer<RustFft> {
    pub fn new() -> Self {
        Self::with_backend(RustFft)
    }
}

impl Default for Transformer<RustFft> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Transformer<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            config: TransformConfig::default(),
            session: SessionSlot::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Interleaved `[re, im, ...]` buffer of `2n` values in, `2n` values out.
    pub fn complex_transform(&mut self, input: &[f64], direction: Direction) -> TransformResult<Vec<f64>> {
        TransformOps::new(&self.backend, &self.config).complex_interleaved(&mut self.session, input, direction)
    }

    pub fn complex_transform_boxed(&mut self, input: &[Complex64], direction: Direction) -> TransformResult<Vec<Complex64>> {
        TransformOps::new(&self.backend, &self.config).complex(&mut self.session, input, direction)
    }

    /// Complex transform of a real signal (imaginary parts taken as zero).
    pub fn complex_transform_real(&mut self, input: &[f64], direction: Direction) -> TransformResult<Vec<Complex64>> {
        TransformOps::new(&self.backend, &self.config).complex_from_real(&mut self.session, input, direction)
    }

    /// `n` real values to `n/2 + 1` bins.
    pub fn real_forward(&mut self, input: &[f64]) -> TransformResult<Vec<Complex64>> {
        TransformOps::new(&self.backend, &self.config).real_forward(&mut self.session, input)
    }

    /// `b` bins to `2b - 2` real values.
    pub fn real_inverse(&mut self, input: &[Complex64]) -> TransformResult<Vec<f64>> {
        TransformOps::new(&self.backend, &self.config).real_inverse(&mut self.session, input)
    }

    pub fn real_inverse_with_len(&mut self, input: &[Complex64], len: usize) -> TransformResult<Vec<f64>> {
        TransformOps::new(&self.backend, &self.config).real_inverse_with_len(&mut self.session, input, len)
    }

    /// Drops the session and all its plans. Returns whether a session existed.
    /// The next transform starts a fresh session.
    pub fn release_session(&mut self) -> bool {
        matches!(store::release(&mut self.session), Ok(true))
    }

    pub fn has_session(&self) -> bool {
        self.session.is_open()
    }

    pub fn plan_count(&self) -> usize {
        self.session.state().map_or(0, |state| state.plan_count())
    }

    pub fn session(&self) -> &SessionSlot<B> {
        &self.session
    }
}
