/// Scaling applied on top of the unscaled engine output. `n` is always the
/// time-domain length of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// Neither direction is scaled; a round trip multiplies by n.
    #[default]
    Unscaled,
    /// Inverse scaled by 1/n.
    Backward,
    /// Forward scaled by 1/n.
    Forward,
    /// Both directions scaled by 1/sqrt(n).
    Ortho,
}

impl Normalization {
    pub(crate) fn factor(&self, n: usize, inverse: bool) -> Option<f64> {
        match (self, inverse) {
            (Normalization::Unscaled, _) | (Normalization::Backward, false) | (Normalization::Forward, true) => None,
            (Normalization::Backward, true) | (Normalization::Forward, false) => Some(1.0 / n as f64),
            (Normalization::Ortho, _) => Some(1.0 / (n as f64).sqrt()),
        }
    }
}

/// What a real inverse transform does with a non-zero imaginary part on the
/// DC bin (and on the Nyquist bin for even lengths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpectrumPolicy {
    #[default]
    Discard,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformConfig {
    pub normalization: Normalization,
    pub spectrum: SpectrumPolicy,
    pub check_finite: bool,
}

impl TransformConfig {
    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_spectrum(mut self, spectrum: SpectrumPolicy) -> Self {
        self.spectrum = spectrum;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }
}
