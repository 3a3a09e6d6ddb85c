use rand_distr::{Distribution, Normal, NormalError};

use crate::source::Source;

/// Shapes of synthetic test signals.
pub enum Signal {
    Uniform { min: f64, max: f64 },
    Normal(Normal<f64>),
    /// `amplitude * cos(2*pi*cycles*t/n)`, peaking on bin `cycles` of a length-n transform.
    Tone { cycles: usize, amplitude: f64 },
}

impl Signal {
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, NormalError> {
        Ok(Signal::Normal(Normal::new(mean, std_dev)?))
    }

    pub(crate) fn fill(&self, source: &mut Source, values: &mut [f64]) {
        let n: usize = values.len();
        match self {
            Signal::Uniform { min, max } => values.iter_mut().for_each(|x| *x = source.next_f64(*min, *max)),
            Signal::Normal(normal) => values.iter_mut().for_each(|x| *x = normal.sample(source)),
            Signal::Tone { cycles, amplitude } => {
                let step: f64 = 2.0 * std::f64::consts::PI * (*cycles as f64) / (n as f64);
                values
                    .iter_mut()
                    .enumerate()
                    .for_each(|(t, x)| *x = amplitude * (step * t as f64).cos());
            }
        }
    }
}
