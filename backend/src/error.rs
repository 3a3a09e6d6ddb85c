use thiserror::Error;

use crate::{Entry, PlanKey};

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("transform length must be at least 1")]
    ZeroLength,

    #[error("plan {plan} cannot run a {requested} transform")]
    PlanMismatch { plan: PlanKey, requested: Entry },

    #[error("{engine} handle cannot run a {requested} transform")]
    HandleMismatch { engine: &'static str, requested: Entry },

    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    #[error("real transform failed: {0}")]
    Real(#[from] realfft::FftError),
}
