use backend::BackendError;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

/// Failure of the Session Handle Adapter to resolve its storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no session field registered for host object {0}")]
    UnknownObject(u64),

    #[error("session store did not retain the state it was given")]
    NotRetained,
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("input buffer is absent")]
    MissingInput,

    #[error("transform needs at least one element, got an input of length {len}")]
    TooShort { len: usize },

    #[error("{bins} spectrum bin(s) leave no real samples to reconstruct")]
    DegenerateSpectrum { bins: usize },

    #[error("input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("bin {index} of a real spectrum must have a zero imaginary part")]
    NonHermitian { index: usize },

    #[error("non-finite input value at index {index}")]
    NonFinite { index: usize },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Coarse classification of a [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Absent buffer, too few elements, or values the transform cannot accept.
    InvalidInput,
    /// The session storage of the host binding could not be resolved.
    ResourceLookupFailure,
    /// The transform engine failed.
    Engine,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::MissingInput
            | TransformError::TooShort { .. }
            | TransformError::DegenerateSpectrum { .. }
            | TransformError::LengthMismatch { .. }
            | TransformError::NonHermitian { .. }
            | TransformError::NonFinite { .. } => ErrorKind::InvalidInput,
            TransformError::Lookup(_) => ErrorKind::ResourceLookupFailure,
            TransformError::Backend(_) => ErrorKind::Engine,
        }
    }
}
