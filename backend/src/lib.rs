//! Transform engines and the owned plan handles they produce.
//!
//! A [`Backend`] turns a `(length, direction, family)` key into an opaque
//! coefficient table, runs transforms against it and finally releases it.
//! [`Plan`] is the owning wrapper: dropping it hands the handle back to
//! [`Backend::release`], exactly once.

mod counting;
mod error;
pub mod implementation;
mod layout;
mod plan;

#[cfg(test)]
mod tests;

pub use counting::*;
pub use error::*;
pub use implementation::{DftRef, DftTable, RustFft, RustFftHandle};
pub use layout::*;
pub use plan::*;

pub use rustfft::num_complex::Complex64;
