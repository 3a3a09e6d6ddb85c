mod cpu_ref;
mod cpu_rustfft;

pub use cpu_ref::*;
pub use cpu_rustfft::*;
