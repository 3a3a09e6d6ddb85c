pub mod distributions;
pub mod source;

pub use distributions::Signal;
pub use source::{Source, new_seed};
