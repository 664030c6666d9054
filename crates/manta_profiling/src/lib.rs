//! Benchmarking utilities.

pub mod benchmark;

#[doc(hidden)]
pub use pastey;
