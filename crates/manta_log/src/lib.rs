//! Logging facade with timing helpers.

#[macro_use]
mod macros;

pub use log_::*;
