//! Small, reusable helpers: hex rendering/parsing and delay conversion.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
