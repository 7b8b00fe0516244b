// dgread/src/lib.rs

//! dgread
//!
//! Hex, BER-TLV and passport data-group decoding for contactless readers
//! that expose a vendor command set, plus a reader session driving them
//! through a [`transport::Transport`].
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod state;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
