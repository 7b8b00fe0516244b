// dgread/src/reader/mod.rs

//! Reader session over a [`Transport`](crate::transport::Transport).

pub mod builder;
pub mod config;
pub mod handle;
#[cfg(feature = "async")]
pub mod worker;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Connected, Disconnected, Reader};
#[cfg(feature = "async")]
pub use worker::{DataGroupSource, ReaderWorker};
