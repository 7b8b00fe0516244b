// dgread/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hex input: odd length or a character outside `[0-9A-Fa-f]`.
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(String),

    /// A caller-supplied length or value is out of range for the buffer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The TLV header is truncated or declares more bytes than are available.
    #[error("malformed tlv: {0}")]
    MalformedTlv(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-zero status returned by the reader driver.
    #[error("reader error: status={code}: {message}")]
    Reader { code: i32, message: String },

    #[error("reader not found")]
    DeviceNotFound,

    #[error("operation timed out")]
    Timeout,

    #[cfg(feature = "async")]
    #[error("reader worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
