// dgread/src/prelude.rs

pub use crate::protocol::{
    Command, DataGroupPayload, DgComReport, FacialImage, ImageFormat, extract_value,
};
pub use crate::reader::{Connected, Disconnected, Reader, ReaderBuilder, ReaderConfig};
pub use crate::state::{DocumentKeys, StateReader, StateWriter};
pub use crate::transport::{Reply, Transport};
pub use crate::{ApduKind, CardType, DataGroup, Error, ResponseBuffer, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_truncated, hex_to_bytes, trim_all};
