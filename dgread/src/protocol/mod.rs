// dgread/src/protocol/mod.rs

pub mod com;
pub mod commands;
pub mod datagroup;
pub mod identity;
pub mod mrz;
pub mod parser;
pub mod tlv;

pub use com::{DgComEntry, DgComReport};
pub use commands::Command;
pub use datagroup::{
    DataGroupPayload, FacialImage, ImageFormat, decode, parse_dg1, parse_dg2_image, parse_dg13,
};
pub use identity::{IdentityFields, parse_identity_fields};
pub use tlv::{Tlv, TlvHeader, TlvReader, extract_value};
