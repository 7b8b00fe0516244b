// dgread/src/protocol/datagroup.rs

//! Per data-group interpretation of a TLV-wrapped reader response.
//!
//! Every function here is pure: the input buffer is only borrowed and the
//! same input always yields the same output.

use derive_more::Display;

use crate::constants::{JPEG2000_CODESTREAM, JPEG2000_SIGNATURE, JPEG_SOI};
use crate::protocol::tlv::extract_value;
use crate::types::DataGroup;
use crate::Result;

/// Encoding of a DG2 portrait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFormat {
    #[display(fmt = "JPEG")]
    Jpeg,
    #[display(fmt = "JPEG 2000")]
    Jpeg2000,
    #[display(fmt = "unknown")]
    Unknown,
}

/// Portrait bytes cut out of a DG2 value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacialImage {
    pub format: ImageFormat,
    /// Image stream from its start marker to the end of the value. Empty
    /// when no marker was found.
    pub data: Vec<u8>,
}

impl FacialImage {
    /// Locate the image inside a DG2 value. JPEG is tried first, then the
    /// two JPEG 2000 signatures, whichever starts earliest.
    pub fn from_dg2_value(value: &[u8]) -> Self {
        if let Some(start) = find_marker(value, &JPEG_SOI) {
            return Self {
                format: ImageFormat::Jpeg,
                data: value[start..].to_vec(),
            };
        }

        let jp2 = [
            find_marker(value, &JPEG2000_SIGNATURE),
            find_marker(value, &JPEG2000_CODESTREAM),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(start) = jp2 {
            return Self {
                format: ImageFormat::Jpeg2000,
                data: value[start..].to_vec(),
            };
        }

        log::warn!("no image start marker in {} byte DG2 value", value.len());
        Self {
            format: ImageFormat::Unknown,
            data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Interpreted content of one data group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataGroupPayload {
    /// DG1: MRZ text
    Mrz(String),
    /// DG2: encoded portrait
    Portrait(FacialImage),
    /// DG13: free-form UTF-8 text
    Text(String),
    /// Any other data group, value bytes as read
    Raw(Vec<u8>),
}

impl DataGroupPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Mrz(s) | Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&FacialImage> {
        match self {
            Self::Portrait(img) => Some(img),
            _ => None,
        }
    }
}

/// DG1: the TLV value as US-ASCII text. Bytes above 0x7F become U+FFFD.
pub fn parse_dg1(buf: &[u8], len: usize) -> Result<String> {
    let value = extract_value(buf, len)?;
    Ok(ascii_lossy(value))
}

/// DG2: the TLV value from its first JPEG start-of-image marker (`FF D8`)
/// to the end. Empty when the value has no such marker.
pub fn parse_dg2_image(buf: &[u8], len: usize) -> Result<Vec<u8>> {
    let value = extract_value(buf, len)?;
    match find_marker(value, &JPEG_SOI) {
        Some(start) => Ok(value[start..].to_vec()),
        None => {
            log::warn!("no JPEG start marker in {} byte DG2 value", value.len());
            Ok(Vec::new())
        }
    }
}

/// DG13: the TLV value as UTF-8 text, invalid sequences replaced.
pub fn parse_dg13(buf: &[u8], len: usize) -> Result<String> {
    let value = extract_value(buf, len)?;
    Ok(String::from_utf8_lossy(value).into_owned())
}

/// Decode a data-group response according to its index. Indices without a
/// dedicated interpretation come back as raw value bytes.
pub fn decode(dg: DataGroup, buf: &[u8], len: usize) -> Result<DataGroupPayload> {
    match dg.number() {
        1 => parse_dg1(buf, len).map(DataGroupPayload::Mrz),
        2 => {
            let value = extract_value(buf, len)?;
            Ok(DataGroupPayload::Portrait(FacialImage::from_dg2_value(value)))
        }
        13 => parse_dg13(buf, len).map(DataGroupPayload::Text),
        _ => {
            log::debug!("{} has no decoder, passing {} bytes through", dg, len);
            extract_value(buf, len).map(|v| DataGroupPayload::Raw(v.to_vec()))
        }
    }
}

pub(crate) fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
        .collect()
}

fn find_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    haystack.windows(marker.len()).position(|w| w == marker)
}
