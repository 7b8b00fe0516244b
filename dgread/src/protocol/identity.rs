// dgread/src/protocol/identity.rs

//! Identity fields held in DG13.
//!
//! DG13 on the supported documents is a DER tree in which every field is a
//! `SEQUENCE { INTEGER id, value... }`. Field values may be strings, nested
//! sequences or sets of strings, tagged wrappers, or octet strings that
//! themselves hold DER. All strings found under a field are collected in
//! document order. When the same id appears more than once, the record
//! encountered last (deepest) wins. Trees nested deeper than
//! [`MAX_DEPTH`] are rejected as malformed.

use std::collections::BTreeMap;

use crate::protocol::tlv::{Tlv, TlvReader};
use crate::{Error, Result};

const TAG_INTEGER: u16 = 0x02;
const TAG_OCTET_STRING: u16 = 0x04;
const TAG_SEQUENCE: u16 = 0x30;
const TAG_SET: u16 = 0x31;

/// Deepest constructed nesting the walker follows.
pub const MAX_DEPTH: usize = 32;

/// Field id → strings found under that field.
pub type IdentityFields = BTreeMap<u32, Vec<String>>;

/// Walk a DG13 DER tree and collect its identity fields.
pub fn parse_identity_fields(der: &[u8]) -> Result<IdentityFields> {
    let mut out = IdentityFields::new();
    for tlv in TlvReader::new(der) {
        collect_fields(&tlv?, &mut out, 0)?;
    }
    Ok(out)
}

fn collect_fields(tlv: &Tlv<'_>, out: &mut IdentityFields, depth: usize) -> Result<()> {
    check_depth(depth)?;
    match tlv.tag() {
        TAG_SEQUENCE => {
            let children = children(tlv.value)?;
            if let Some(id) = children.first().and_then(field_id) {
                let mut strings = Vec::new();
                for child in &children[1..] {
                    collect_strings(child, &mut strings, depth + 1)?;
                }
                if !strings.is_empty() {
                    out.insert(id, strings);
                }
            }
            for child in &children {
                collect_fields(child, out, depth + 1)?;
            }
        }
        TAG_SET => {
            for child in children(tlv.value)? {
                collect_fields(&child, out, depth + 1)?;
            }
        }
        _ if is_tagged_wrapper(tlv) => {
            for child in children(tlv.value)? {
                collect_fields(&child, out, depth + 1)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn collect_strings(tlv: &Tlv<'_>, out: &mut Vec<String>, depth: usize) -> Result<()> {
    check_depth(depth)?;
    if let Some(s) = decode_string(tlv) {
        if !s.is_empty() {
            out.push(s);
        }
        return Ok(());
    }

    match tlv.tag() {
        TAG_OCTET_STRING => match children(tlv.value) {
            Ok(nested) if !nested.is_empty() => {
                for child in &nested {
                    collect_strings(child, out, depth + 1)?;
                }
            }
            _ => {
                let s = String::from_utf8_lossy(tlv.value);
                if !s.is_empty() {
                    out.push(s.into_owned());
                }
            }
        },
        TAG_SEQUENCE | TAG_SET => {
            for child in children(tlv.value)? {
                collect_strings(&child, out, depth + 1)?;
            }
        }
        _ if is_tagged_wrapper(tlv) => {
            for child in children(tlv.value)? {
                collect_strings(&child, out, depth + 1)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::MalformedTlv(format!(
            "DG13 nesting deeper than {} levels",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn children(value: &[u8]) -> Result<Vec<Tlv<'_>>> {
    TlvReader::new(value).collect()
}

/// Non-universal constructed record (application or context tag).
fn is_tagged_wrapper(tlv: &Tlv<'_>) -> bool {
    let tag = tlv.tag();
    let first = if tag > 0xFF { (tag >> 8) as u8 } else { tag as u8 };
    first & 0xC0 != 0 && tlv.header.is_constructed()
}

fn field_id(tlv: &Tlv<'_>) -> Option<u32> {
    if tlv.tag() != TAG_INTEGER || tlv.value.is_empty() || tlv.value.len() > 4 {
        return None;
    }
    if tlv.value[0] & 0x80 != 0 {
        return None;
    }
    Some(tlv.value.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
}

fn decode_string(tlv: &Tlv<'_>) -> Option<String> {
    match tlv.tag() {
        // UTF8String
        0x0C => Some(String::from_utf8_lossy(tlv.value).into_owned()),
        // Numeric, Printable, T61, IA5, Graphic, Visible, General strings
        0x12 | 0x13 | 0x14 | 0x16 | 0x19 | 0x1A | 0x1B => {
            Some(tlv.value.iter().map(|&b| b as char).collect())
        }
        // BMPString
        0x1E => {
            let units: Vec<u16> = tlv
                .value
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect();
            Some(String::from_utf16_lossy(&units))
        }
        _ => None,
    }
}
