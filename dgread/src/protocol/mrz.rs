// dgread/src/protocol/mrz.rs

//! MRZ helpers for DG1 content.

use crate::constants::MRZ_TAG;
use crate::protocol::datagroup::ascii_lossy;
use crate::protocol::tlv::TlvReader;

/// MRZ text from a DG1 value. When the value is the inner `5F1F` record the
/// wrapper is stripped, otherwise the whole value is decoded.
pub fn mrz_text(dg1_value: &[u8]) -> String {
    let inner_tag = u16::from_be_bytes(MRZ_TAG);
    let inner = TlvReader::new(dg1_value)
        .next()
        .and_then(|r| r.ok())
        .filter(|tlv| tlv.tag() == inner_tag)
        .map(|tlv| tlv.value);
    ascii_lossy(inner.unwrap_or(dg1_value))
}

/// Split MRZ text into its printed lines: TD1 (3×30), TD2 (2×36) or
/// TD3 (2×44). Text of any other length is returned as a single line.
pub fn split_lines(mrz: &str) -> Vec<&str> {
    let line_len = match mrz.len() {
        90 => 30,
        72 => 36,
        88 => 44,
        _ => return vec![mrz],
    };
    if !mrz.is_ascii() {
        return vec![mrz];
    }
    (0..mrz.len())
        .step_by(line_len)
        .map(|start| &mrz[start..start + line_len])
        .collect()
}
