// dgread/src/protocol/parser.rs

//! Bounds-checked readers shared by the TLV and DER walkers. Every failure
//! is reported as `MalformedTlv` naming the field that ran short.

use crate::{Error, Result};

/// Ensure `data` holds at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize, field: &str) -> Result<()> {
    if data.len() < min {
        return Err(Error::MalformedTlv(format!(
            "{} needs {} bytes, only {} available",
            field,
            min,
            data.len()
        )));
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize, field: &str) -> Result<u8> {
    ensure_len(data, idx + 1, field)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at<'a>(data: &'a [u8], idx: usize, len: usize, field: &str) -> Result<&'a [u8]> {
    let end = idx
        .checked_add(len)
        .ok_or_else(|| Error::MalformedTlv(format!("{} length {} overflows", field, len)))?;
    ensure_len(data, end, field)?;
    Ok(&data[idx..end])
}

/// Fold big-endian bytes into a `usize`.
pub fn be_usize(bytes: &[u8], field: &str) -> Result<usize> {
    if bytes.len() > std::mem::size_of::<usize>() {
        return Err(Error::MalformedTlv(format!(
            "{} uses {} length bytes",
            field,
            bytes.len()
        )));
    }
    Ok(bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize))
}
