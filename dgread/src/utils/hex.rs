//! Hexadecimal helpers used for command parsing and log display.
//!
//! Output is always uppercase. Rendering functions take an explicit `len`
//! because driver buffers are oversized and the valid length is reported out
//! of band.

use std::fmt::Write;

use crate::constants::{HEX_DISPLAY_HEAD, HEX_DISPLAY_TAIL, HEX_ELLIPSIS};
use crate::{Error, Result};

/// Parse a hex string into bytes.
///
/// The input must have even length and contain only `[0-9A-Fa-f]`;
/// whitespace is rejected, see [`trim_all`] for user-typed input.
///
/// Example: `"0A1b"` -> `[0x0A, 0x1B]`
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidEncoding(format!(
            "hex string has odd length {}",
            digits.len()
        )));
    }

    let mut out = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn nibble(c: u8, pos: usize) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidEncoding(format!(
            "invalid hex character {:?} at offset {}",
            c as char, pos
        ))),
    }
}

/// Render one byte as two uppercase hex digits.
pub fn byte_to_hex(b: u8) -> String {
    format!("{:02X}", b)
}

/// Render the first `len` bytes of `buf` as uppercase hex, single-space
/// separated when `with_spaces` is set.
///
/// Example: `(&[0x0A, 0x1B, 0xFF], 3, true)` -> `"0A 1B FF"`
pub fn bytes_to_hex(buf: &[u8], len: usize, with_spaces: bool) -> Result<String> {
    check_len(buf, len)?;
    let mut s = String::with_capacity(len * 3);
    push_hex(&mut s, &buf[..len], with_spaces);
    Ok(s)
}

/// Like [`bytes_to_hex`], but a buffer longer than 256 bytes is shown as its
/// first 256 bytes, `" ... ... "`, then its last 16 bytes.
pub fn bytes_to_hex_truncated(buf: &[u8], len: usize, with_spaces: bool) -> Result<String> {
    check_len(buf, len)?;
    let head = len.min(HEX_DISPLAY_HEAD);
    let mut s = String::with_capacity(head * 3 + HEX_ELLIPSIS.len() + HEX_DISPLAY_TAIL * 3);
    push_hex(&mut s, &buf[..head], with_spaces);

    if len > HEX_DISPLAY_HEAD {
        s.push_str(HEX_ELLIPSIS);
        push_hex(&mut s, &buf[len - HEX_DISPLAY_TAIL..len], with_spaces);
    }
    Ok(s)
}

/// Strip surrounding and interior spaces, e.g. from a typed APDU.
pub fn trim_all(value: &str) -> String {
    value.trim().replace(' ', "")
}

fn check_len(buf: &[u8], len: usize) -> Result<()> {
    if len > buf.len() {
        return Err(Error::InvalidArgument(format!(
            "render length {} exceeds buffer of {} bytes",
            len,
            buf.len()
        )));
    }
    Ok(())
}

fn push_hex(s: &mut String, bytes: &[u8], with_spaces: bool) {
    for (i, b) in bytes.iter().enumerate() {
        if with_spaces && i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(s, "{:02X}", b);
    }
}
