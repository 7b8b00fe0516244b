// dgread/src/protocol/tlv.rs

//! Minimal BER-TLV decoding.
//!
//! Tags are one byte, or two when the low five bits of the first byte are all
//! set. Lengths use the short form (`< 0x80`) or the long form (`0x80 | n`
//! followed by `n` big-endian length bytes). Constructed values are not
//! descended into; callers that need nesting run a new [`TlvReader`] over a
//! record's value.

use crate::protocol::parser::{be_usize, byte_at, slice_at};
use crate::{Error, Result};

/// Decoded tag and length fields of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    /// Tag bytes packed big-endian (`0x61`, `0x5F1F`, ...)
    pub tag: u16,
    /// Bytes taken by tag plus length fields
    pub header_len: usize,
    /// Declared value length
    pub value_len: usize,
}

impl TlvHeader {
    /// Parse the header at the start of `data`. The value itself is not
    /// bounds checked here.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let first = byte_at(data, 0, "tag")?;
        let (tag, mut idx) = if first & 0x1F == 0x1F {
            let second = byte_at(data, 1, "two-byte tag")?;
            (u16::from_be_bytes([first, second]), 2)
        } else {
            (first as u16, 1)
        };

        let len_byte = byte_at(data, idx, "length")?;
        idx += 1;
        let value_len = if len_byte & 0x80 == 0 {
            len_byte as usize
        } else {
            let count = (len_byte & 0x7F) as usize;
            if count == 0 {
                return Err(Error::MalformedTlv(
                    "indefinite length form is not supported".into(),
                ));
            }
            let len_bytes = slice_at(data, idx, count, "long-form length")?;
            idx += count;
            be_usize(len_bytes, "long-form length")?
        };

        Ok(Self {
            tag,
            header_len: idx,
            value_len,
        })
    }

    /// First tag byte has the constructed bit (0x20) set.
    pub fn is_constructed(&self) -> bool {
        let first = if self.tag > 0xFF {
            (self.tag >> 8) as u8
        } else {
            self.tag as u8
        };
        first & 0x20 != 0
    }

    /// Total encoded size of the record.
    pub fn total_len(&self) -> Option<usize> {
        self.header_len.checked_add(self.value_len)
    }
}

/// Return the value of the single TLV record at the start of `buf[..len]`.
///
/// Nothing past `len` is read. Fails with `InvalidArgument` when `len`
/// exceeds the buffer and with `MalformedTlv` when the header is cut short or
/// the declared value runs past `len`.
pub fn extract_value(buf: &[u8], len: usize) -> Result<&[u8]> {
    if len > buf.len() {
        return Err(Error::InvalidArgument(format!(
            "declared length {} exceeds buffer of {} bytes",
            len,
            buf.len()
        )));
    }
    let data = &buf[..len];
    let header = TlvHeader::parse(data)?;
    slice_at(data, header.header_len, header.value_len, "value").map_err(|_| {
        Error::MalformedTlv(format!(
            "value of {} bytes at offset {} runs past {} available bytes",
            header.value_len, header.header_len, len
        ))
    })
}

/// One decoded record borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub header: TlvHeader,
    pub value: &'a [u8],
}

impl<'a> Tlv<'a> {
    pub fn tag(&self) -> u16 {
        self.header.tag
    }
}

/// Iterates consecutive records. After the first error the iterator ends.
pub struct TlvReader<'a> {
    data: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> TlvReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            failed: false,
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = Result<Tlv<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.position..];
        let item = TlvHeader::parse(rest).and_then(|header| {
            let value = slice_at(rest, header.header_len, header.value_len, "value")?;
            Ok(Tlv { header, value })
        });
        match item {
            Ok(tlv) => {
                self.position += tlv.header.header_len + tlv.header.value_len;
                Some(Ok(tlv))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
