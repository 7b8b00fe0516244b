//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::time::Duration;

use crate::reader::{Connected, Reader, ReaderBuilder};
use crate::transport::mock::MockTransport;
use crate::Result;

/// Build a MockTransport pre-seeded with the given responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Convenience: a connected Reader backed by `mock`, with the RF settle
/// delay disabled so tests do not sleep.
#[doc(hidden)]
pub fn connected_reader(mock: MockTransport) -> Result<Reader<Connected>> {
    ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .rf_settle(Duration::ZERO)
        .build()?
        .connect()
}

/// Wrap `value` in a single TLV record with the given one-byte tag, choosing
/// the short or long length form as needed.
#[doc(hidden)]
pub fn tlv_record(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = value.len();
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
    out.extend_from_slice(value);
    out
}
