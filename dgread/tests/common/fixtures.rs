// fixtures.rs — provides commonly used test payloads/responses

use dgread::test_support::tlv_record;

pub const TD3_MRZ: &str =
    "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<L898902C36UTO7408122F1204159ZE184226B<<<<<10";

/// DG1 response as the reader returns it: 61 { 5F1F { MRZ } }
pub fn dg1_response() -> Vec<u8> {
    let mut inner = vec![0x5F, 0x1F, TD3_MRZ.len() as u8];
    inner.extend_from_slice(TD3_MRZ.as_bytes());
    tlv_record(0x61, &inner)
}

/// Minimal JPEG stream: SOI, APP0 marker, a few bytes, EOI
pub fn sample_jpeg() -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    jpeg.extend_from_slice(b"JFIF\0");
    jpeg.extend(std::iter::repeat(0x55).take(300));
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// DG2 response: biometric header bytes (including a stray 0xFF) then the JPEG
pub fn dg2_response() -> Vec<u8> {
    let mut value = vec![0x7F, 0x61, 0x82, 0x01, 0x00, 0x02, 0x01, 0xFF, 0x00];
    value.extend_from_slice(&sample_jpeg());
    tlv_record(0x75, &value)
}

pub fn dg13_response(text: &str) -> Vec<u8> {
    tlv_record(0x6D, text.as_bytes())
}

/// DG COM response with the given per-DG flags after a six byte header and
/// before a trailing status byte.
pub fn dg_com_response(flags: &[u8]) -> Vec<u8> {
    let mut resp = vec![0x43, 0x60, 0x84, 0x00, 0x00, 0x10];
    resp.extend_from_slice(flags);
    resp.push(0x00);
    resp
}

/// Oversized driver buffer: `payload` followed by filler past the valid length.
pub fn oversized(payload: &[u8], capacity: usize) -> Vec<u8> {
    let mut buf = vec![0xEE; capacity];
    buf[..payload.len()].copy_from_slice(payload);
    buf
}
