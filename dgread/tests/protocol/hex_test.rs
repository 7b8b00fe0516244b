use dgread::Error;
use dgread::utils::{bytes_to_hex, bytes_to_hex_truncated, hex_to_bytes};
use proptest::prelude::*;

#[test]
fn spaced_rendering() {
    assert_eq!(bytes_to_hex(&[0x0A, 0x1B, 0xFF], 3, true).unwrap(), "0A 1B FF");
}

#[test]
fn truncated_rendering_of_300_bytes() {
    let buf: Vec<u8> = (0..300u32).map(|i| i as u8).collect();
    let s = bytes_to_hex_truncated(&buf, 300, false).unwrap();
    let (head, tail) = s.split_once(" ... ... ").unwrap();
    assert_eq!(head, hex::encode_upper(&buf[..256]));
    assert_eq!(tail, hex::encode_upper(&buf[284..300]));
}

#[test]
fn truncation_uses_declared_len_not_capacity() {
    // 300 valid bytes inside a larger driver buffer
    let mut buf = vec![0xEEu8; 1024];
    for (i, b) in buf.iter_mut().take(300).enumerate() {
        *b = i as u8;
    }
    let s = bytes_to_hex_truncated(&buf, 300, true).unwrap();
    assert!(s.ends_with("2A 2B"));
    assert!(!s.contains("EE"));
}

#[test]
fn strict_decoding() {
    assert!(matches!(hex_to_bytes("0G"), Err(Error::InvalidEncoding(_))));
    assert!(matches!(hex_to_bytes("123"), Err(Error::InvalidEncoding(_))));
}

proptest! {
    #[test]
    fn roundtrip_uppercases(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let lower = hex::encode(&bytes);
        let decoded = hex_to_bytes(&lower).unwrap();
        prop_assert_eq!(&decoded, &bytes);
        prop_assert_eq!(bytes_to_hex(&decoded, decoded.len(), false).unwrap(), lower.to_uppercase());
    }

    #[test]
    fn spaced_form_has_one_space_between_pairs(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let s = bytes_to_hex(&bytes, bytes.len(), true).unwrap();
        prop_assert_eq!(s.len(), bytes.len() * 3 - 1);
        prop_assert!(!s.ends_with(' '));
    }
}
