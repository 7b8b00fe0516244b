use dgread::Error;
use dgread::protocol::tlv::{TlvHeader, extract_value};
use dgread::test_support::tlv_record;

#[test]
fn short_form_abc() {
    let data = [0x61, 0x03, 0x41, 0x42, 0x43];
    assert_eq!(extract_value(&data, data.len()).unwrap(), &[0x41, 0x42, 0x43]);
}

#[test]
fn long_form_one_count_byte() {
    let data = [0x75, 0x81, 0x05, 0x10, 0x11, 0x12, 0x13, 0x14];
    let v = extract_value(&data, data.len()).unwrap();
    assert_eq!(v, &[0x10, 0x11, 0x12, 0x13, 0x14]);
}

#[test]
fn large_record_inside_oversized_buffer() {
    let value = vec![0x42u8; 5000];
    let rec = tlv_record(0x75, &value);
    let mut buf = rec.clone();
    buf.resize(24 * 2024, 0xEE);
    let h = TlvHeader::parse(&buf).unwrap();
    assert_eq!(h.header_len, 4);
    assert_eq!(extract_value(&buf, rec.len()).unwrap(), value.as_slice());
}

#[test]
fn declared_value_past_len_is_malformed() {
    let rec = tlv_record(0x61, b"ABCDEF");
    for len in 2..rec.len() {
        match extract_value(&rec, len) {
            Err(Error::MalformedTlv(_)) => {}
            other => panic!("len {}: expected MalformedTlv, got {:?}", len, other),
        }
    }
}

#[test]
fn input_is_not_mutated() {
    let rec = tlv_record(0x6D, "Hà Nội".as_bytes());
    let before = rec.clone();
    let a = extract_value(&rec, rec.len()).unwrap().to_vec();
    let b = extract_value(&rec, rec.len()).unwrap().to_vec();
    assert_eq!(a, b);
    assert_eq!(rec, before);
}
