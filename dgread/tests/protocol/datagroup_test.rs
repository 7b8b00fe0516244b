#[path = "../common/mod.rs"]
mod common;

use dgread::protocol::datagroup::{decode, parse_dg1, parse_dg2_image, parse_dg13};
use dgread::protocol::mrz;
use dgread::protocol::{DataGroupPayload, ImageFormat, extract_value};
use dgread::DataGroup;
use proptest::prelude::*;

#[test]
fn dg1_abc() {
    assert_eq!(parse_dg1(&[0x61, 0x03, 0x41, 0x42, 0x43], 5).unwrap(), "ABC");
}

#[test]
fn dg1_with_inner_mrz_tag() {
    let resp = common::fixtures::dg1_response();
    let value = extract_value(&resp, resp.len()).unwrap();
    let text = mrz::mrz_text(value);
    assert_eq!(text, common::fixtures::TD3_MRZ);
    let lines = mrz::split_lines(&text);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("P<UTO"));
}

#[test]
fn dg1_payload_text_strips_to_mrz() {
    let resp = common::fixtures::dg1_response();
    let payload = decode(DataGroup::DG1, &resp, resp.len()).unwrap();
    let text = mrz::mrz_text(payload.as_text().unwrap().as_bytes());
    let lines = mrz::split_lines(&text);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.len() == 44 && l.chars().all(|c| !c.is_control())));
}

#[test]
fn dg2_image_starts_at_soi() {
    let resp = common::fixtures::dg2_response();
    let image = parse_dg2_image(&resp, resp.len()).unwrap();
    assert_eq!(image, common::fixtures::sample_jpeg());

    match decode(DataGroup::DG2, &resp, resp.len()).unwrap() {
        DataGroupPayload::Portrait(img) => {
            assert_eq!(img.format, ImageFormat::Jpeg);
            assert_eq!(img.data, common::fixtures::sample_jpeg());
        }
        other => panic!("expected portrait, got {:?}", other),
    }
}

#[test]
fn dg13_text() {
    let resp = common::fixtures::dg13_response("Nguyễn Văn B");
    assert_eq!(parse_dg13(&resp, resp.len()).unwrap(), "Nguyễn Văn B");
}

#[test]
fn unknown_groups_pass_through() {
    let resp = [0x6B, 0x02, 0xCA, 0xFE];
    assert_eq!(
        decode(DataGroup::new(11).unwrap(), &resp, 4).unwrap(),
        DataGroupPayload::Raw(vec![0xCA, 0xFE])
    );
}

proptest! {
    #[test]
    fn decode_is_idempotent(
        number in 1u8..=16,
        value in prop::collection::vec(any::<u8>(), 0..400),
    ) {
        let dg = DataGroup::new(number).unwrap();
        let resp = dgread::test_support::tlv_record(dg.tag(), &value);
        let before = resp.clone();
        let first = decode(dg, &resp, resp.len()).unwrap();
        let second = decode(dg, &resp, resp.len()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(resp, before);
    }
}
