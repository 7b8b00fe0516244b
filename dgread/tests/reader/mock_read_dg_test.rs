#[path = "../common/mod.rs"]
mod common;

use dgread::protocol::{DataGroupPayload, ImageFormat};
use dgread::reader::Reader;
use dgread::state::{self, DocumentKeys};
use dgread::test_support::{connected_reader, mock_with_responses};
use dgread::transport::mock::MockTransport;
use dgread::{ApduKind, CardType, DataGroup, Error};

#[test]
fn read_dg_com_then_groups() {
    common::init_logger();
    let responses = vec![
        common::fixtures::dg_com_response(&[0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
        common::fixtures::dg1_response(),
        common::fixtures::dg2_response(),
        common::fixtures::dg13_response("Hà Nội"),
    ];
    let mut reader = connected_reader(mock_with_responses(responses)).unwrap();

    let groups = reader.read_present_groups().unwrap();
    let numbers: Vec<u8> = groups.iter().map(|(dg, _)| dg.number()).collect();
    assert_eq!(numbers, vec![1, 2, 13]);

    assert!(matches!(groups[0].1, DataGroupPayload::Mrz(_)));
    assert_eq!(
        groups[1].1.as_image().map(|i| i.format),
        Some(ImageFormat::Jpeg)
    );
    assert_eq!(groups[2].1.as_text(), Some("Hà Nội"));
}

#[test]
fn raw_read_keeps_declared_length() {
    let resp = common::fixtures::dg13_response("text");
    let mut reader = connected_reader(mock_with_responses(vec![resp.clone()])).unwrap();
    let raw = reader.read_dg_raw(DataGroup::DG13).unwrap();
    assert_eq!(raw.as_bytes(), resp.as_slice());
    assert_eq!(raw.capacity(), 24 * 2024);
}

#[test]
fn failed_read_reports_and_keeps_state() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_response(common::fixtures::dg2_response());
    mock.push_failure(-17, "authentication failed");
    let mut reader = connected_reader(mock).unwrap();
    let (mut writer, view) = state::channel();

    if let DataGroupPayload::Portrait(img) = reader.read_dg(DataGroup::DG2).unwrap() {
        writer.set_portrait(img);
    }
    let second = reader.read_dg(DataGroup::DG2);
    assert!(matches!(second, Err(Error::Reader { code: -17, .. })));
    writer.record("read DG2", &second.map(|_| "ok"));

    let snap = view.snapshot();
    assert_eq!(snap.portrait.unwrap().data, common::fixtures::sample_jpeg());
    assert!(snap.log.contains("authentication failed"));
}

#[test]
fn apdu_and_card_checks() {
    let mut mock = MockTransport::new();
    mock.set_card_code(4);
    mock.push_response(vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x90, 0x00]);
    let mut reader = connected_reader(mock).unwrap();

    assert_eq!(reader.check_card().unwrap(), CardType::TypeACpu);
    let resp = reader.transmit_apdu(ApduKind::TypeB, " 00 84 00 00 08 ").unwrap();
    assert_eq!(resp.len(), 10);
    assert!(resp.as_bytes().ends_with(&[0x90, 0x00]));
}

#[test]
fn led_command_bytes() {
    let (transport, inner) = common::SharedMock::new(mock_with_responses(vec![vec![0x00]]));
    let mut reader = Reader::new_with_transport(Box::new(transport))
        .connect()
        .unwrap();
    reader.led(0xFF, 0x00, 0x00).unwrap();

    let guard = inner.lock().unwrap();
    assert_eq!(guard.sent, vec![vec![0x43, 0x30, 0x31, 0xFF, 0x00, 0x00]]);
}

#[test]
fn card_info_with_ocr_keys() {
    let (transport, inner) =
        common::SharedMock::new(mock_with_responses(vec![b"HO VA TEN: NGUYEN VAN A\0".to_vec()]));
    let mut reader = Reader::new_with_transport(Box::new(transport))
        .connect()
        .unwrap();
    let keys = DocumentKeys::from_ocr("027203000307", "27/03/2003", "27/03/2028").unwrap();

    assert_eq!(reader.read_card_info(&keys).unwrap(), "HO VA TEN: NGUYEN VAN A");
    let guard = inner.lock().unwrap();
    assert_eq!(guard.card_info_keys[0].birth_date, "2003/03/27");
    assert_eq!(guard.card_info_keys[0].expiry_date, "2028/03/27");
}
