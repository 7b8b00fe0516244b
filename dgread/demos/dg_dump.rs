//! Walk a simulated passport through the reader session and dump what was
//! read.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p dgread --example dg_dump

use anyhow::Context;
use dgread::protocol::mrz;
use dgread::state::{self, DocumentKeys};
use dgread::test_support::{connected_reader, tlv_record};
use dgread::transport::MockTransport;
use dgread::{DataGroup, DataGroupPayload, utils};

const MRZ: &str =
    "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<L898902C36UTO7408122F1204159ZE184226B<<<<<10";

fn simulated_card() -> MockTransport {
    let mut mock = MockTransport::new();
    mock.set_card_code(4);

    // DG COM: DG1, DG2, DG3 and DG13 present
    let mut com = vec![0x43, 0x60, 0x84, 0x00, 0x00, 0x10];
    com.extend_from_slice(&[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    com.push(0x00);
    mock.push_response(com);

    let mut dg1 = vec![0x5F, 0x1F, MRZ.len() as u8];
    dg1.extend_from_slice(MRZ.as_bytes());
    mock.push_response(tlv_record(0x61, &dg1));

    let mut dg2 = vec![0x7F, 0x61, 0x00, 0xFF, 0x00];
    dg2.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9]);
    mock.push_response(tlv_record(0x75, &dg2));

    mock.push_response(tlv_record(0x6D, "Nguyễn Văn A".as_bytes()));
    mock.push_response(b"ERIKSSON ANNA MARIA, UTO, F\0".to_vec());
    mock
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (mut writer, view) = state::channel();
    let keys = DocumentKeys::from_ocr("L898902C3", "12/08/1974", "15/04/2012")
        .context("bad OCR dates")?;
    writer.set_document(keys.clone());

    let mut reader = connected_reader(simulated_card()).context("connect failed")?;
    writer.record("check card", &reader.check_card());

    let groups = reader.read_present_groups();
    if let Err(e) = &groups {
        writer.append_log(&format!("read data groups failed: {}", e));
    }

    for (dg, payload) in groups? {
        match payload {
            DataGroupPayload::Mrz(value) => {
                // The payload still holds the inner 5F1F record
                let text = mrz::mrz_text(value.as_bytes());
                for line in mrz::split_lines(&text) {
                    writer.append_log(&format!("{}: {}", dg, line));
                }
            }
            DataGroupPayload::Portrait(image) => {
                writer.append_log(&format!(
                    "{}: {} portrait, {}",
                    dg,
                    image.format,
                    utils::bytes_to_hex_truncated(&image.data, image.data.len(), true)?
                ));
                writer.set_portrait(image);
            }
            DataGroupPayload::Text(text) => writer.append_log(&format!("{}: {}", dg, text)),
            DataGroupPayload::Raw(bytes) => {
                writer.append_log(&format!("{}: {} raw bytes", dg, bytes.len()))
            }
        }
    }

    writer.record("read card info", &reader.read_card_info(&keys));
    writer.record("read DG14", &reader.read_dg(DataGroup::DG14).map(|_| "ok"));

    print!("{}", view.log_text());
    if let Some(keys) = view.document() {
        println!(
            "document {} born {} expires {}",
            keys.number, keys.birth_date, keys.expiry_date
        );
    }
    Ok(())
}
