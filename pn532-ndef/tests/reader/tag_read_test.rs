#[path = "../common/mod.rs"]
mod common;

use pn532_ndef::test_support::{initialized_mock_reader, seed_ack, seed_initialization,
    seed_response};
use pn532_ndef::transport::MockTransport;
use pn532_ndef::{BaudModulation, Error};

#[test]
fn detect_target_reports_uid_and_atqa() {
    let mut mock = MockTransport::new();
    seed_initialization(&mut mock);
    seed_ack(&mut mock);
    seed_response(
        &mut mock,
        &[0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07, 0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66],
        20,
    );

    let mut reader = initialized_mock_reader(mock).unwrap();
    let target = reader
        .detect_target(BaudModulation::Iso14443a, 100)
        .unwrap()
        .expect("tag in field");
    assert_eq!(target.uid.to_hex(), "04112233445566");
    assert_eq!(target.atqa, 0x0044);
}

#[test]
fn empty_field_reads_as_no_tag() {
    let mut mock = MockTransport::new();
    seed_initialization(&mut mock);
    seed_ack(&mut mock);
    seed_response(&mut mock, &[0x4B, 0x00], 20);

    let mut reader = initialized_mock_reader(mock).unwrap();
    assert!(!reader.tag_present(100));
}

#[test]
fn first_record_reads_as_url() {
    let mut mock = MockTransport::new();
    let image = common::fixtures::tag_image_a_z();
    common::fixtures::seed_tag_read(&mut mock, &image);

    let mut reader = initialized_mock_reader(mock).unwrap();
    let text = reader.read_first_record(100).unwrap();
    assert_eq!(text, "http://www.a.z");
}

#[test]
fn read_first_record_without_tag_fails() {
    let mut mock = MockTransport::new();
    seed_initialization(&mut mock);
    seed_ack(&mut mock);
    seed_response(&mut mock, &[0x4B, 0x00], 20);

    let mut reader = initialized_mock_reader(mock).unwrap();
    assert!(matches!(
        reader.read_first_record(100),
        Err(Error::NoTarget)
    ));
}

#[test]
fn blank_tag_has_no_tlv() {
    let mut mock = MockTransport::new();
    // All-zero user memory: a tlv scan over it finds nothing
    common::fixtures::seed_tag_read(&mut mock, &[0u8; 16]);

    let mut reader = initialized_mock_reader(mock).unwrap();
    assert!(matches!(
        reader.read_first_record(100),
        Err(Error::TlvNotFound)
    ));
}
