#[path = "../common/mod.rs"]
mod common;

use pn532_ndef::ndef::record::{FLAG_MB, FLAG_ME};
use pn532_ndef::ndef::{encode_record, message_record_count, parse_message, Tnf};

fn compose_message(records: &mut [Vec<u8>]) -> Vec<u8> {
    let last = records.len() - 1;
    records[0][0] |= FLAG_MB;
    records[last][0] |= FLAG_ME;
    records.iter().flatten().copied().collect()
}

#[test]
fn three_record_message_roundtrip() {
    let mut parts = [
        encode_record(Tnf::WellKnown, b"U", &[], &[0x01, b'a', b'.', b'z']),
        encode_record(Tnf::Mime, b"text/plain", &[], b"body"),
        encode_record(Tnf::External, b"example.com:x", b"id", &[0x01, 0x02]),
    ];
    let msg = compose_message(&mut parts);

    assert_eq!(message_record_count(&msg), 3);
    let records = parse_message(&msg);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].type_field(), b"U");
    assert_eq!(records[1].payload(), b"body");
    assert_eq!(records[2].id(), b"id");
    assert_eq!(records[2].tnf(), Tnf::External);
}

#[test]
fn large_payload_uses_standard_length_form() {
    let payload = vec![0x77u8; 1000];
    let mut parts = [encode_record(Tnf::Mime, b"application/octet-stream", &[], &payload)];
    let msg = compose_message(&mut parts);

    let records = parse_message(&msg);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload().len(), 1000);
}

#[test]
fn fixture_record_is_a_complete_message() {
    let record = common::fixtures::uri_record_a_z();
    // MB and ME both set: single-record message, counted as one
    assert_ne!(record[0] & FLAG_MB, 0);
    assert_ne!(record[0] & FLAG_ME, 0);
    assert_eq!(message_record_count(&record), 1);

    let records = parse_message(&record);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload(), &[0x01, b'a', b'.', b'z']);
}

#[test]
fn truncated_tail_keeps_leading_records() {
    let mut parts = [
        encode_record(Tnf::WellKnown, b"T", &[], &[0x02, b'e', b'n', b'h', b'i']),
        encode_record(Tnf::WellKnown, b"T", &[], &[0x02, b'e', b'n', b'y', b'o']),
    ];
    let msg = compose_message(&mut parts);
    // Chop into the second record's payload
    let cut = &msg[..msg.len() - 3];

    let records = parse_message(cut);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload(), &[0x02, b'e', b'n', b'h', b'i']);
}
