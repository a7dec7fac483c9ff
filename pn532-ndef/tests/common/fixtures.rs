// fixtures.rs — commonly used tag images and chip conversations

use pn532_ndef::ndef::{encode_record, encode_tlv, Tnf};
use pn532_ndef::ndef::record::{FLAG_MB, FLAG_ME};
use pn532_ndef::test_support::{seed_ack, seed_data_exchange_response, seed_initialization,
    seed_response};
use pn532_ndef::transport::MockTransport;

/// A well-known URI record: prefix 0x01 ("http://www.") + "a.z",
/// flagged as the sole record of its message.
pub fn uri_record_a_z() -> Vec<u8> {
    let mut record = encode_record(Tnf::WellKnown, b"U", &[], &[0x01, b'a', b'.', b'z']);
    record[0] |= FLAG_MB | FLAG_ME; // single-record message
    record
}

/// A 16-byte page image holding the TLV-wrapped record, as it would sit in
/// NTAG user memory.
pub fn tag_image_a_z() -> [u8; 16] {
    let record = uri_record_a_z();
    let mut image = [0u8; 16];
    let written = encode_tlv(&record, &mut image).expect("record fits one page read");
    assert!(written <= image.len());
    image
}

/// Seed a full conversation: initialization, target detection, model
/// probe (NTAG213) and one user-page read returning `page`.
pub fn seed_tag_read(mock: &mut MockTransport, page: &[u8; 16]) {
    seed_initialization(mock);

    // Detection: one ISO14443A target, 7-byte UID
    seed_ack(mock);
    seed_response(
        mock,
        &[0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07, 0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66],
        20,
    );

    // Model probe: capability byte 0x12 on page 3
    seed_ack(mock);
    let mut page3 = [0u8; 16];
    page3[2] = 0x12;
    seed_data_exchange_response(mock, &page3, 16);

    // First user-page read; the queue then runs dry, which ends the scan
    seed_ack(mock);
    seed_data_exchange_response(mock, page, 16);
}
