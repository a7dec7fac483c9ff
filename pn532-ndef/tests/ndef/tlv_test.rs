#[path = "../common/mod.rs"]
mod common;

use pn532_ndef::ndef::{encode_tlv, parse_tlv};

#[test]
fn tag_image_fixture_parses_back() {
    let image = common::fixtures::tag_image_a_z();
    let record = common::fixtures::uri_record_a_z();

    let tlv = parse_tlv(&image, 0).expect("fixture image holds a tlv");
    assert_eq!(tlv.value(), &record[..]);
    assert_eq!(tlv.value_offset(), 2);
    assert_eq!(tlv.value_len(), record.len());
}

#[test]
fn tlv_found_past_leading_lock_bytes() {
    // Real tags often carry a lock-control TLV (0x01) ahead of the NDEF one
    let mut image = vec![0x01, 0x03, 0xA0, 0x0C, 0x34];
    let record = common::fixtures::uri_record_a_z();
    let mut tlv_bytes = vec![0u8; record.len() + 3];
    let n = encode_tlv(&record, &mut tlv_bytes).unwrap();
    image.extend_from_slice(&tlv_bytes[..n]);

    let tlv = parse_tlv(&image, 0).expect("ndef tlv after lock tlv");
    assert_eq!(tlv.value(), &record[..]);
}

#[test]
fn long_form_roundtrip_through_image() {
    let data = vec![0x5Au8; 600];
    let mut image = vec![0u8; 700];
    let n = encode_tlv(&data, &mut image).unwrap();
    assert_eq!(n, 600 + 5);
    assert_eq!(&image[..4], &[0x03, 0xFF, 0x02, 0x58]);

    let tlv = parse_tlv(&image[..n], 0).expect("long form parses back");
    assert_eq!(tlv.value_offset(), 4);
    assert_eq!(tlv.value(), &data[..]);
}
