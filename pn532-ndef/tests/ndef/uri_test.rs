#[path = "../common/mod.rs"]
mod common;

use pn532_ndef::ndef::{
    expand_uri, is_uri_record, mime_type, parse_record, record_string, URI_PREFIXES,
};
use pn532_ndef::ndef::{encode_record, Tnf};
use pn532_ndef::Error;

#[test]
fn every_nonzero_prefix_code_expands() {
    for (code, prefix) in URI_PREFIXES.iter().enumerate().skip(1) {
        let mut payload = vec![code as u8];
        payload.extend_from_slice(b"rest");
        let expanded = expand_uri(&payload).unwrap();
        assert_eq!(expanded, format!("{prefix}rest"), "code {code:#04x}");
    }
}

#[test]
fn fixture_record_expands_to_url() {
    let encoded = common::fixtures::uri_record_a_z();
    let (record, _) = parse_record(&encoded, 0).unwrap();
    assert!(is_uri_record(&record));
    assert_eq!(record_string(&record).unwrap(), "http://www.a.z");
}

#[test]
fn code_zero_keeps_payload_verbatim() {
    let payload = [0x00, b'f', b'o', b'o'];
    let expanded = expand_uri(&payload).unwrap();
    assert_eq!(expanded.as_bytes(), &payload);
}

#[test]
fn out_of_table_code_is_rejected() {
    assert!(matches!(
        expand_uri(&[0x24, b'x']),
        Err(Error::UnsupportedPrefix(0x24))
    ));
}

#[test]
fn text_record_is_not_a_uri() {
    let encoded = encode_record(Tnf::WellKnown, b"T", &[], &[0x02, b'e', b'n', b'h', b'i']);
    let (record, _) = parse_record(&encoded, 0).unwrap();
    assert!(!is_uri_record(&record));
    // Verbatim payload, language header included
    let s = record_string(&record).unwrap();
    assert!(s.ends_with("hi"));
}

#[test]
fn mime_type_comes_from_type_field() {
    let encoded = encode_record(Tnf::Mime, b"image/png", &[], &[0x89, 0x50]);
    let (record, _) = parse_record(&encoded, 0).unwrap();
    assert_eq!(mime_type(&record).unwrap(), "image/png");
}
