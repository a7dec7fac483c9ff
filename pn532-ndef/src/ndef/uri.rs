// pn532-ndef/src/ndef/uri.rs

use crate::ndef::record::{Record, Tnf};
use crate::{Error, Result};

/// URI identifier prefix table, indexed by the first payload byte of a
/// well-known `U` record. Codes 0x00-0x23.
pub static URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// True when the record is a well-known URI record (`U` type).
pub fn is_uri_record(record: &Record<'_>) -> bool {
    record.tnf() == Tnf::WellKnown && record.type_field() == b"U"
}

/// Expand a URI payload: the first byte selects a prefix from the table,
/// the rest is appended verbatim. Code 0 maps to the empty prefix, in
/// which case the whole payload is kept as-is, code byte included.
pub fn expand_uri(payload: &[u8]) -> Result<String> {
    let Some(&code) = payload.first() else {
        return Ok(String::new());
    };
    if code as usize >= URI_PREFIXES.len() {
        return Err(Error::UnsupportedPrefix(code));
    }

    let prefix = URI_PREFIXES[code as usize];
    let rest = if prefix.is_empty() {
        payload
    } else {
        &payload[1..]
    };

    let mut out = String::with_capacity(prefix.len() + rest.len());
    out.push_str(prefix);
    out.push_str(&String::from_utf8_lossy(rest));
    Ok(out)
}

/// The record payload as a display string, no prefix interpretation.
pub fn payload_string(record: &Record<'_>) -> String {
    String::from_utf8_lossy(record.payload()).into_owned()
}

/// Display string for a record: prefix-expanded for well-known URI
/// records, verbatim payload bytes for everything else.
pub fn record_string(record: &Record<'_>) -> Result<String> {
    if is_uri_record(record) {
        expand_uri(record.payload())
    } else {
        Ok(payload_string(record))
    }
}

/// The MIME type of a Mime record. The type field holds the MIME string;
/// the payload is the body.
pub fn mime_type(record: &Record<'_>) -> Result<String> {
    if record.tnf() != Tnf::Mime {
        return Err(Error::UnsupportedOperation(
            "record is not a MIME record".into(),
        ));
    }
    Ok(String::from_utf8_lossy(record.type_field()).into_owned())
}
