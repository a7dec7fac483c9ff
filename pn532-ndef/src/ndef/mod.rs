// pn532-ndef/src/ndef/mod.rs
//! Tag-content codec: TLV envelope, NDEF records, URI/MIME extraction.
//!
//! Everything here works on borrowed flat buffers; decoded structures hold
//! offsets into their backing image and never outlive it.

pub mod record;
pub mod tlv;
pub mod uri;

pub use record::{
    encode_record, message_record_count, parse_message, parse_record, Record, Tnf,
};
pub use tlv::{encode_tlv, parse_tlv, Tlv};
pub use uri::{
    expand_uri, is_uri_record, mime_type, payload_string, record_string, URI_PREFIXES,
};
