// pn532-ndef/src/ndef/record.rs

use crate::{Error, Result};

/// Message Begin flag
pub const FLAG_MB: u8 = 0x80;
/// Message End flag
pub const FLAG_ME: u8 = 0x40;
/// Chunk flag
pub const FLAG_CF: u8 = 0x20;
/// Short Record flag: 1-byte payload length
pub const FLAG_SR: u8 = 0x10;
/// ID Length field present
pub const FLAG_IL: u8 = 0x08;
/// Type Name Format mask, bits 0-2
pub const TNF_MASK: u8 = 0x07;

/// Type Name Format: how to interpret a record's type field.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tnf {
    Empty = 0,
    WellKnown = 1,
    Mime = 2,
    AbsoluteUri = 3,
    External = 4,
    Unknown = 5,
    Unchanged = 6,
    Reserved = 7,
}

impl Tnf {
    pub fn from_flags(flags: u8) -> Self {
        match flags & TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// One NDEF record, as offsets into a shared borrowed buffer. A zero-length
/// field carries offset 0 as an "absent" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    buffer: &'a [u8],
    tnf: Tnf,
    type_offset: usize,
    type_length: usize,
    id_offset: usize,
    id_length: usize,
    payload_offset: usize,
    payload_length: usize,
}

impl<'a> Record<'a> {
    pub fn tnf(&self) -> Tnf {
        self.tnf
    }

    /// The type field bytes; empty for a zero-length type.
    pub fn type_field(&self) -> &'a [u8] {
        &self.buffer[self.type_offset..self.type_offset + self.type_length]
    }

    pub fn id(&self) -> &'a [u8] {
        &self.buffer[self.id_offset..self.id_offset + self.id_length]
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.buffer[self.payload_offset..self.payload_offset + self.payload_length]
    }
}

/// Count the records in an NDEF message without allocating.
///
/// The walk counts a record carrying the Message End flag and then stops.
/// An empty buffer and a first record that already carries Message End both
/// count as exactly 1.
pub fn message_record_count(buffer: &[u8]) -> usize {
    if buffer.is_empty() || buffer[0] & FLAG_ME != 0 {
        return 1;
    }

    let mut count = 0;
    let mut i = 0;
    while i < buffer.len() {
        let flags = buffer[i];
        i += 1;
        let Some(&type_len) = buffer.get(i) else { break };
        i += 1;

        let payload_len = if flags & FLAG_SR != 0 {
            let Some(&len) = buffer.get(i) else { break };
            i += 1;
            len as usize
        } else {
            let Some(bytes) = buffer.get(i..i + 4) else { break };
            i += 4;
            u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
        };

        let id_len = if flags & FLAG_IL != 0 {
            let Some(&len) = buffer.get(i) else { break };
            i += 1;
            len as usize
        } else {
            0
        };

        i += type_len as usize + id_len + payload_len;
        count += 1;

        if flags & FLAG_ME != 0 {
            break;
        }
    }
    count
}

/// Decode one record starting at `offset`. Returns the record and the
/// offset just past its payload.
pub fn parse_record(buffer: &[u8], offset: usize) -> Result<(Record<'_>, usize)> {
    // Shortest possible record: flags, type length, payload length, one
    // field byte.
    if buffer.len() < offset + 4 {
        return Err(Error::MalformedRecord { offset });
    }

    let mut ptr = offset;
    let flags = buffer[ptr];
    let sr = flags & FLAG_SR != 0;
    let il = flags & FLAG_IL != 0;
    let tnf = Tnf::from_flags(flags);
    ptr += 1;

    let type_length = buffer[ptr] as usize;
    ptr += 1;

    let payload_length = if sr {
        let len = buffer[ptr] as usize;
        ptr += 1;
        len
    } else {
        let bytes = buffer
            .get(ptr..ptr + 4)
            .ok_or(Error::MalformedRecord { offset })?;
        ptr += 4;
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
    };

    let id_length = if il {
        let len = *buffer.get(ptr).ok_or(Error::MalformedRecord { offset })? as usize;
        ptr += 1;
        len
    } else {
        0
    };

    // Fields follow in type, id, payload order. Zero-length fields keep
    // offset 0 and skip the bounds check.
    let mut field = |len: usize| -> Result<usize> {
        if len == 0 {
            return Ok(0);
        }
        let start = ptr;
        if start + len > buffer.len() {
            return Err(Error::MalformedRecord { offset });
        }
        ptr += len;
        Ok(start)
    };

    let type_offset = field(type_length)?;
    let id_offset = field(id_length)?;
    let payload_offset = field(payload_length)?;

    Ok((
        Record {
            buffer,
            tnf,
            type_offset,
            type_length,
            id_offset,
            id_length,
            payload_offset,
            payload_length,
        },
        ptr,
    ))
}

/// Decode a full message. The record count is pre-computed so the vector is
/// allocated once; decoding stops at the count or at the first malformed
/// record, and whatever decoded up to that point is returned.
pub fn parse_message(buffer: &[u8]) -> Vec<Record<'_>> {
    let expected = message_record_count(buffer);
    let mut records = Vec::with_capacity(expected);

    let mut offset = 0;
    while records.len() < expected {
        match parse_record(buffer, offset) {
            Ok((record, next)) => {
                records.push(record);
                offset = next;
            }
            Err(_) => break,
        }
    }
    records
}

/// Encode a single unchunked, non-terminal record: SR is set iff the
/// payload fits a 1-byte length, IL iff an id is present; MB/ME/CF are the
/// caller's to manage when composing a message.
pub fn encode_record(tnf: Tnf, type_field: &[u8], id: &[u8], payload: &[u8]) -> Vec<u8> {
    let short = payload.len() < 256;
    let mut flags = tnf as u8;
    if short {
        flags |= FLAG_SR;
    }
    if !id.is_empty() {
        flags |= FLAG_IL;
    }

    let header = 2 + if short { 1 } else { 4 } + if id.is_empty() { 0 } else { 1 };
    let mut out = Vec::with_capacity(header + type_field.len() + id.len() + payload.len());

    out.push(flags);
    out.push(type_field.len() as u8);
    if short {
        out.push(payload.len() as u8);
    } else {
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    }
    if !id.is_empty() {
        out.push(id.len() as u8);
    }
    out.extend_from_slice(type_field);
    out.extend_from_slice(id);
    out.extend_from_slice(payload);
    out
}
