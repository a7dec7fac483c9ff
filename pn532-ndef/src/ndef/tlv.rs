// pn532-ndef/src/ndef/tlv.rs

use crate::constants::{TLV_NDEF_TAG, TLV_TERMINATOR};
use crate::{Error, Result};

/// NDEF message TLV located inside a tag-memory image. Borrows the image;
/// offsets index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    buffer: &'a [u8],
    value_offset: usize,
    value_length: usize,
}

impl<'a> Tlv<'a> {
    /// The whole backing image.
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn value_offset(&self) -> usize {
        self.value_offset
    }

    pub fn value_len(&self) -> usize {
        self.value_length
    }

    /// The TLV value range (the NDEF message bytes).
    pub fn value(&self) -> &'a [u8] {
        &self.buffer[self.value_offset..self.value_offset + self.value_length]
    }
}

/// Scan `buffer` from `start` for an NDEF TLV (tag 0x03).
///
/// A length byte of 0xFF selects the 3-byte big-endian length form with the
/// value starting 4 bytes past the tag; otherwise the single length byte
/// applies and the value starts 2 bytes past. The byte after the value must
/// be the 0xFE terminator.
///
/// An unterminated short-form candidate is treated as a false positive and
/// the scan resumes one byte past its tag; the long form fails outright on
/// a bad terminator. Deployed readers depend on that asymmetry.
pub fn parse_tlv(buffer: &[u8], start: usize) -> Option<Tlv<'_>> {
    let mut search = start;
    loop {
        let rel = buffer.get(search..)?.iter().position(|&b| b == TLV_NDEF_TAG)?;
        let head = search + rel;
        if head + 2 > buffer.len() {
            return None;
        }

        if buffer[head + 1] == 0xFF {
            if head + 4 > buffer.len() {
                return None;
            }
            let value_length = u16::from_be_bytes([buffer[head + 2], buffer[head + 3]]) as usize;
            let value_offset = head + 4;
            if buffer.get(value_offset + value_length) != Some(&TLV_TERMINATOR) {
                return None;
            }
            return Some(Tlv {
                buffer,
                value_offset,
                value_length,
            });
        }

        let value_length = buffer[head + 1] as usize;
        let value_offset = head + 2;
        if buffer.get(value_offset + value_length) == Some(&TLV_TERMINATOR) {
            return Some(Tlv {
                buffer,
                value_offset,
                value_length,
            });
        }
        // False positive: rescan just past this tag byte.
        search = head + 1;
    }
}

/// Encode `data` as an NDEF TLV into `out`, returning the bytes written.
/// Lengths below 0xFF use the 1-byte form, larger ones the 3-byte form.
pub fn encode_tlv(data: &[u8], out: &mut [u8]) -> Result<usize> {
    if data.len() > u16::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u16::MAX as usize,
            actual: data.len(),
        });
    }

    let long_form = data.len() >= 0xFF;
    let needed = data.len() + if long_form { 5 } else { 3 };
    if out.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }

    let mut i = 0;
    out[i] = TLV_NDEF_TAG;
    i += 1;
    if long_form {
        out[i] = 0xFF;
        out[i + 1] = (data.len() >> 8) as u8;
        out[i + 2] = (data.len() & 0xFF) as u8;
        i += 3;
    } else {
        out[i] = data.len() as u8;
        i += 1;
    }
    out[i..i + data.len()].copy_from_slice(data);
    i += data.len();
    out[i] = TLV_TERMINATOR;
    i += 1;

    Ok(i)
}
