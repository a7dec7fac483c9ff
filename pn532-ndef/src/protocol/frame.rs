// pn532-ndef/src/protocol/frame.rs

use crate::constants::{
    FRAME_OVERHEAD, HOST_TO_PN532, MAX_PAYLOAD_LEN, PN532_TO_HOST, POSTAMBLE, PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [Direction(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
/// Len counts the direction byte plus the payload; DCS covers both.
pub struct Frame;

impl Frame {
    fn encode(direction: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8 + 1;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(direction);
        out.extend_from_slice(payload);
        out.push(dcs(direction, payload));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Encode a command payload into a host->chip frame.
    pub fn encode_command(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode(HOST_TO_PN532, payload)
    }

    /// Encode a payload into a chip->host frame. The driver never sends
    /// these; tests and fixtures use it to fabricate chip responses.
    pub fn encode_response(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode(PN532_TO_HOST, payload)
    }

    /// Validate a chip->host frame in place and compact its payload to the
    /// front of `buf`. On success `buf[..n]` holds the payload (command echo
    /// first, direction byte stripped) and `n` is returned.
    pub fn decode_response(buf: &mut [u8]) -> Result<usize> {
        if buf.len() < FRAME_OVERHEAD - 1 {
            return Err(Error::InvalidLength {
                expected: FRAME_OVERHEAD - 1,
                actual: buf.len(),
            });
        }

        if buf[..3] != PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len_byte = buf[3];
        let lcs_actual = buf[4];
        if len_byte.wrapping_add(lcs_actual) != 0 {
            return Err(Error::ChecksumMismatch {
                expected: lcs(len_byte),
                actual: lcs_actual,
            });
        }

        let len = len_byte as usize;
        if len == 0 {
            return Err(Error::FrameFormat("zero-length frame".into()));
        }
        if buf.len() < 6 + len {
            return Err(Error::InvalidLength {
                expected: 6 + len,
                actual: buf.len(),
            });
        }

        // Sum the direction byte and payload while shifting the payload left
        // by one slot; the DCS byte must cancel the total.
        let mut sum = buf[5];
        for i in 1..len {
            buf[i - 1] = buf[5 + i];
            sum = sum.wrapping_add(buf[i - 1]);
        }
        let dcs_actual = buf[5 + len];
        sum = sum.wrapping_add(dcs_actual);
        if sum != 0 {
            return Err(Error::ChecksumMismatch {
                expected: dcs_actual.wrapping_sub(sum),
                actual: dcs_actual,
            });
        }

        Ok(len - 1)
    }
}
