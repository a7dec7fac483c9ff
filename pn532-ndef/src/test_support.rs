// pn532-ndef/src/test_support.rs
//! Test support helpers for unit and integration tests. They centralize
//! MockTransport seeding so every test builds chip conversations the same
//! way.
#![allow(dead_code)]

use crate::constants::STATUS_READY;
use crate::protocol::Frame;
use crate::reader::{Initialized, Reader};
use crate::transport::MockTransport;
use crate::Result;

/// Queue the chip's 6-byte ack (with its leading status byte) for the next
/// handshake read.
#[doc(hidden)]
pub fn seed_ack(mock: &mut MockTransport) {
    let mut chunk = vec![STATUS_READY];
    chunk.extend_from_slice(&crate::constants::ACK);
    mock.push_read(chunk);
}

/// Queue a framed chip response for a `parse_response(expected_data_len)`
/// read: status byte, the frame, then filler up to the read size the way a
/// real bus clocks out garbage past the end of a frame.
#[doc(hidden)]
pub fn seed_response(mock: &mut MockTransport, payload: &[u8], expected_data_len: usize) {
    let frame = Frame::encode_response(payload).expect("fixture payload fits a frame");
    let read_size = expected_data_len + crate::constants::FRAME_OVERHEAD + 1;
    let mut chunk = Vec::with_capacity(read_size.max(1 + frame.len()));
    chunk.push(STATUS_READY);
    chunk.extend_from_slice(&frame);
    chunk.resize(chunk.len().max(read_size), 0);
    mock.push_read(chunk);
}

/// Queue a successful InDataExchange response carrying `reply` from the
/// tag.
#[doc(hidden)]
pub fn seed_data_exchange_response(mock: &mut MockTransport, reply: &[u8], rbuf_size: usize) {
    let mut payload = vec![crate::constants::RESP_IN_DATA_EXCHANGE, 0x00];
    payload.extend_from_slice(reply);
    seed_response(mock, &payload, rbuf_size + 2);
}

/// Build an initialized reader over a pre-seeded mock. The first two
/// queued chunks must be the SAM configuration ack and response.
#[doc(hidden)]
pub fn initialized_mock_reader(mock: MockTransport) -> Result<Reader<Initialized>> {
    Reader::new(Box::new(mock)).initialize()
}

/// Seed the standard initialization conversation (ack + SAM echo) before
/// other frames.
#[doc(hidden)]
pub fn seed_initialization(mock: &mut MockTransport) {
    seed_ack(mock);
    seed_response(mock, &[crate::constants::RESP_SAM_CONFIGURATION], 1);
}
