// pn532-ndef/src/transport/mock.rs

use std::collections::VecDeque;

use crate::constants::{STATUS_BUSY, STATUS_READY};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and returns
/// queued read chunks.
///
/// Each `read` call consumes one queued chunk. A chunk shorter than the
/// requested length is zero-padded, matching a real bus where the chip
/// clocks out filler bytes past the end of its frame. An empty queue maps
/// to `Timeout`.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub written: Vec<Vec<u8>>,
    reads: VecDeque<Vec<u8>>,
    busy_polls: usize,
    /// Testing hook: number of read calls that should fail with Timeout
    read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a chunk to be returned by the next unserved `read` call.
    pub fn push_read(&mut self, chunk: Vec<u8>) {
        self.reads.push_back(chunk);
    }

    /// Report busy for the next `n` status polls before going ready.
    pub fn set_busy_polls(&mut self, n: usize) {
        self.busy_polls = n;
    }

    /// Fail the next `n` read calls with `Timeout`.
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    pub fn pop_written(&mut self) -> Option<Vec<u8>> {
        self.written.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.written.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Timeout);
        }
        let chunk = self.reads.pop_front().ok_or(Error::Timeout)?;
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        buf[n..].fill(0);
        Ok(())
    }

    fn status(&mut self) -> Result<u8> {
        if self.busy_polls > 0 {
            self.busy_polls -= 1;
            Ok(STATUS_BUSY)
        } else {
            Ok(STATUS_READY)
        }
    }
}
