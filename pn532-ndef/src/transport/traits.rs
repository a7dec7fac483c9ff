// pn532-ndef/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the two-wire bus away from protocol logic.
///
/// Implementations move raw bytes only; framing, the status-byte prefix on
/// reads and the ack handshake all live above this trait.
pub trait Transport {
    /// Write raw bytes to the chip.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Fill `buf` with raw bytes from the chip.
    fn read(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Read the chip's one-byte status indicator (busy/ready).
    fn status(&mut self) -> Result<u8>;
}
