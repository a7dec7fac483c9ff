// pn532-ndef/src/prelude.rs
//! Convenience re-exports of the types most programs touch.

pub use crate::ndef::{Record, Tlv, Tnf};
pub use crate::reader::{Initialized, Reader, Uninitialized};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{BaudModulation, Error, FirmwareVersion, Result, TagModel, TargetInfo, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, DEFAULT_TIMEOUT_MS};
