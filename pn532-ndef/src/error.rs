// pn532-ndef/src/error.rs
//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation timed out")]
    Timeout,

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("ack pattern mismatch")]
    AckMismatch,

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("chip reported status {status:#04x}")]
    Status { status: u8 },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("malformed ndef record at offset {offset}")]
    MalformedRecord { offset: usize },

    #[error("unsupported uri prefix code {0:#04x}")]
    UnsupportedPrefix(u8),

    #[error("no tag in field")]
    NoTarget,

    #[error("no ndef tlv found in tag memory")]
    TlvNotFound,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[cfg(feature = "i2c")]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),
}

pub type Result<T> = std::result::Result<T, Error>;
