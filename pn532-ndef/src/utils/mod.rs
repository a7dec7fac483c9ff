// pn532-ndef/src/utils/mod.rs

pub mod hex;
pub mod timeout;

pub use hex::{bytes_to_hex, bytes_to_hex_spaced};
pub use timeout::{ms, DEFAULT_TIMEOUT_MS, POLL_INTERVAL};
