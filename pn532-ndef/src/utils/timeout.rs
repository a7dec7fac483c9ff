// pn532-ndef/src/utils/timeout.rs
//! Timeout helpers. The chip-side handshake polls at a fixed 1ms
//! granularity; these constants centralize the defaults.

use std::time::Duration;

/// Default per-command timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Interval between ready polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
