// pn532-ndef/src/lib.rs

//! pn532-ndef
//!
//! Pure Rust driver for PN532 contactless tag readers with NDEF message
//! parsing. The wire protocol runs over any [`transport::Transport`];
//! decoding tag memory into records needs no hardware at all.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod ndef;
pub mod ntag;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
