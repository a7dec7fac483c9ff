// pn532-ndef/src/protocol/commands.rs
//! Command payload builders. Each returns the bytes that go between the
//! direction byte and the data checksum of an outgoing frame.

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_RF_CONFIGURATION, CMD_RF_REGULATION_TEST, CMD_SAM_CONFIGURATION,
};
use crate::types::BaudModulation;

pub fn get_firmware_version() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE_VERSION]
}

/// Normal mode, 50ms * 0x14 = 1s timeout, IRQ pin unused.
pub fn sam_configuration() -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, 0x01, 0x14, 0x00]
}

/// RFConfiguration item 0x05 (MaxRetries). MxRtyATR and MxRtyPSL keep
/// their defaults; only the passive activation retry count varies.
/// 0xFF retries forever.
pub fn set_passive_activation_retries(retries: u8) -> Vec<u8> {
    vec![CMD_RF_CONFIGURATION, 0x05, 0xFF, 0x01, retries]
}

/// Starts the transceiver self-test; it runs until another command stops it.
pub fn rf_regulation_test() -> Vec<u8> {
    vec![CMD_RF_REGULATION_TEST, 0x00]
}

/// Detect at most one passive target at the given modulation.
pub fn in_list_passive_target(baud: BaudModulation) -> Vec<u8> {
    vec![CMD_IN_LIST_PASSIVE_TARGET, 0x01, baud as u8]
}

/// Exchange raw bytes with the selected target. Only slot 1 is supported.
pub fn in_data_exchange(send: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + send.len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(0x01);
    buf.extend_from_slice(send);
    buf
}
