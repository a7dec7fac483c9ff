use pn532_ndef::protocol::commands;
use pn532_ndef::types::BaudModulation;

#[test]
fn sam_configuration_payload() {
    // Normal mode, 1s timeout, no IRQ
    assert_eq!(commands::sam_configuration(), [0x14, 0x01, 0x14, 0x00]);
}

#[test]
fn passive_activation_retries_payload() {
    assert_eq!(
        commands::set_passive_activation_retries(0x05),
        [0x32, 0x05, 0xFF, 0x01, 0x05]
    );
}

#[test]
fn in_list_passive_target_per_modulation() {
    assert_eq!(
        commands::in_list_passive_target(BaudModulation::Iso14443a),
        [0x4A, 0x01, 0x00]
    );
    assert_eq!(
        commands::in_list_passive_target(BaudModulation::Iso14443b),
        [0x4A, 0x01, 0x03]
    );
}

#[test]
fn in_data_exchange_targets_slot_one() {
    let payload = commands::in_data_exchange(&[0x30, 0x04]);
    assert_eq!(payload, [0x40, 0x01, 0x30, 0x04]);
}

#[test]
fn rf_regulation_test_payload() {
    assert_eq!(commands::rf_regulation_test(), [0x58, 0x00]);
}
