// pn532-ndef/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 wire frame preamble + start codes: 0x00 0x00 0xFF
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// Direction byte for host -> PN532 frames
pub const HOST_TO_PN532: u8 = 0xD4;

/// Direction byte for PN532 -> host frames
pub const PN532_TO_HOST: u8 = 0xD5;

/// Fixed acknowledgment pattern sent by the chip after a valid command
pub const ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Status byte prefixed to every chip read: bus busy
pub const STATUS_BUSY: u8 = 0x00;

/// Status byte prefixed to every chip read: response available
pub const STATUS_READY: u8 = 0x01;

/// Maximum command payload length (the frame LEN field counts payload + direction)
pub const MAX_PAYLOAD_LEN: usize = 254;

/// Frame overhead around the payload: preamble(3) + len(1) + lcs(1) +
/// direction(1) + dcs(1) + postamble(1)
pub const FRAME_OVERHEAD: usize = 8;

/// GetFirmwareVersion command code
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration command code
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// RFConfiguration command code
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
/// RFRegulationTest command code
pub const CMD_RF_REGULATION_TEST: u8 = 0x58;
/// InListPassiveTarget command code
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// InDataExchange command code
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;

/// SAMConfiguration response echo (command code + 1)
pub const RESP_SAM_CONFIGURATION: u8 = 0x15;
/// InListPassiveTarget response echo
pub const RESP_IN_LIST_PASSIVE_TARGET: u8 = 0x4B;
/// InDataExchange response echo
pub const RESP_IN_DATA_EXCHANGE: u8 = 0x41;

/// NXP Type 2 tag READ command, issued through InDataExchange
pub const NXP_CMD_READ: u8 = 0x30;
/// NXP Type 2 tag WRITE command, issued through InDataExchange
pub const NXP_CMD_WRITE: u8 = 0xA2;

/// NTAG21x page size in bytes
pub const NTAG_PAGE_SIZE: usize = 4;

/// First user-data page on NTAG21x tags (pages 0-3 are reserved)
pub const NTAG_FIRST_USER_PAGE: u8 = 4;

/// Default PN532 I2C address (7-bit)
pub const I2C_ADDRESS: u16 = 0x48 >> 1;

/// NDEF message TLV tag byte
pub const TLV_NDEF_TAG: u8 = 0x03;

/// TLV terminator byte
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Scratch buffer size shared by all reader operations
pub const SCRATCH_LEN: usize = 1024;
