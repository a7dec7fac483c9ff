// pn532-ndef/src/protocol/responses.rs
//! Response payload decoders. Input is the compacted frame payload as left
//! in the scratch buffer by `Frame::decode_response`: command echo first,
//! then the positional fields.

use crate::constants::{
    RESP_IN_DATA_EXCHANGE, RESP_IN_LIST_PASSIVE_TARGET, RESP_SAM_CONFIGURATION,
};
use crate::protocol::parser::{byte_at, be_u16_at, expect_response_code, slice_at};
use crate::types::{FirmwareVersion, TargetInfo, Uid};
use crate::{Error, Result};

/// SAMConfiguration only echoes its command code.
pub fn check_sam_configuration(data: &[u8]) -> Result<()> {
    expect_response_code(data, RESP_SAM_CONFIGURATION)
}

/// GetFirmwareVersion: echo, IC, version, revision, support bitfield.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    Ok(FirmwareVersion {
        ic: byte_at(data, 1)?,
        version: byte_at(data, 2)?,
        revision: byte_at(data, 3)?,
        support: byte_at(data, 4)?,
    })
}

/// InListPassiveTarget: echo, target count, then per-target
/// {slot, ATQA(2, big-endian), SAK, uid length, uid bytes}.
/// `None` when the chip saw no tag before its retry budget ran out.
pub fn decode_passive_target(data: &[u8]) -> Result<Option<TargetInfo>> {
    expect_response_code(data, RESP_IN_LIST_PASSIVE_TARGET)?;
    if byte_at(data, 1)? == 0 {
        return Ok(None);
    }

    let atqa = be_u16_at(data, 3)?;
    let sak = byte_at(data, 5)?;
    let uid_len = byte_at(data, 6)? as usize;
    let uid = Uid::from_slice(slice_at(data, 7, uid_len)?)?;

    Ok(Some(TargetInfo { atqa, sak, uid }))
}

/// InDataExchange: echo, status, then the target's reply. A non-zero
/// status means the exchange failed on the RF side.
pub fn decode_data_exchange(data: &[u8]) -> Result<&[u8]> {
    expect_response_code(data, RESP_IN_DATA_EXCHANGE)?;
    let status = byte_at(data, 1)?;
    if status != 0 {
        return Err(Error::Status { status });
    }
    Ok(&data[2..])
}
