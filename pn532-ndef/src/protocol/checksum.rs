// pn532-ndef/src/protocol/checksum.rs

/// Length checksum: LEN + LCS must be 0 mod 256.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over the direction byte and payload:
/// direction + sum(payload) + DCS must be 0 mod 256.
pub fn dcs(direction: u8, payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(direction, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
