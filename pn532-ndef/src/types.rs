// pn532-ndef/src/types.rs

use crate::Error;

/// ISO14443A UID. Tags report 4, 7 or 10 byte identifiers; the newtype
/// stores the maximum and tracks the reported length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 10],
    len: usize,
}

impl Uid {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() > 10 {
            return Err(Error::InvalidLength {
                expected: 10,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 10];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// Everything InListPassiveTarget reports about a detected tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub atqa: u16,
    pub sak: u8,
    pub uid: Uid,
}

/// Baud rate / modulation selector for passive target detection.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudModulation {
    /// 106 kbps ISO14443A, the common card rate
    Iso14443a = 0x00,
    Iso14443b = 0x03,
}

/// GetFirmwareVersion response fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.version, self.revision)
    }
}

/// NTAG21x model, identified by the capability byte at page 3, byte 2.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagModel {
    Ntag213 = 0x12,
    Ntag215 = 0x3E,
    Ntag216 = 0x6D,
}

impl TagModel {
    pub fn from_capability_byte(byte: u8) -> Option<Self> {
        match byte {
            0x12 => Some(Self::Ntag213),
            0x3E => Some(Self::Ntag215),
            0x6D => Some(Self::Ntag216),
            _ => None,
        }
    }

    /// One past the last user-data page.
    pub fn end_user_page(&self) -> u8 {
        match self {
            Self::Ntag213 => 0x27,
            Self::Ntag215 => 0x81,
            Self::Ntag216 => 0xE1,
        }
    }

    /// User-data capacity in bytes (pages 4..end, 4 bytes per page).
    pub fn user_capacity(&self) -> usize {
        (self.end_user_page() as usize - crate::constants::NTAG_FIRST_USER_PAGE as usize)
            * crate::constants::NTAG_PAGE_SIZE
    }
}
