// pn532-ndef/src/ntag.rs
//! NTAG21x page-level operations, layered on the reader's data-exchange
//! primitive. Pages are 4 bytes; pages 0-3 are reserved and page 3 byte 2
//! identifies the model.

use log::debug;

use crate::constants::{NTAG_FIRST_USER_PAGE, NTAG_PAGE_SIZE, NXP_CMD_READ, NXP_CMD_WRITE};
use crate::reader::{Initialized, Reader};
use crate::types::TagModel;
use crate::{Error, Result};

/// Identify the tag model from the capability byte on page 3.
pub fn model(reader: &mut Reader<Initialized>) -> Result<TagModel> {
    let page = read_page(reader, 3)?;
    TagModel::from_capability_byte(page[2])
        .ok_or_else(|| Error::UnsupportedOperation("unknown tag model".into()))
}

/// READ fetches four consecutive pages (16 bytes) starting at `start`.
pub fn read_pages(reader: &mut Reader<Initialized>, start: u8) -> Result<[u8; 16]> {
    let cmd = [NXP_CMD_READ, start];
    let mut buf = [0u8; 16];
    let n = reader.data_exchange(&cmd, &mut buf)?;
    if n != 16 {
        return Err(Error::InvalidLength {
            expected: 16,
            actual: n,
        });
    }
    Ok(buf)
}

/// Read a single 4-byte page.
pub fn read_page(reader: &mut Reader<Initialized>, page: u8) -> Result<[u8; 4]> {
    let pages = read_pages(reader, page)?;
    let mut out = [0u8; 4];
    out.copy_from_slice(&pages[..NTAG_PAGE_SIZE]);
    Ok(out)
}

/// Read the user area (page 4 up to the model's limit) into `buf`.
/// Stops at the buffer capacity, the model's last page, or the first
/// failed read; bytes read so far are kept and the count returned.
pub fn read_user_pages(reader: &mut Reader<Initialized>, buf: &mut [u8]) -> Result<usize> {
    let model = model(reader)?;
    let end = model.end_user_page();
    debug!("reading user pages, model {:?}", model);

    let mut head = 0;
    let mut page = NTAG_FIRST_USER_PAGE;
    while page < end {
        if head + 16 >= buf.len() {
            break;
        }
        match read_pages(reader, page) {
            Ok(chunk) => {
                buf[head..head + 16].copy_from_slice(&chunk);
                head += 16;
            }
            // Partial reads are surfaced, not discarded
            Err(_) => break,
        }
        page += 4;
    }
    Ok(head)
}

/// WRITE stores one 4-byte page.
pub fn write_page(reader: &mut Reader<Initialized>, page: u8, data: &[u8; 4]) -> Result<()> {
    let cmd = [NXP_CMD_WRITE, page, data[0], data[1], data[2], data[3]];
    reader.data_exchange(&cmd, &mut [])?;
    Ok(())
}

/// Fill the whole user area from `data`, page by page. `data` must cover
/// every user page of the detected model; a write failure aborts.
pub fn write_user_data(reader: &mut Reader<Initialized>, data: &[u8]) -> Result<()> {
    // Model detection can fail on a freshly-selected tag; the smallest
    // model is the conservative fallback.
    let model = model(reader).unwrap_or(TagModel::Ntag213);
    let end = model.end_user_page();

    let mut head = 0;
    for page in NTAG_FIRST_USER_PAGE..end {
        if head + NTAG_PAGE_SIZE > data.len() {
            return Err(Error::BufferTooSmall {
                needed: head + NTAG_PAGE_SIZE,
                capacity: data.len(),
            });
        }
        let chunk = [data[head], data[head + 1], data[head + 2], data[head + 3]];
        write_page(reader, page, &chunk)?;
        head += NTAG_PAGE_SIZE;
    }
    Ok(())
}
