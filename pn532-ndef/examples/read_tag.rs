//! Read the first NDEF record from a tag held against an I2C-attached
//! PN532 breakout.
//!
//! Usage:
//!   cargo run -p pn532-ndef --example read_tag --features i2c --release

use pn532_ndef::transport::I2cTransport;
use pn532_ndef::{BaudModulation, Reader, Result};

fn main() -> Result<()> {
    env_logger::init();

    let transport = I2cTransport::open("/dev/i2c-1")?;
    let mut reader = Reader::new(Box::new(transport)).initialize()?;

    let fw = reader.firmware_version()?;
    println!("PN532 firmware {fw}");

    reader.set_passive_activation_retries(0xFF)?;
    println!("Hold a tag against the antenna...");

    match reader.detect_target(BaudModulation::Iso14443a, 0)? {
        Some(target) => {
            println!("Tag {} (ATQA {:#06x})", target.uid.to_hex(), target.atqa);
        }
        None => {
            println!("No tag found");
            return Ok(());
        }
    }

    // The tag is already selected; read and decode its first record
    match reader.read_first_record(1000) {
        Ok(text) => println!("Record: {text}"),
        Err(err) => println!("Tag holds no readable record: {err}"),
    }

    Ok(())
}
