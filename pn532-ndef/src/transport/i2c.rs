// pn532-ndef/src/transport/i2c.rs

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::constants::I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::Result;

/// Linux userspace I2C transport over `/dev/i2c-*`.
///
/// Pin and clock configuration belong to the platform; by the time a device
/// node exists the bus is already set up.
pub struct I2cTransport {
    dev: LinuxI2CDevice,
}

impl I2cTransport {
    /// Open the given device node at the PN532's default address.
    pub fn open(path: &str) -> Result<Self> {
        let dev = LinuxI2CDevice::new(path, I2C_ADDRESS)?;
        Ok(Self { dev })
    }

    /// Open with a non-default chip address.
    pub fn open_with_address(path: &str, address: u16) -> Result<Self> {
        let dev = LinuxI2CDevice::new(path, address)?;
        Ok(Self { dev })
    }
}

impl Transport for I2cTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.dev.write(data)?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        self.dev.read(buf)?;
        Ok(())
    }

    fn status(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.dev.read(&mut byte)?;
        Ok(byte[0])
    }
}
