// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use embedded_hal::blocking::i2c;

/// A register-addressed bus the sensor can be reached over.
///
/// Most users will want [`I2cTransport`], which wraps any `embedded-hal` I²C implementation.
/// Implementing this trait directly is useful for buses that can report partial transfers, or for
/// test doubles.
pub trait Transport {
    type Error;

    /// Check that a device acknowledges at `address`, without writing anything to it.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Write `bytes` to the device at `address`. The first byte is the register address.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Read a block of registers, starting at `register`, into `buffer`.
    ///
    /// The returned count is the number of bytes the device actually delivered, which may be less
    /// than the length of `buffer`. Anything in `buffer` past that count is unspecified.
    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

/// A [`Transport`] for `embedded-hal` blocking I²C buses.
///
/// `embedded-hal` reads either fill the buffer or fail, so [`read_block`][Transport::read_block]
/// always reports the full length on success.
#[derive(Clone, Debug)]
pub struct I2cTransport<I2C> {
    bus: I2C,
}

impl<I2C> I2cTransport<I2C> {
    /// Wrap an `embedded-hal` I²C bus.
    pub fn new(bus: I2C) -> Self {
        Self { bus }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.bus
    }

    /// The wrapped bus.
    pub fn bus(&self) -> &I2C {
        &self.bus
    }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    type Error = E;

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        // An empty write is just the address byte, which is enough to see if there's an ACK.
        self.bus.write(address, &[])
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(address, bytes)
    }

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.bus.write_read(address, &[register], buffer)?;
        Ok(buffer.len())
    }
}

#[cfg(test)]
mod test {
    use grideye_test_data::{mock_grideye_at_address, I2cOperation};

    use super::*;
    use crate::register::Register;

    #[test]
    fn probe() {
        let mut transport = I2cTransport::new(mock_grideye_at_address(0x68));
        assert!(transport.probe(0x68).is_ok());
        assert!(transport.probe(0x69).is_err());
        assert_eq!(
            transport.bus().recent_operations()[0],
            I2cOperation::Probe
        );
    }

    #[test]
    fn read_full_block() {
        let mut transport = I2cTransport::new(mock_grideye_at_address(0x69));
        let mut buffer = [0u8; 128];
        let count = transport
            .read_block(0x69, Register::PixelBase.address(), &mut buffer)
            .unwrap();
        assert_eq!(count, 128);
        assert_eq!(
            transport.bus().recent_operations()[0],
            I2cOperation::Read {
                register: 0x80,
                length: 128
            }
        );
    }

    #[test]
    fn write_register() {
        let mut transport = I2cTransport::new(mock_grideye_at_address(0x68));
        transport
            .write(0x68, &[Register::FrameRate.address(), 0x01])
            .unwrap();
        assert_eq!(transport.bus().register(Register::FrameRate.address()), 0x01);
        let bus = transport.release();
        assert_eq!(bus.recent_operations().len(), 1);
    }
}
