// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
extern crate alloc;

use alloc::rc::Rc;
use core::cell::{Ref, RefCell};
use core::ops::RangeInclusive;

use arrayvec::ArrayVec;
use embedded_hal::blocking::i2c;

use crate::frames::{HAND_FRAME, ROOM_THERMISTOR};

/// The number of addressable registers on the sensor.
const REGISTER_COUNT: usize = 0x100;

const POWER_CONTROL: u8 = 0x00;
const RESET: u8 = 0x01;
const FRAME_RATE: u8 = 0x02;
const STATUS: u8 = 0x04;
const RESERVED: u8 = 0x06;
const THERMISTOR_LOW: u8 = 0x0E;
const THERMISTOR_HIGH: u8 = 0x0F;
const PIXEL_BASE: u8 = 0x80;

const RESET_FLAG: u8 = 0x30;
const RESET_INITIAL: u8 = 0x3F;

const VALID_POWER_MODES: [u8; 4] = [0x00, 0x10, 0x20, 0x21];

const VALID_FRAME_RATES: [u8; 2] = [0x00, 0x01];

/// Registers the controller is allowed to write, apart from `STATUS` and `RESERVED`.
const WRITABLE_REGISTERS: RangeInclusive<u8> = 0x00..=0x0D;

const RECENT_OPERATIONS_QUEUE_LENGTH: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MockError {
    /// The given register is read-only (or reserved).
    IllegalWriteAddress(u8),

    /// The given value is illegal for the given register.
    IllegalWriteValue(u8, u8),

    /// A read would run off the end of the register space.
    IllegalAccess(u8),

    /// An unknown I2C address was given, so nothing acknowledged.
    UnknownI2cAddress(u8),

    /// The requested operation is not allowed.
    ///
    /// This covers write-read transactions that write more than a register address, and reads of
    /// zero bytes.
    IllegalOperation,

    /// The mock was told to fail writes to this register.
    InjectedFailure(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum I2cOperation {
    /// An empty write, used to check for an acknowledgement.
    Probe,
    Write { register: u8, length: usize },
    Read { register: u8, length: usize },
}

/// A simulated Grid-EYE.
///
/// Clones share the same state, so a test can keep a handle to the mock while a driver owns
/// another.
#[derive(Clone, Debug)]
pub struct MockGridEye {
    i2c_address: u8,
    registers: Rc<RefCell<[u8; REGISTER_COUNT]>>,
    failing_register: Rc<RefCell<Option<u8>>>,
    recent_operations: Rc<RefCell<ArrayVec<I2cOperation, RECENT_OPERATIONS_QUEUE_LENGTH>>>,
}

impl MockGridEye {
    pub fn new(i2c_address: u8, frame: &[u8], thermistor: [u8; 2]) -> Self {
        let mock = Self {
            i2c_address,
            registers: Rc::new(RefCell::new([0u8; REGISTER_COUNT])),
            failing_register: Rc::new(RefCell::new(None)),
            recent_operations: Rc::new(RefCell::new(ArrayVec::new())),
        };
        mock.update_frame(frame);
        mock.set_thermistor(thermistor);
        mock
    }

    /// The current value of a register.
    pub fn register(&self, register: u8) -> u8 {
        self.registers.borrow()[register as usize]
    }

    /// Replace the pixel data, simulating a new frame being captured.
    pub fn update_frame(&self, frame: &[u8]) {
        let start = PIXEL_BASE as usize;
        self.registers.borrow_mut()[start..(start + frame.len())].copy_from_slice(frame);
    }

    pub fn set_thermistor(&self, thermistor: [u8; 2]) {
        let mut registers = self.registers.borrow_mut();
        registers[THERMISTOR_LOW as usize] = thermistor[0];
        registers[THERMISTOR_HIGH as usize] = thermistor[1];
    }

    /// Make every write to `register` fail, or stop failing writes with `None`.
    pub fn fail_writes_to(&self, register: Option<u8>) {
        *self.failing_register.borrow_mut() = register;
    }

    fn set(&self, register: u8, value: u8) -> Result<(), MockError> {
        if !WRITABLE_REGISTERS.contains(&register) || register == STATUS || register == RESERVED {
            return Err(MockError::IllegalWriteAddress(register));
        }
        let valid = match register {
            POWER_CONTROL => VALID_POWER_MODES.contains(&value),
            FRAME_RATE => VALID_FRAME_RATES.contains(&value),
            RESET => value == RESET_FLAG || value == RESET_INITIAL,
            _ => true,
        };
        if !valid {
            return Err(MockError::IllegalWriteValue(register, value));
        }
        let mut registers = self.registers.borrow_mut();
        match (register, value) {
            (RESET, RESET_INITIAL) => {
                // Back to power-on values, but the sensor data stays put.
                registers[..(THERMISTOR_LOW as usize)]
                    .iter_mut()
                    .for_each(|r| *r = 0);
            }
            (RESET, _) => registers[STATUS as usize] = 0,
            _ => registers[register as usize] = value,
        }
        Ok(())
    }

    fn add_operation(&self, operation: I2cOperation) {
        let mut recent_ops = self.recent_operations.borrow_mut();
        if recent_ops.is_full() {
            recent_ops.pop();
        }
        recent_ops.insert(0, operation);
    }

    /// Operations performed on the bus, most recent first.
    pub fn recent_operations(
        &self,
    ) -> Ref<'_, ArrayVec<I2cOperation, RECENT_OPERATIONS_QUEUE_LENGTH>> {
        self.recent_operations.borrow()
    }

    pub fn clear_recent_operations(&self) {
        self.recent_operations.borrow_mut().clear()
    }

    /// Count the writes made to `register` that are still in the recent operations log.
    pub fn writes_to(&self, register: u8) -> usize {
        self.recent_operations()
            .iter()
            .filter(|op| matches!(op, I2cOperation::Write { register: r, .. } if *r == register))
            .count()
    }
}

impl i2c::Write for MockGridEye {
    type Error = MockError;

    fn write(&mut self, i2c_address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if i2c_address != self.i2c_address {
            return Err(MockError::UnknownI2cAddress(i2c_address));
        }
        let (register, payload) = match bytes.split_first() {
            Some((register, payload)) => (*register, payload),
            None => {
                self.add_operation(I2cOperation::Probe);
                return Ok(());
            }
        };
        if *self.failing_register.borrow() == Some(register) {
            return Err(MockError::InjectedFailure(register));
        }
        // Multi-byte writes auto-increment the register address.
        for (offset, value) in payload.iter().enumerate() {
            self.set(register.wrapping_add(offset as u8), *value)?;
        }
        self.add_operation(I2cOperation::Write {
            register,
            length: payload.len(),
        });
        Ok(())
    }
}

impl i2c::WriteRead for MockGridEye {
    type Error = MockError;

    fn write_read(
        &mut self,
        i2c_address: u8,
        write_buffer: &[u8],
        out_buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        if i2c_address != self.i2c_address {
            return Err(MockError::UnknownI2cAddress(i2c_address));
        }
        // Write-reads should only be writing the register address.
        if write_buffer.len() != 1 || out_buffer.is_empty() {
            return Err(MockError::IllegalOperation);
        }
        let start = write_buffer[0] as usize;
        let end = start + out_buffer.len();
        if end > REGISTER_COUNT {
            return Err(MockError::IllegalAccess(write_buffer[0]));
        }
        self.add_operation(I2cOperation::Read {
            register: write_buffer[0],
            length: out_buffer.len(),
        });
        out_buffer.copy_from_slice(&self.registers.borrow()[start..end]);
        Ok(())
    }
}

/// A mock sensor at the given address, showing [`HAND_FRAME`] with the thermistor at 25℃.
pub fn mock_grideye_at_address(i2c_address: u8) -> MockGridEye {
    MockGridEye::new(i2c_address, &HAND_FRAME[..], ROOM_THERMISTOR)
}

#[cfg(test)]
mod test {
    use embedded_hal::blocking::i2c::{Write, WriteRead};

    use super::*;

    #[test]
    fn rejects_read_only_writes() {
        let mut mock = mock_grideye_at_address(0x68);
        assert_eq!(
            mock.write(0x68, &[THERMISTOR_LOW, 0x00]),
            Err(MockError::IllegalWriteAddress(THERMISTOR_LOW))
        );
        assert_eq!(
            mock.write(0x68, &[PIXEL_BASE, 0x00]),
            Err(MockError::IllegalWriteAddress(PIXEL_BASE))
        );
    }

    #[test]
    fn rejects_reserved_and_status_writes() {
        let mut mock = mock_grideye_at_address(0x68);
        assert_eq!(
            mock.write(0x68, &[RESERVED, 0x00]),
            Err(MockError::IllegalWriteAddress(RESERVED))
        );
        assert_eq!(
            mock.write(0x68, &[STATUS, 0x00]),
            Err(MockError::IllegalWriteAddress(STATUS))
        );
        // The neighbouring average register is still writable.
        assert!(mock.write(0x68, &[0x07, 0x20]).is_ok());
        assert_eq!(mock.register(0x07), 0x20);
    }

    #[test]
    fn rejects_invalid_values() {
        let mut mock = mock_grideye_at_address(0x68);
        assert_eq!(
            mock.write(0x68, &[FRAME_RATE, 0x05]),
            Err(MockError::IllegalWriteValue(FRAME_RATE, 0x05))
        );
        assert_eq!(
            mock.write(0x68, &[POWER_CONTROL, 0x01]),
            Err(MockError::IllegalWriteValue(POWER_CONTROL, 0x01))
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut mock = mock_grideye_at_address(0x68);
        mock.write(0x68, &[FRAME_RATE, 0x01]).unwrap();
        assert_eq!(mock.register(FRAME_RATE), 0x01);
        mock.write(0x68, &[RESET, RESET_INITIAL]).unwrap();
        assert_eq!(mock.register(FRAME_RATE), 0x00);
        // Sensor data is untouched
        assert_eq!(mock.register(PIXEL_BASE), HAND_FRAME[0]);
        assert_eq!(mock.register(THERMISTOR_LOW), ROOM_THERMISTOR[0]);
    }

    #[test]
    fn read_pixels() {
        let mut mock = mock_grideye_at_address(0x69);
        let mut buf = [0u8; 128];
        mock.write_read(0x69, &[PIXEL_BASE], &mut buf).unwrap();
        assert_eq!(buf, HAND_FRAME);
        assert_eq!(
            mock.recent_operations()[0],
            I2cOperation::Read {
                register: PIXEL_BASE,
                length: 128
            }
        );
    }

    #[test]
    fn read_past_end() {
        let mut mock = mock_grideye_at_address(0x69);
        let mut buf = [0u8; 4];
        assert_eq!(
            mock.write_read(0x69, &[0xFE], &mut buf),
            Err(MockError::IllegalAccess(0xFE))
        );
    }

    #[test]
    fn operation_log_is_bounded() {
        let mut mock = mock_grideye_at_address(0x68);
        for _ in 0..(RECENT_OPERATIONS_QUEUE_LENGTH + 5) {
            mock.write(0x68, &[]).unwrap();
        }
        mock.write(0x68, &[FRAME_RATE, 0x00]).unwrap();
        let ops = mock.recent_operations();
        assert_eq!(ops.len(), RECENT_OPERATIONS_QUEUE_LENGTH);
        assert_eq!(
            ops[0],
            I2cOperation::Write {
                register: FRAME_RATE,
                length: 1
            }
        );
    }
}
