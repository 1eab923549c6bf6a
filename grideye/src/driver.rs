// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

use log::{debug, trace, warn};
use paste::paste;

use crate::calculations::*;
use crate::error::Error;
use crate::register::*;
use crate::transport::{I2cTransport, Transport};

/// DRY macro for the `set_*` methods in `GridEye` that write a single [`Setting`].
macro_rules! write_setting {
    { $field:ident, $typ:ty, $doc:literal } => {
    paste! {
        #[doc = $doc]
        pub fn [< set_ $field >](&mut self, new_value: $typ) -> Result<(), Error<T::Error>> {
            debug!("Setting {} to {:?}", stringify!($field), new_value);
            self.write_setting(new_value)
        }
    }};
}

/// Selects one byte of a pixel's register pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RawByte {
    /// The least significant byte, stored first.
    Low,

    /// The most significant byte.
    High,
}

impl RawByte {
    fn offset(self) -> usize {
        match self {
            RawByte::Low => 0,
            RawByte::High => 1,
        }
    }
}

/// Driver for a Panasonic Grid-EYE 8×8 infrared array.
///
/// The driver keeps a copy of the most recent frame, both as the raw register contents and as
/// temperatures. Both are zeroed when the driver is created and only change when
/// [`sample`][GridEye::sample] is called. Nothing stops `sample` from being called before
/// [`initialize`][GridEye::initialize], it will just read whatever the sensor happens to have.
#[derive(Clone, Debug)]
pub struct GridEye<T> {
    /// The bus the sensor is accessible on.
    transport: T,

    /// The address the sensor is accessible at.
    address: u8,

    /// The pixel registers as of the last sample.
    raw: [u8; NUM_BYTES],

    /// Temperatures in ℃, converted from `raw`.
    temperatures: [f32; NUM_PIXELS],
}

impl<T> GridEye<T>
where
    T: Transport,
{
    /// Create a driver for the sensor at `address`.
    ///
    /// This does not touch the bus. Use [`DEFAULT_ADDRESS`] unless the AD_SELECT pin has been
    /// pulled high, in which case the sensor is at [`ALTERNATE_ADDRESS`].
    pub fn new(transport: T, address: u8) -> Self {
        Self {
            transport,
            address,
            raw: [0u8; NUM_BYTES],
            temperatures: [0f32; NUM_PIXELS],
        }
    }

    /// Check for the sensor, then reset it and start continuous sampling at 10 frames per second.
    ///
    /// If the sensor doesn't respond, nothing is written. Otherwise the reset, power mode and frame
    /// rate registers are written in that order, stopping at the first failure. Nothing is
    /// retried, and after a failure the sensor's configuration is unknown, so `initialize` should
    /// be called again before relying on it.
    pub fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.transport.probe(self.address).map_err(|err| {
            warn!("No Grid-EYE found at 0x{:02X}", self.address);
            Error::NotPresent(err)
        })?;
        debug!("Found Grid-EYE at 0x{:02X}", self.address);
        self.write_setting(ResetCommand::Initial)?;
        self.write_setting(PowerMode::default())?;
        self.write_setting(FrameRate::default())?;
        debug!("Grid-EYE at 0x{:02X} initialized", self.address);
        Ok(())
    }

    /// Read a new frame from the sensor.
    ///
    /// The returned count is the number of bytes the sensor actually delivered. A full frame is
    /// [`NUM_BYTES`] bytes; anything less is a short transfer, in which case the missing bytes are
    /// treated as zero. Either way both the raw data and the temperatures are completely
    /// replaced. If the transfer fails outright it is treated as delivering nothing: both buffers
    /// are zeroed and the transport's error is returned.
    pub fn sample(&mut self) -> Result<usize, Error<T::Error>> {
        let mut buffer = [0u8; NUM_BYTES];
        let read =
            self.transport
                .read_block(self.address, Register::PixelBase.address(), &mut buffer);
        let count = match read {
            Ok(count) => count.min(NUM_BYTES),
            Err(err) => {
                warn!("Reading pixels from Grid-EYE at 0x{:02X} failed", self.address);
                self.raw.fill(0);
                raw_pixels_to_temperatures(&self.raw, &mut self.temperatures);
                return Err(Error::Transfer(err));
            }
        };
        if count < NUM_BYTES {
            warn!(
                "Short transfer from Grid-EYE: {} of {} bytes",
                count, NUM_BYTES
            );
        }
        self.raw[..count].copy_from_slice(&buffer[..count]);
        self.raw[count..].fill(0);
        raw_pixels_to_temperatures(&self.raw, &mut self.temperatures);
        trace!("Sampled {} bytes from 0x{:02X}", count, self.address);
        Ok(count)
    }

    /// The temperature of a pixel in ℃, or `None` if the coordinate is outside the array.
    pub fn temperature(&self, column: usize, row: usize) -> Option<f32> {
        pixel_index(column, row).map(|index| self.temperatures[index])
    }

    /// The temperature of a pixel in ℃, with 0.0 for coordinates outside the array.
    ///
    /// Note that 0.0 is also a perfectly good temperature, use
    /// [`temperature`][GridEye::temperature] if the difference matters.
    pub fn cell(&self, column: usize, row: usize) -> f32 {
        self.temperature(column, row).unwrap_or(0.0)
    }

    /// One byte of a pixel's raw register pair, or `None` if the coordinate is outside the array.
    pub fn raw_byte(&self, column: usize, row: usize, byte: RawByte) -> Option<u8> {
        pixel_index(column, row).map(|index| self.raw[index * 2 + byte.offset()])
    }

    /// One byte of a pixel's raw register pair, with 0 for coordinates outside the array.
    pub fn cell_raw(&self, column: usize, row: usize, byte: RawByte) -> u8 {
        self.raw_byte(column, row, byte).unwrap_or(0)
    }

    /// All of the temperatures from the last sample, row-major.
    pub fn temperatures(&self) -> &[f32; NUM_PIXELS] {
        &self.temperatures
    }

    /// The raw pixel registers from the last sample.
    pub fn raw_data(&self) -> &[u8; NUM_BYTES] {
        &self.raw
    }

    /// Read the sensor's on-chip thermistor, in ℃.
    pub fn ambient_temperature(&mut self) -> Result<f32, Error<T::Error>> {
        let mut buffer = [0u8; 2];
        let count = self
            .transport
            .read_block(
                self.address,
                Register::ThermistorLow.address(),
                &mut buffer,
            )
            .map_err(Error::Transfer)?;
        // Same treatment as the pixels, anything missing is zero.
        buffer[count.min(2)..].fill(0);
        Ok(thermistor_to_celsius(buffer[0], buffer[1]))
    }

    write_setting! {
        frame_rate,
        FrameRate,
        "Change the frame rate. [`initialize`][GridEye::initialize] resets it to 10 FPS."
    }

    write_setting! {
        power_mode,
        PowerMode,
        "Change the operating mode. [`initialize`][GridEye::initialize] resets it to normal."
    }

    /// The address the sensor is being accessed at.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The width of the thermal image, in pixels.
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// The height of the thermal image, in pixels.
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Give the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    fn write_setting<S: Setting>(&mut self, setting: S) -> Result<(), Error<T::Error>> {
        let register = S::register();
        self.transport
            .write(self.address, &[register.address(), setting.into()])
            .map_err(|source| {
                warn!("Writing Grid-EYE register {:?} failed", register);
                Error::ConfigurationWrite { register, source }
            })
    }
}

impl<I2C> GridEye<I2cTransport<I2C>>
where
    I2cTransport<I2C>: Transport,
{
    /// Create a driver using an `embedded-hal` I²C bus.
    pub fn new_i2c(bus: I2C, address: u8) -> Self {
        Self::new(I2cTransport::new(bus), address)
    }

    /// Give the I²C bus back.
    pub fn release_bus(self) -> I2C {
        self.release().release()
    }
}
