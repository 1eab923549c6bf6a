// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! A pure-Rust library for reading Panasonic Grid-EYE (AMG88xx) infrared array sensors.
//!
//! The Grid-EYE is an 8×8 array of thermopiles with an I²C interface. Unlike some other thermal
//! cameras, the temperature calculations are done on the sensor itself, so reading an image is a
//! matter of pulling 128 bytes out of the sensor's registers and scaling them.
//!
//! This library uses the [`embedded-hal`][embedded-hal] I²C traits through [`I2cTransport`],
//! meaning you should be able to use it on any platform with an `embedded-hal` I²C
//! implementation. Other buses can be used by implementing [`Transport`]. This library is also
//! `no_std` compatible, and does not allocate.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/*/embedded_hal/blocking/i2c/index.html
//!
//! # Example
//! ```no_run
//! use std::thread::sleep;
//! use std::time::Duration;
//! use grideye::{GridEyeDriver, DEFAULT_ADDRESS};
//! use linux_embedded_hal::I2cdev;
//!
//! let i2c_bus = I2cdev::new("/dev/i2c-1").expect("/dev/i2c-1 needs to be an I2C controller");
//! let mut sensor = GridEyeDriver::new_i2c(i2c_bus, DEFAULT_ADDRESS);
//! sensor.initialize()?;
//! // Default frame rate is 10Hz
//! sleep(Duration::from_millis(100));
//! sensor.sample()?;
//! println!("Top left pixel: {}℃", sensor.cell(0, 0));
//! # Ok::<(), grideye::Error<linux_embedded_hal::i2cdev::linux::LinuxI2CError>>(())
//! ```
//!
//! # Coordinates
//! Pixels are addressed by (column, row), with (0, 0) in the top left corner as seen by the
//! sensor. Temperatures and raw data are stored row-major. Coordinates outside of the array can
//! be handled two ways: the lenient accessors ([`GridEye::cell`] and [`GridEye::cell_raw`])
//! return zero, while the strict accessors ([`GridEye::temperature`] and [`GridEye::raw_byte`])
//! return `None`.

#![no_std]
#![allow(clippy::float_cmp)]

pub mod calculations;
#[doc(hidden)]
pub mod driver;
#[doc(hidden)]
pub mod error;
pub mod register;
#[cfg(test)]
mod test;
mod transport;

#[doc(inline)]
pub use driver::{GridEye, RawByte};
#[doc(inline)]
pub use error::Error;
pub use register::*;
pub use transport::{I2cTransport, Transport};

/// High-level Grid-EYE driver using an `embedded-hal` I²C bus.
pub type GridEyeDriver<I2C> = GridEye<I2cTransport<I2C>>;
