// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The Grid-EYE register map.
//!
//! Every register on the sensor is a single byte wide and addressed by a single byte. The
//! configuration registers sit at the bottom of the address space, while the pixel data occupies
//! the upper half (0x80 through 0xFF), two bytes per pixel with the low byte first.
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The default I²C address of a Grid-EYE, with the AD_SELECT pin pulled low.
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// The I²C address of a Grid-EYE when the AD_SELECT pin is pulled high.
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// Addresses of the documented registers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Register {
    /// Power control, selects the [operating mode][PowerMode].
    PowerControl = 0x00,

    /// Reset, see [`ResetCommand`].
    Reset = 0x01,

    /// Frame rate select, see [`FrameRate`].
    FrameRate = 0x02,

    /// Interrupt control.
    InterruptControl = 0x03,

    /// Status flags (overflow and interrupt outbreak).
    Status = 0x04,

    /// Status clear.
    StatusClear = 0x05,

    /// Moving average mode.
    Average = 0x07,

    InterruptHighLow = 0x08,
    InterruptHighHigh = 0x09,
    InterruptLowLow = 0x0A,
    InterruptLowHigh = 0x0B,
    InterruptHysteresisLow = 0x0C,
    InterruptHysteresisHigh = 0x0D,

    /// Low byte of the on-chip thermistor reading.
    ThermistorLow = 0x0E,

    /// High byte of the on-chip thermistor reading.
    ThermistorHigh = 0x0F,

    // The interrupt table is one bit per pixel, eight pixels per register.
    InterruptTable0 = 0x10,
    InterruptTable1 = 0x11,
    InterruptTable2 = 0x12,
    InterruptTable3 = 0x13,
    InterruptTable4 = 0x14,
    InterruptTable5 = 0x15,
    InterruptTable6 = 0x16,
    InterruptTable7 = 0x17,

    /// The low byte of the first pixel. The pixel block runs from here through 0xFF.
    PixelBase = 0x80,
}

impl Register {
    /// The register address as sent on the bus.
    pub fn address(self) -> u8 {
        self.into()
    }
}

/// Trait for the single-byte settings written to one of the configuration registers.
pub trait Setting: Copy + Into<u8> {
    /// The register this setting is written to.
    fn register() -> Register;
}

/// Operating modes selected through the power control register.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PowerMode {
    /// Continuous sampling. This is the mode [`initialize`][crate::GridEye::initialize] selects.
    Normal = 0x00,

    /// Low power, no sampling. Registers other than the power control register can't be
    /// accessed while asleep.
    Sleep = 0x10,

    /// Wake up and take a sample every 60 seconds.
    Standby60Seconds = 0x20,

    /// Wake up and take a sample every 10 seconds.
    Standby10Seconds = 0x21,
}

impl Default for PowerMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl Setting for PowerMode {
    fn register() -> Register {
        Register::PowerControl
    }
}

/// The two frame rates the sensor supports.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FrameRate {
    /// 10 frames per second, the default.
    Ten = 0x00,

    /// 1 frame per second.
    One = 0x01,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::Ten
    }
}

impl Setting for FrameRate {
    fn register() -> Register {
        Register::FrameRate
    }
}

impl From<FrameRate> for f32 {
    fn from(frame_rate: FrameRate) -> Self {
        match frame_rate {
            FrameRate::Ten => 10f32,
            FrameRate::One => 1f32,
        }
    }
}

/// Values accepted by the reset register.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ResetCommand {
    /// Clear the status register, interrupt flag and interrupt table.
    Flag = 0x30,

    /// Full reset, returning every register to its power-on value.
    Initial = 0x3F,
}

impl Setting for ResetCommand {
    fn register() -> Register {
        Register::Reset
    }
}
