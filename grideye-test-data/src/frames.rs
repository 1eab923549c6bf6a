// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Frames of pixel data, along with the temperatures they should convert to.
//!
//! The pixel data is laid out as it is in the sensor's memory, starting at register 0x80: two bytes
//! per pixel, low byte first, rows from top to bottom.

/// A hand held a few centimeters over the right half of the sensor in a ~22℃ room.
pub const HAND_FRAME: [u8; 128] = [
    0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x5B, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x5B, 0x00,
    0x5B, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x5E, 0x00, 0x60, 0x00, 0x61, 0x00, 0x5D, 0x00,
    0x5A, 0x00, 0x5B, 0x00, 0x58, 0x00, 0x5C, 0x00, 0x68, 0x00, 0x71, 0x00, 0x6E, 0x00, 0x67, 0x00,
    0x59, 0x00, 0x5A, 0x00, 0x5B, 0x00, 0x60, 0x00, 0x6F, 0x00, 0x7C, 0x00, 0x7D, 0x00, 0x6E, 0x00,
    0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x63, 0x00, 0x6E, 0x00, 0x7B, 0x00, 0x7C, 0x00, 0x71, 0x00,
    0x5B, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5D, 0x00, 0x69, 0x00, 0x6E, 0x00, 0x6F, 0x00, 0x68, 0x00,
    0x5A, 0x00, 0x5B, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5D, 0x00, 0x63, 0x00, 0x60, 0x00, 0x5C, 0x00,
    0x59, 0x00, 0x5A, 0x00, 0x5B, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x5B, 0x00, 0x58, 0x00,
];

#[rustfmt::skip]
pub const HAND_TEMPERATURES: [f32; 64] = [
    22.00, 22.25, 22.50, 22.75, 22.00, 22.25, 22.50, 22.75,
    22.75, 22.00, 22.25, 22.50, 23.50, 24.00, 24.25, 23.25,
    22.50, 22.75, 22.00, 23.00, 26.00, 28.25, 27.50, 25.75,
    22.25, 22.50, 22.75, 24.00, 27.75, 31.00, 31.25, 27.50,
    22.00, 22.25, 22.50, 24.75, 27.50, 30.75, 31.00, 28.25,
    22.75, 22.00, 22.25, 23.25, 26.25, 27.50, 27.75, 26.00,
    22.50, 22.75, 22.00, 22.25, 23.25, 24.75, 24.00, 23.00,
    22.25, 22.50, 22.75, 22.00, 22.25, 22.50, 22.75, 22.00,
];

/// Looking into a freezer, with the door seal across the top two rows.
pub const FREEZER_FRAME: [u8; 128] = [
    0xD0, 0xFF, 0xD2, 0xFF, 0xD4, 0xFF, 0xD1, 0xFF, 0xD3, 0xFF, 0xD0, 0xFF, 0xD2, 0xFF, 0xD4, 0xFF,
    0xD1, 0xFF, 0xD3, 0xFF, 0xD0, 0xFF, 0xD2, 0xFF, 0xD4, 0xFF, 0xD1, 0xFF, 0xD3, 0xFF, 0xD0, 0xFF,
    0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF,
    0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF,
    0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF,
    0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF,
    0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF,
    0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF, 0xBB, 0xFF, 0xB8, 0xFF, 0xBA, 0xFF, 0xBC, 0xFF, 0xB9, 0xFF,
];

#[rustfmt::skip]
pub const FREEZER_TEMPERATURES: [f32; 64] = [
    -12.00, -11.50, -11.00, -11.75, -11.25, -12.00, -11.50, -11.00,
    -11.75, -11.25, -12.00, -11.50, -11.00, -11.75, -11.25, -12.00,
    -17.50, -17.00, -17.75, -17.25, -18.00, -17.50, -17.00, -17.75,
    -17.25, -18.00, -17.50, -17.00, -17.75, -17.25, -18.00, -17.50,
    -17.00, -17.75, -17.25, -18.00, -17.50, -17.00, -17.75, -17.25,
    -18.00, -17.50, -17.00, -17.75, -17.25, -18.00, -17.50, -17.00,
    -17.75, -17.25, -18.00, -17.50, -17.00, -17.75, -17.25, -18.00,
    -17.50, -17.00, -17.75, -17.25, -18.00, -17.50, -17.00, -17.75,
];

/// Thermistor register contents (low, high) for 25℃.
pub const ROOM_THERMISTOR: [u8; 2] = [0x90, 0x01];
