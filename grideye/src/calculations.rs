// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Conversions from the raw register contents into temperatures.
//!
//! Compared to the Melexis cameras, the Grid-EYE does nearly all of its processing on-chip. Each
//! pixel is reported as a signed count of quarter degrees Celsius, and the thermistor as a
//! sign-magnitude count of sixteenths of a degree. None of these functions touch the bus, so they
//! can be used on data retrieved some other way.

/// The number of pixel columns.
pub const WIDTH: usize = 8;

/// The number of pixel rows.
pub const HEIGHT: usize = 8;

/// The total number of pixels.
pub const NUM_PIXELS: usize = WIDTH * HEIGHT;

/// The number of bytes of pixel data read each frame, two per pixel.
pub const NUM_BYTES: usize = NUM_PIXELS * 2;

/// Degrees Celsius represented by one count of a pixel value.
pub const PIXEL_RESOLUTION: f32 = 0.25;

/// Degrees Celsius represented by one count of the thermistor value.
pub const THERMISTOR_RESOLUTION: f32 = 0.0625;

// `pixel_index` uses HEIGHT as the row stride, which is only the same thing as WIDTH for a square
// array.
const _: () = assert!(WIDTH == HEIGHT, "pixel indexing assumes a square array");

/// Map a (column, row) coordinate to an index into the pixel array.
///
/// Coordinates outside of the array return `None`. Pixels are stored row-major, so the index is
/// `column + row * 8`.
pub fn pixel_index(column: usize, row: usize) -> Option<usize> {
    if column < WIDTH && row < HEIGHT {
        Some((column % WIDTH) + row * HEIGHT)
    } else {
        None
    }
}

/// Convert the two bytes of a pixel register pair into degrees Celsius.
///
/// ```
/// # use grideye::calculations::raw_to_celsius;
/// assert_eq!(raw_to_celsius(0x64, 0x00), 25.0);
/// assert_eq!(raw_to_celsius(0xFC, 0xFF), -1.0);
/// ```
pub fn raw_to_celsius(lsb: u8, msb: u8) -> f32 {
    i16::from_le_bytes([lsb, msb]) as f32 * PIXEL_RESOLUTION
}

/// Convert an entire frame of raw pixel data into temperatures.
///
/// Every value in `destination` is overwritten.
pub fn raw_pixels_to_temperatures(raw: &[u8; NUM_BYTES], destination: &mut [f32; NUM_PIXELS]) {
    raw.chunks_exact(2)
        .zip(destination.iter_mut())
        .for_each(|(pair, temperature)| *temperature = raw_to_celsius(pair[0], pair[1]));
}

/// Convert the thermistor register pair into degrees Celsius.
///
/// The thermistor value is 12 bits, with the most significant of those bits being a sign flag
/// and the rest the magnitude (not two's complement like the pixels).
pub fn thermistor_to_celsius(lsb: u8, msb: u8) -> f32 {
    let raw = u16::from_le_bytes([lsb, msb]);
    let magnitude = (raw & 0x07FF) as f32 * THERMISTOR_RESOLUTION;
    if raw & 0x0800 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn pixel_conversion() {
        // The worked example: 0x0064 is 100 quarter-degrees.
        assert_eq!(raw_to_celsius(0x64, 0x00), 25.0);
        assert_eq!(raw_to_celsius(0x00, 0x00), 0.0);
        assert_eq!(raw_to_celsius(0x01, 0x00), 0.25);
        // The datasheet's example values
        assert_eq!(raw_to_celsius(0xF4, 0x01), 125.0);
        assert_eq!(raw_to_celsius(0xFF, 0xFF), -0.25);
        assert_eq!(raw_to_celsius(0x24, 0xFF), -55.0);
    }

    #[test]
    fn pixel_conversion_extremes() {
        assert_eq!(raw_to_celsius(0xFF, 0x7F), i16::MAX as f32 * 0.25);
        assert_eq!(raw_to_celsius(0x00, 0x80), i16::MIN as f32 * 0.25);
    }

    #[test]
    fn frame_conversion() {
        let mut raw = [0u8; NUM_BYTES];
        for (index, pair) in raw.chunks_exact_mut(2).enumerate() {
            let value = (index as i16 - 32) * 10;
            pair.copy_from_slice(&value.to_le_bytes());
        }
        let mut temperatures = [f32::NAN; NUM_PIXELS];
        raw_pixels_to_temperatures(&raw, &mut temperatures);
        for (index, temperature) in temperatures.iter().enumerate() {
            let expected = (index as f32 - 32.0) * 2.5;
            assert_approx_eq!(f32, *temperature, expected, epsilon = 0.0001);
        }
    }

    #[test]
    fn thermistor_conversion() {
        // Datasheet examples for the thermistor output.
        assert_eq!(thermistor_to_celsius(0xF0, 0x07), 127.0);
        assert_eq!(thermistor_to_celsius(0x90, 0x01), 25.0);
        assert_eq!(thermistor_to_celsius(0x04, 0x00), 0.25);
        assert_eq!(thermistor_to_celsius(0x00, 0x00), 0.0);
        assert_eq!(thermistor_to_celsius(0x04, 0x08), -0.25);
        assert_eq!(thermistor_to_celsius(0xBB, 0x0B), -59.6875);
    }

    #[test]
    fn index_in_bounds() {
        assert_eq!(pixel_index(0, 0), Some(0));
        assert_eq!(pixel_index(7, 0), Some(7));
        assert_eq!(pixel_index(0, 1), Some(8));
        assert_eq!(pixel_index(3, 5), Some(43));
        assert_eq!(pixel_index(7, 7), Some(63));
    }

    #[test]
    fn index_out_of_bounds() {
        assert_eq!(pixel_index(8, 0), None);
        assert_eq!(pixel_index(0, 8), None);
        assert_eq!(pixel_index(8, 8), None);
        assert_eq!(pixel_index(usize::MAX, 3), None);
    }
}
