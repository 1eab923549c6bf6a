// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
pub mod frames;
mod i2c_mock;

pub use i2c_mock::{mock_grideye_at_address, I2cOperation, MockError, MockGridEye};
