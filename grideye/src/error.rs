// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use crate::register::Register;

/// Errors from talking to the sensor.
///
/// `E` is the error type of the [`Transport`][crate::Transport] in use.
#[derive(Clone, PartialEq)]
pub enum Error<E> {
    /// Nothing acknowledged at the configured address.
    NotPresent(E),

    /// Writing one of the configuration registers failed.
    ConfigurationWrite {
        /// The register being written when the failure occurred.
        register: Register,
        source: E,
    },

    /// Either selecting a register to read from, or the read itself, failed.
    Transfer(E),
}

impl<E> Error<E> {
    /// The error from the underlying transport.
    pub fn transport_error(&self) -> &E {
        match self {
            Error::NotPresent(err) => err,
            Error::ConfigurationWrite { source, .. } => source,
            Error::Transfer(err) => err,
        }
    }
}

// Custom Debug implementation for consistent naming with the Display output, and so the wrapped
// error is all that needs to implement Debug.
impl<E> fmt::Debug for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotPresent(err) => f.debug_tuple("Error::NotPresent").field(err).finish(),
            Error::ConfigurationWrite { register, source } => f
                .debug_struct("Error::ConfigurationWrite")
                .field("register", register)
                .field("source", source)
                .finish(),
            Error::Transfer(err) => f.debug_tuple("Error::Transfer").field(err).finish(),
        }
    }
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotPresent(err) => write!(f, "No sensor responded: {:?}", err),
            Error::ConfigurationWrite { register, source } => write!(
                f,
                "Unable to write register {:?} (0x{:02X}): {:?}",
                register,
                register.address(),
                source
            ),
            Error::Transfer(err) => write!(f, "Transfer Error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.transport_error())
    }
}
