//!This library provides the Linux side of the PCA9685 driver. It is a wrapper around the rppal library.
//!
//! The `open` function discovers an I2C bus (unless one is given) and returns a ready `Pca9685` controller.

//internal error type for the rppal transport
pub mod error;

//enumeration of /dev/i2c-* bus devices
pub mod discovery;

//rppal smbus transport
pub mod bus;

pub use bus::RpiBus;
pub use discovery::{discover_buses, discover_buses_in};
pub use error::RpiError;

use pca9685_core::{Error, Pca9685};

//open a controller on the given bus, or on the first bus found in /dev
pub fn open(address: u8, bus_number: Option<u8>) -> Result<Pca9685<RpiBus>, Error<RpiError>> {
    Pca9685::connect(address, bus_number, discover_buses, RpiBus::open)
}
