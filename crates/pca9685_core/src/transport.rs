//!Byte-level register access to a device on a two-wire bus.
use std::fmt::Debug;

use embedded_hal::i2c::I2c;

///Single register reads and writes addressed to a 7 bit device address.
///
/// Implementations perform blocking bus transactions; timeouts, if any, are theirs to apply.
pub trait Transport {
    type Error: Debug;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(address, register, value)
    }

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte(address, register)
    }
}

///Adapts any `embedded-hal` 1.0 blocking I2C bus into a [`Transport`].
pub struct HalBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for HalBus<I2C> {
    type Error = I2C::Error;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(address, &[register], &mut buffer)?;
        Ok(buffer[0])
    }
}
