use pca9685_core::Transport;
use rppal::i2c::I2c;
use tracing::debug;

use crate::error::RpiError;

///SMBus byte transfers on a Linux `/dev/i2c-N` bus.
pub struct RpiBus {
    i2c: I2c,
    bus_number: u8,
    slave_address: Option<u8>,
}

impl RpiBus {
    pub fn open(bus_number: u8) -> Result<Self, RpiError> {
        let i2c = I2c::with_bus(bus_number).map_err(|source| RpiError::Open {
            bus: bus_number,
            source,
        })?;
        Ok(Self::from_i2c(i2c))
    }

    pub fn from_i2c(i2c: I2c) -> Self {
        let bus_number = i2c.bus();
        Self {
            i2c,
            bus_number,
            slave_address: None,
        }
    }

    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }

    //the kernel keeps the slave address per file handle, so only switch when it changes
    fn select(&mut self, address: u8) -> Result<(), RpiError> {
        if self.slave_address != Some(address) {
            debug!("i2c-{}: selecting slave address {:#04x}", self.bus_number, address);
            self.i2c.set_slave_address(u16::from(address))?;
            self.slave_address = Some(address);
        }
        Ok(())
    }
}

impl Transport for RpiBus {
    type Error = RpiError;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), RpiError> {
        self.select(address)?;
        self.i2c.smbus_write_byte(register, value)?;
        Ok(())
    }

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, RpiError> {
        self.select(address)?;
        Ok(self.i2c.smbus_read_byte(register)?)
    }
}
