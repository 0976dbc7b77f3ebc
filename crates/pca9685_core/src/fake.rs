//!In-memory stand-in for a PCA9685 on a bus, for tests and dry runs.
use std::collections::HashMap;

use thiserror::Error;

use crate::registers::MODE_1;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FakeBusError {
    #[error("register {0:#04x} was never written")]
    UnsetRegister(u8),
    #[error("injected write failure")]
    Injected,
}

///A register map plus the ordered history of every write made to it.
///
/// Seeded with MODE_1 = `0b0001_0001` (asleep, ALLCALL) and channel 0 OFF = 2047.
#[derive(Debug, Clone)]
pub struct FakeBus {
    bus_number: u8,
    values: HashMap<u8, u8>,
    writes: Vec<(u8, u8)>,
    writes_before_failure: Option<usize>,
}

impl FakeBus {
    pub fn new(bus_number: u8) -> Self {
        Self {
            bus_number,
            values: HashMap::from([(MODE_1, 0b0001_0001), (8, 255), (9, 7)]),
            writes: Vec::new(),
            writes_before_failure: None,
        }
    }

    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }

    ///Every `(register, value)` written, oldest first.
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub fn value(&self, register: u8) -> Option<u8> {
        self.values.get(&register).copied()
    }

    ///Seeds a register without recording a write.
    pub fn set_value(&mut self, register: u8, value: u8) {
        self.values.insert(register, value);
    }

    ///Lets `count` more writes through, then fails every write after.
    pub fn fail_writes_after(&mut self, count: usize) {
        self.writes_before_failure = Some(count);
    }
}

impl Transport for FakeBus {
    type Error = FakeBusError;

    fn write_byte(&mut self, _address: u8, register: u8, value: u8) -> Result<(), FakeBusError> {
        if let Some(remaining) = self.writes_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(FakeBusError::Injected);
            }
            *remaining -= 1;
        }
        self.values.insert(register, value);
        self.writes.push((register, value));
        Ok(())
    }

    fn read_byte(&mut self, _address: u8, register: u8) -> Result<u8, FakeBusError> {
        self.value(register)
            .ok_or(FakeBusError::UnsetRegister(register))
    }
}
